use crate::catalog::BookStore;
use crate::graphql::resolvers::Query;
use crate::metrics;
use async_graphql::{EmptyMutation, EmptySubscription, Request, Response, Schema};
use std::sync::Arc;
use tracing::{debug, warn};

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub store: Arc<dyn BookStore>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema over the given store
pub fn create_schema(store: Arc<dyn BookStore>) -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(GraphQLContext { store })
        .finish()
}

/// Execute one request, recording its outcome in logs and metrics
pub async fn execute(schema: &GraphQLSchema, request: Request) -> Response {
    debug!(query = %request.query, "Executing GraphQL query");
    let response = schema.execute(request).await;

    metrics::record_query(response.is_ok());
    if response.is_err() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        warn!(errors = ?messages, "GraphQL query returned errors");
    }

    response
}
