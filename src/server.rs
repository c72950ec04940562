use crate::config::ServerConfig;
use crate::graphql::{self, GraphQLSchema};
use async_graphql::{Request, Response, ServerError, Variables};
use axum::{extract::RawQuery, response::Json, routing::get, Extension, Router};
use hyper::Server;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Query-string parameters accepted by `GET /book`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookQueryParams {
    pub query: Option<String>,
    pub operation_name: Option<String>,
    /// JSON-encoded variables object
    pub variables: Option<String>,
}

impl BookQueryParams {
    /// Decode a raw query string; the first occurrence of a repeated key wins
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "query" => &mut params.query,
                "operationName" => &mut params.operation_name,
                "variables" => &mut params.variables,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    fn into_request(self) -> std::result::Result<Request, ServerError> {
        let mut request = Request::new(self.query.unwrap_or_default());

        if let Some(name) = self.operation_name.filter(|n| !n.is_empty()) {
            request = request.operation_name(name);
        }

        if let Some(raw) = self.variables.filter(|v| !v.is_empty()) {
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| ServerError::new(format!("Invalid variables: {e}"), None))?;
            request = request.variables(Variables::from_json(value));
        }

        Ok(request)
    }
}

/// GraphQL handler; query-level failures stay in the body with status 200
async fn book_handler(
    Extension(schema): Extension<GraphQLSchema>,
    RawQuery(raw): RawQuery,
) -> Json<Response> {
    let params = BookQueryParams::parse(raw.as_deref().unwrap_or_default());
    let response = match params.into_request() {
        Ok(request) => graphql::execute(&schema, request).await,
        Err(err) => Response::from_errors(vec![err]),
    };
    Json(response)
}

/// Create the HTTP router serving `GET /book`
pub fn create_router(schema: GraphQLSchema) -> Router {
    Router::new()
        .route("/book", get(book_handler))
        .layer(Extension(schema))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(config: &ServerConfig, schema: GraphQLSchema) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = create_router(schema);

    info!("Server is running on http://{}/book", addr);

    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
