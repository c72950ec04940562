use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::Book;
use async_graphql::{Context, FieldResult, Object};

/// Root query object for GraphQL
pub struct Query;

impl Query {
    async fn find_book(ctx: &Context<'_>, idbook: Option<i32>) -> FieldResult<Option<Book>> {
        let Some(idbook) = idbook else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.book_by_id(idbook).await {
            Ok(book) => Ok(book.map(|b| b.into())),
            Err(e) => Err(e.into()),
        }
    }
}

#[Object]
impl Query {
    /// Get Book by IDBook
    async fn book(&self, ctx: &Context<'_>, idbook: Option<i32>) -> FieldResult<Option<Book>> {
        Self::find_book(ctx, idbook).await
    }

    /// Get Book by IDBook
    #[graphql(name = "Book", deprecation = "Use `book` instead")]
    async fn book_legacy(
        &self,
        ctx: &Context<'_>,
        idbook: Option<i32>,
    ) -> FieldResult<Option<Book>> {
        Self::find_book(ctx, idbook).await
    }

    /// Get Full book list
    async fn list(&self, ctx: &Context<'_>) -> FieldResult<Vec<Book>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.list_books().await {
            Ok(books) => Ok(books.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }
}
