use crate::catalog::Book as CatalogBook;
use crate::graphql::types::{Heading, Student};
use async_graphql::Object;

/// GraphQL representation of a Book
#[derive(Clone)]
pub struct Book {
    pub inner: CatalogBook,
}

impl From<CatalogBook> for Book {
    fn from(book: CatalogBook) -> Self {
        Self { inner: book }
    }
}

#[Object]
impl Book {
    /// Catalog-unique book identifier
    async fn idbook(&self) -> i32 {
        self.inner.idbook
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn author(&self) -> &str {
        &self.inner.author
    }

    /// The student associated with this book
    async fn student(&self) -> Student {
        self.inner.student.clone().into()
    }

    async fn headings(&self) -> Option<Vec<Heading>> {
        self.inner
            .headings
            .as_ref()
            .map(|headings| headings.iter().cloned().map(Heading::from).collect())
    }
}
