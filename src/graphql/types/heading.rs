use crate::catalog::Heading as CatalogHeading;
use async_graphql::Object;

/// GraphQL representation of a Heading
#[derive(Clone)]
pub struct Heading {
    pub inner: CatalogHeading,
}

impl From<CatalogHeading> for Heading {
    fn from(heading: CatalogHeading) -> Self {
        Self { inner: heading }
    }
}

#[Object]
impl Heading {
    async fn description(&self) -> &str {
        &self.inner.description
    }

    async fn price(&self) -> &str {
        &self.inner.price
    }
}
