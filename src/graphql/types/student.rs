use crate::catalog::Student as CatalogStudent;
use async_graphql::Object;

/// GraphQL representation of a Student
#[derive(Clone)]
pub struct Student {
    pub inner: CatalogStudent,
}

impl From<CatalogStudent> for Student {
    fn from(student: CatalogStudent) -> Self {
        Self { inner: student }
    }
}

#[Object]
impl Student {
    async fn idst(&self) -> i32 {
        self.inner.idst
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Academic year
    async fn year(&self) -> i32 {
        self.inner.year
    }

    async fn faculty(&self) -> &str {
        &self.inner.faculty
    }

    /// Enrollment date as recorded, not validated
    async fn date(&self) -> &str {
        &self.inner.date
    }

    /// Identifiers of associated books
    async fn books(&self) -> Vec<i32> {
        self.inner.books.clone()
    }
}
