//! Static book catalog and the read-only store the GraphQL layer queries.
//!
//! The catalog is built once at startup and never written to afterwards, so
//! it can be shared across request handlers without any locking.

use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// A student record embedded by value in a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub idst: i32,
    pub name: String,
    pub year: i32,
    pub faculty: String,
    /// Enrollment date, free-form text
    pub date: String,
    /// Identifiers of the books associated with this student
    pub books: Vec<i32>,
}

/// A heading attached to a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub description: String,
    /// Free-form price text, never parsed as a number
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub idbook: i32,
    pub title: String,
    pub author: String,
    pub student: Student,
    pub headings: Option<Vec<Heading>>,
}

/// Read-only access to book records
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn book_by_id(&self, idbook: i32) -> Result<Option<Book>>;
    async fn list_books(&self) -> Result<Vec<Book>>;
}

/// Immutable, ordered collection of books with unique identifiers
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.idbook) {
                return Err(CatalogError::DuplicateBookId(book.idbook));
            }
        }
        Ok(Self { books })
    }

    /// The built-in eight-book catalog, in definition order
    pub fn builtin() -> Self {
        Self {
            books: builtin_books(),
        }
    }

    /// Linear scan for the first book with the given identifier
    pub fn find(&self, idbook: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.idbook == idbook)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl BookStore for Catalog {
    async fn book_by_id(&self, idbook: i32) -> Result<Option<Book>> {
        let book = self.find(idbook).cloned();
        debug!(idbook, found = book.is_some(), "Looked up book");
        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }
}

fn student(idst: i32, name: &str, year: i32, faculty: &str, date: &str, books: &[i32]) -> Student {
    Student {
        idst,
        name: name.to_string(),
        year,
        faculty: faculty.to_string(),
        date: date.to_string(),
        books: books.to_vec(),
    }
}

fn heading(description: &str, price: &str) -> Heading {
    Heading {
        description: description.to_string(),
        price: price.to_string(),
    }
}

fn book(
    idbook: i32,
    title: &str,
    author: &str,
    student: Student,
    headings: Option<Vec<Heading>>,
) -> Book {
    Book {
        idbook,
        title: title.to_string(),
        author: author.to_string(),
        student,
        headings,
    }
}

// Students are copied into each book; "Berk" appears under three of them.
fn builtin_books() -> Vec<Book> {
    let mario = student(1, "Mario", 3, "Fit", "21.02.2021", &[1, 8]);
    let beka = student(2, "Beka", 4, "PMI", "12.02.2021", &[2]);
    let jasmin = student(3, "Jasmin", 2, "ItU", "20.02.2021", &[3]);
    let saiko = student(4, "Saiko", 1, "Bi", "01.03.2021", &[4]);
    let berk = student(5, "Berk", 2, "PMI", "28.02.2021", &[5, 6, 7]);

    vec![
        book(
            1,
            "Winnie the Pooh",
            "A.A.Milne",
            mario.clone(),
            Some(vec![heading("something1", "120")]),
        ),
        book(
            2,
            "Harry Potter",
            "J.K.Rowling",
            beka,
            Some(vec![heading("something2", "250")]),
        ),
        book(
            3,
            "Aiport",
            "A.A.Hailey",
            jasmin,
            Some(vec![heading("something3", "180")]),
        ),
        book(
            4,
            "Jeeves and Woosters stories",
            "P.G.Wodehouse",
            saiko,
            Some(vec![heading("something4", "95")]),
        ),
        book(
            5,
            "The Adventures Of Sherlock Holmes",
            "A.C.Doyle",
            berk.clone(),
            Some(vec![heading("something5", "210"), heading("something6", "75")]),
        ),
        book(
            6,
            "Jane Eyre",
            "C.Bronte",
            berk.clone(),
            Some(vec![heading("something6", "75")]),
        ),
        book(
            7,
            "Bridget Jones' Diary",
            "H.Fielding",
            berk,
            Some(vec![heading("something7", "140")]),
        ),
        book(8, "To Kill Mockingbird", "H.Lee", mario, None),
    ]
}
