pub mod book;
pub mod heading;
pub mod student;

pub use book::Book;
pub use heading::Heading;
pub use student::Student;
