pub mod book;
pub mod exam;
