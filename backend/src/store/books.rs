use crate::error::Result;
use crate::store::Page;
use common::model::book::{Book, BookUpdate, NewBook};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Data access for the `books` table.
pub struct BookRepo;

impl BookRepo {
    pub fn create(conn: &Connection, new: &NewBook) -> Result<Book> {
        conn.execute(
            "INSERT INTO books (title, author) VALUES (?1, ?2)",
            params![&new.title, &new.author],
        )?;
        Ok(Book {
            id: conn.last_insert_rowid(),
            title: new.title.clone(),
            author: new.author.clone(),
        })
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Book>> {
        let book = conn
            .query_row(
                "SELECT id, title, author FROM books WHERE id = ?1",
                params![id],
                Self::row_to_book,
            )
            .optional()?;
        Ok(book)
    }

    /// Lists books in insertion order.
    pub fn list(conn: &Connection, page: Page) -> Result<Vec<Book>> {
        let mut stmt =
            conn.prepare("SELECT id, title, author FROM books ORDER BY id LIMIT ?1 OFFSET ?2")?;
        let books = stmt
            .query_map(params![page.limit_sql(), page.offset_sql()], Self::row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("Listed {} books", books.len());
        Ok(books)
    }

    /// Applies a partial update. Returns `None` when the id does not exist.
    pub fn update(conn: &Connection, id: i64, update: BookUpdate) -> Result<Option<Book>> {
        let Some(mut book) = Self::get(conn, id)? else {
            return Ok(None);
        };
        book.apply(update);
        conn.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3",
            params![&book.title, &book.author, book.id],
        )?;
        Ok(Some(book))
    }

    /// Removes the row and hands back what it contained.
    pub fn delete(conn: &Connection, id: i64) -> Result<Option<Book>> {
        let Some(book) = Self::get(conn, id)? else {
            return Ok(None);
        };
        conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(Some(book))
    }

    fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
        })
    }
}
