//! # Book Service Module
//!
//! Plain CRUD over the `books` table under `/api/books`. Books have no
//! attachments, so the handlers talk to `BookRepo` directly through the shared
//! `Database` handle.
//!
//! ## Sub-modules:
//! - `create`: inserts a book from a JSON or urlencoded body.
//! - `list`: returns every book in insertion order.
//! - `get`: returns one book or 404.
//! - `update`: partial update, omitted fields are kept.
//! - `delete`: removes a book or 404.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/books";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{book_id}", get().to(get::process))
        .route("/{book_id}", put().to(update::process))
        .route("/{book_id}", delete().to(delete::process))
}
