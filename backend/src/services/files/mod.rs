//! Raw access to the upload directory: `POST /api/upload` stores a file
//! without creating any record, `GET /api/files` lists what is stored and
//! `GET /api/files/{filename}` downloads one file.

mod get;
mod list;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/files";
const UPLOAD_PATH: &str = "/api/upload";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{filename}", get().to(get::process))
}

pub fn configure_upload_route() -> Scope {
    scope(UPLOAD_PATH).route("", post().to(upload::process))
}
