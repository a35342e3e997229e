use crate::error::Result;
use crate::state::AppState;
use actix_files::NamedFile;
use actix_web::web;

/// Handler for `GET /api/files/{filename}`. Streams the stored file with a
/// content type guessed from its extension.
pub async fn process(state: web::Data<AppState>, filename: web::Path<String>) -> Result<NamedFile> {
    let path = state.files.path(&filename).await?;
    Ok(NamedFile::open_async(path).await?)
}
