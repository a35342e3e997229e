use crate::error::Result;
use crate::services::multipart::MultipartForm;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::responses::UploadResponse;
use log::info;

/// Handler for `POST /api/upload`. Stores the `file` part under its own name,
/// overwriting any file already saved under that name.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse> {
    let mut form = MultipartForm::read(payload, state.max_upload_bytes).await?;
    let upload = form.require_file()?;

    let filename = state.files.save(&upload.filename, &upload.bytes).await?;
    info!("Uploaded {:?} ({} bytes)", filename, upload.bytes.len());

    Ok(HttpResponse::Ok().json(UploadResponse {
        filename,
        message: "File uploaded successfully".to_string(),
    }))
}
