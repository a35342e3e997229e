use crate::error::{AppError, Result};
use crate::state::AppState;
use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web;
use mime_guess::from_path;

/// Handler for `GET /api/exams/{exam_id}/file`: streams the attachment of one
/// exam inline, with a content type guessed from its name.
pub async fn process(state: web::Data<AppState>, exam_id: web::Path<i64>) -> Result<NamedFile> {
    let (exam, path) = state
        .exams
        .attachment_path(exam_id.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Exam"))?;

    let file = NamedFile::open_async(path)
        .await?
        .set_content_type(from_path(&exam.filename).first_or_octet_stream())
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(exam.filename)],
        });
    Ok(file)
}
