use crate::error::Result;
use crate::services::multipart::MultipartForm;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::exam::NewExam;

/// Handler for `POST /api/exams`.
///
/// Expects the text fields `title`, `code`, `type`, `year`, `userid` and the
/// attachment in a `file` part. The attachment is stored under its upload
/// name before the row is inserted.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse> {
    let mut form = MultipartForm::read(payload, state.max_upload_bytes).await?;

    let fields = NewExam {
        title: form.required("title")?,
        code: form.required("code")?,
        kind: form.required("type")?,
        year: form.required("year")?,
        userid: form.required_i64("userid")?,
    };
    let upload = form.require_file()?;

    let exam = state.exams.create_exam(fields, upload).await?;
    Ok(HttpResponse::Ok().json(exam))
}
