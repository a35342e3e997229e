use crate::error::{AppError, Result};
use crate::services::multipart::MultipartForm;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::exam::ExamUpdate;

/// Handler for `PUT /api/exams/{exam_id}`.
///
/// Every text field is optional and blank fields are ignored. A new `file`
/// part replaces the attachment reference but the old file is not deleted.
pub async fn process(
    state: web::Data<AppState>,
    exam_id: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let mut form = MultipartForm::read(payload, state.max_upload_bytes).await?;

    let update = ExamUpdate {
        title: form.optional("title"),
        code: form.optional("code"),
        kind: form.optional("type"),
        year: form.optional("year"),
        filename: None,
        userid: form.optional_i64("userid")?,
    };
    let upload = form.take_file();

    let exam = state
        .exams
        .update_exam(exam_id.into_inner(), update, upload)
        .await?
        .ok_or_else(|| AppError::not_found("Exam"))?;
    Ok(HttpResponse::Ok().json(exam))
}
