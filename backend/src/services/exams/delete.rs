use crate::error::{AppError, Result};
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// Handler for `DELETE /api/exams/{exam_id}`. Also removes the attachment.
pub async fn process(state: web::Data<AppState>, exam_id: web::Path<i64>) -> Result<HttpResponse> {
    state
        .exams
        .delete_exam(exam_id.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Exam"))?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Exam deleted" })))
}
