use crate::error::{AppError, Result};
use crate::state::AppState;
use actix_web::{web, HttpResponse};

pub async fn process(state: web::Data<AppState>, exam_id: web::Path<i64>) -> Result<HttpResponse> {
    let exam = state
        .exams
        .get_exam(exam_id.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Exam"))?;
    Ok(HttpResponse::Ok().json(exam))
}
