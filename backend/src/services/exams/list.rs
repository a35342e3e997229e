use crate::error::Result;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::Pagination;

/// Handler for `GET /api/exams?skip=&limit=`.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse> {
    let exams = state.exams.list_exams(query.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(exams))
}
