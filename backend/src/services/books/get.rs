use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::books::BookRepo;
use actix_web::{web, HttpResponse};

pub async fn process(state: web::Data<AppState>, book_id: web::Path<i64>) -> Result<HttpResponse> {
    let id = book_id.into_inner();
    let book = state
        .db
        .run(move |conn| BookRepo::get(conn, id))
        .await?
        .ok_or_else(|| AppError::not_found("Book"))?;
    Ok(HttpResponse::Ok().json(book))
}
