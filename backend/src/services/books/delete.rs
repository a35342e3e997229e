use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::books::BookRepo;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn process(state: web::Data<AppState>, book_id: web::Path<i64>) -> Result<HttpResponse> {
    let id = book_id.into_inner();
    state
        .db
        .run(move |conn| BookRepo::delete(conn, id))
        .await?
        .ok_or_else(|| AppError::not_found("Book"))?;
    info!("Deleted book {}", id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Book deleted" })))
}
