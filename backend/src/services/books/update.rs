use crate::error::{ensure_not_blank, AppError, Result};
use crate::state::AppState;
use crate::store::books::BookRepo;
use actix_web::{web, Either, HttpResponse};
use common::model::book::BookUpdate;
use log::info;

/// Handler for `PUT /api/books/{book_id}`.
///
/// Only the fields present in the payload are written; a `null` or missing
/// field keeps its stored value.
pub async fn process(
    state: web::Data<AppState>,
    book_id: web::Path<i64>,
    payload: Either<web::Json<BookUpdate>, web::Form<BookUpdate>>,
) -> Result<HttpResponse> {
    let id = book_id.into_inner();
    let update = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    if let Some(title) = &update.title {
        ensure_not_blank("title", title)?;
    }
    if let Some(author) = &update.author {
        ensure_not_blank("author", author)?;
    }

    let book = state
        .db
        .run(move |conn| BookRepo::update(conn, id, update))
        .await?
        .ok_or_else(|| AppError::not_found("Book"))?;
    info!("Updated book {}", book.id);
    Ok(HttpResponse::Ok().json(book))
}
