use crate::error::{ensure_not_blank, Result};
use crate::state::AppState;
use crate::store::books::BookRepo;
use actix_web::{web, Either, HttpResponse};
use common::model::book::NewBook;
use log::info;

/// Handler for `POST /api/books`. Accepts the book as JSON or as a urlencoded form.
pub async fn process(
    state: web::Data<AppState>,
    payload: Either<web::Json<NewBook>, web::Form<NewBook>>,
) -> Result<HttpResponse> {
    let new = match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    ensure_not_blank("title", &new.title)?;
    ensure_not_blank("author", &new.author)?;

    let book = state
        .db
        .run(move |conn| BookRepo::create(conn, &new))
        .await?;
    info!("Created book {}", book.id);
    Ok(HttpResponse::Ok().json(book))
}
