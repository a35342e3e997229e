use crate::error::Result;
use crate::state::AppState;
use crate::store::books::BookRepo;
use crate::store::Page;
use actix_web::{web, HttpResponse};

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse> {
    let books = state
        .db
        .run(|conn| BookRepo::list(conn, Page::all()))
        .await?;
    Ok(HttpResponse::Ok().json(books))
}
