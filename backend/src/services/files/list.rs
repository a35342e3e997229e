use crate::error::Result;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::responses::FileList;

pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse> {
    let files = state.files.list().await?;
    Ok(HttpResponse::Ok().json(FileList { files }))
}
