//! Static file mounts: the raw upload directory under `/uploads`, and the
//! optional frontend under `/static` with its `index.html` at `/`.

use actix_files::{Files, NamedFile};
use actix_web::web;
use log::{info, warn};
use std::path::Path;

pub fn configure(cfg: &mut web::ServiceConfig, upload_dir: &Path, static_dir: &Path) {
    cfg.service(Files::new("/uploads", upload_dir));

    if !static_dir.is_dir() {
        warn!("Static directory {:?} not found, frontend not served", static_dir);
        return;
    }
    info!("Serving frontend from {:?}", static_dir);

    let index = static_dir.join("index.html");
    cfg.service(Files::new("/static", static_dir)).route(
        "/",
        web::get().to(move || {
            let index = index.clone();
            async move { NamedFile::open_async(index).await }
        }),
    );
}
