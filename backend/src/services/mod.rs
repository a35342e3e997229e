//! HTTP surface of the service.
//!
//! Each resource lives in its own sub-module exposing a `configure_routes()`
//! scope, with one handler module per endpoint. `configure` wires the scopes,
//! the shared state and the extractor settings into an Actix `App`, and `app`
//! adds the middleware the server runs with.

mod assets;
mod books;
pub(crate) mod exams;
mod files;
mod multipart;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, Error};

/// The full application: routes plus request logging and trailing-slash
/// trimming, so `/api/files/` and `/api/files` reach the same handler.
pub fn app(
    state: AppState,
    config: &Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(NormalizePath::trim())
        .wrap(Logger::default())
        .configure(configure(state, config))
}

/// Returns the `App::configure` callback for the whole service.
///
/// Body, path and query extraction failures are reported as `AppError::Validation`
/// so every client error carries the same JSON shape.
pub fn configure(state: AppState, config: &Config) -> impl FnOnce(&mut web::ServiceConfig) {
    let body_limit = config.server.body_limit;
    let static_dir = config.storage.static_dir.clone();

    move |cfg: &mut web::ServiceConfig| {
        let upload_dir = state.files.root().to_path_buf();

        cfg.app_data(web::Data::new(state))
            .app_data(
                web::JsonConfig::default()
                    .limit(body_limit)
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .app_data(
                web::FormConfig::default()
                    .limit(body_limit)
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .app_data(
                web::PathConfig::default()
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .service(books::configure_routes())
            .service(exams::configure_routes())
            .service(files::configure_routes())
            .service(files::configure_upload_route());

        assets::configure(cfg, &upload_dir, &static_dir);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::Config;
    use crate::state::AppState;
    use crate::store::database::Database;
    use crate::store::files::FileStore;
    use tempfile::TempDir;

    pub(crate) const BOUNDARY: &str = "shelf-test-boundary";

    /// In-memory database plus a throwaway upload directory.
    pub(crate) struct TestEnv {
        pub(crate) _dir: TempDir,
        pub(crate) state: AppState,
        pub(crate) config: Config,
    }

    pub(crate) fn env() -> TestEnv {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.upload_dir = dir.path().join("uploads");
        config.storage.static_dir = dir.path().join("static");
        config.storage.max_upload_bytes = 1024;

        let db = Database::open_in_memory().unwrap();
        let files = FileStore::new(&config.storage.upload_dir).unwrap();
        let state = AppState::new(db, files, config.storage.max_upload_bytes);
        TestEnv {
            _dir: dir,
            state,
            config,
        }
    }

    pub(crate) fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }
}
