//! Shared application state handed to every handler.
//!
//! `AppState` is built once in `main.rs` from the loaded `Config` and registered
//! with Actix as `web::Data`. Handlers reach the record store, the upload
//! directory and the exam coordination logic through it, rather than opening
//! connections or touching directories on their own.

use crate::config::Config;
use crate::error::Result;
use crate::services::exams::service::ExamService;
use crate::store::database::Database;
use crate::store::files::FileStore;

#[derive(Clone)]
pub struct AppState {
    /// Connection handle used directly by the book handlers.
    pub db: Database,

    /// Upload directory, used directly by the plain upload/download endpoints.
    pub files: FileStore,

    /// Record/file coordination for exams.
    pub exams: ExamService,

    /// Size cap applied while reading multipart file parts.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(db: Database, files: FileStore, max_upload_bytes: usize) -> Self {
        let exams = ExamService::new(db.clone(), files.clone());
        Self {
            db,
            files,
            exams,
            max_upload_bytes,
        }
    }

    /// Opens the database and the upload directory named by the configuration.
    pub fn open(config: &Config) -> Result<Self> {
        let db = Database::open(&config.storage.database_path)?;
        let files = FileStore::new(&config.storage.upload_dir)?;
        Ok(Self::new(db, files, config.storage.max_upload_bytes))
    }
}
