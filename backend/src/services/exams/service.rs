//! # Exam Service
//!
//! Keeps an exam row and its attachment in step across create, update and
//! delete. The record store and the upload directory are not transactional
//! with each other, so each operation orders its side effects to make the
//! failure cases predictable:
//!
//! - **create**: the file is written first and the row second. A failed write
//!   leaves nothing behind; a failed insert leaves an orphaned file.
//! - **update**: a replacement file is written under its own name before the
//!   row is patched. The previously referenced file stays on disk.
//! - **delete**: the file is removed first (a missing file is fine) and then
//!   the row. A crash in between leaves a row pointing at nothing.

use crate::error::{ensure_not_blank, AppError, Result};
use crate::store::database::Database;
use crate::store::exams::ExamRepo;
use crate::store::files::{FileStore, Upload};
use crate::store::Page;
use common::model::exam::{Exam, ExamUpdate, NewExam};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Clone)]
pub struct ExamService {
    db: Database,
    files: FileStore,
}

impl ExamService {
    pub fn new(db: Database, files: FileStore) -> Self {
        Self { db, files }
    }

    pub async fn create_exam(&self, fields: NewExam, upload: Upload) -> Result<Exam> {
        validate_new_exam(&fields)?;

        // No collision handling: an exam uploaded under an existing name
        // replaces that file for every record pointing at it.
        let filename = self.files.save(&upload.filename, &upload.bytes).await?;

        let stored = filename.clone();
        let created = self
            .db
            .run(move |conn| ExamRepo::create(conn, &fields, &stored))
            .await;

        match created {
            Ok(exam) => {
                info!("Created exam {} with attachment {:?}", exam.id, exam.filename);
                Ok(exam)
            }
            Err(e) => {
                warn!("Exam insert failed, leaving {:?} orphaned: {}", filename, e);
                Err(e)
            }
        }
    }

    /// Returns `Ok(None)` when no exam has this id.
    pub async fn update_exam(
        &self,
        id: i64,
        mut update: ExamUpdate,
        upload: Option<Upload>,
    ) -> Result<Option<Exam>> {
        validate_update(&update)?;

        if self.get_exam(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(upload) = upload {
            // The file the row pointed at before is intentionally left in place.
            let filename = self.files.save(&upload.filename, &upload.bytes).await?;
            update.filename = Some(filename);
        }

        let updated = self
            .db
            .run(move |conn| ExamRepo::update(conn, id, update))
            .await?;
        if let Some(exam) = &updated {
            info!("Updated exam {}", exam.id);
        }
        Ok(updated)
    }

    /// Deletes the exam and, best-effort, its attachment.
    ///
    /// Returns the removed row, or `Ok(None)` when the id does not exist.
    pub async fn delete_exam(&self, id: i64) -> Result<Option<Exam>> {
        let Some(exam) = self.get_exam(id).await? else {
            return Ok(None);
        };

        if !exam.filename.is_empty() {
            match self.files.remove(&exam.filename).await {
                Ok(true) => {}
                Ok(false) => info!("Attachment {:?} of exam {} was already gone", exam.filename, id),
                Err(e) => warn!(
                    "Could not remove attachment {:?} of exam {}: {}",
                    exam.filename, id, e
                ),
            }
        }

        let removed = self.db.run(move |conn| ExamRepo::delete(conn, id)).await?;
        if removed.is_some() {
            info!("Deleted exam {}", id);
        }
        Ok(removed)
    }

    /// Locates the exam's attachment in the upload directory so it can be
    /// streamed back.
    ///
    /// `Ok(None)` means the exam does not exist; an exam whose file is gone
    /// yields `AppError::NotFound`.
    pub async fn attachment_path(&self, id: i64) -> Result<Option<(Exam, PathBuf)>> {
        let Some(exam) = self.get_exam(id).await? else {
            return Ok(None);
        };
        if exam.filename.is_empty() {
            return Err(AppError::not_found("File"));
        }
        let path = self.files.path(&exam.filename).await?;
        Ok(Some((exam, path)))
    }

    pub async fn get_exam(&self, id: i64) -> Result<Option<Exam>> {
        self.db.run(move |conn| ExamRepo::get(conn, id)).await
    }

    pub async fn list_exams(&self, page: Page) -> Result<Vec<Exam>> {
        self.db.run(move |conn| ExamRepo::list(conn, page)).await
    }
}

fn validate_new_exam(fields: &NewExam) -> Result<()> {
    ensure_not_blank("title", &fields.title)?;
    ensure_not_blank("code", &fields.code)?;
    ensure_not_blank("type", &fields.kind)?;
    ensure_not_blank("year", &fields.year)
}

fn validate_update(update: &ExamUpdate) -> Result<()> {
    for (name, value) in [
        ("title", &update.title),
        ("code", &update.code),
        ("type", &update.kind),
        ("year", &update.year),
    ] {
        if let Some(value) = value {
            ensure_not_blank(name, value)?;
        }
    }
    Ok(())
}
