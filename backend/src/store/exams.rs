use crate::error::Result;
use crate::store::Page;
use common::model::exam::{Exam, ExamUpdate, NewExam};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, title, code, type, year, filename, userid";

/// Data access for the `exams` table.
///
/// The repo only stores the attachment name; keeping that name pointing at a
/// real file is `ExamService`'s job.
pub struct ExamRepo;

impl ExamRepo {
    pub fn create(conn: &Connection, new: &NewExam, filename: &str) -> Result<Exam> {
        conn.execute(
            "INSERT INTO exams (title, code, type, year, filename, userid)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &new.title,
                &new.code,
                &new.kind,
                &new.year,
                filename,
                new.userid
            ],
        )?;
        Ok(Exam {
            id: conn.last_insert_rowid(),
            title: new.title.clone(),
            code: new.code.clone(),
            kind: new.kind.clone(),
            year: new.year.clone(),
            filename: filename.to_string(),
            userid: new.userid,
        })
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Exam>> {
        let exam = conn
            .query_row(
                &format!("SELECT {} FROM exams WHERE id = ?1", COLUMNS),
                params![id],
                Self::row_to_exam,
            )
            .optional()?;
        Ok(exam)
    }

    pub fn list(conn: &Connection, page: Page) -> Result<Vec<Exam>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM exams ORDER BY id LIMIT ?1 OFFSET ?2",
            COLUMNS
        ))?;
        let exams = stmt
            .query_map(params![page.limit_sql(), page.offset_sql()], Self::row_to_exam)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("Listed {} exams ({:?})", exams.len(), page);
        Ok(exams)
    }

    pub fn update(conn: &Connection, id: i64, update: ExamUpdate) -> Result<Option<Exam>> {
        let Some(mut exam) = Self::get(conn, id)? else {
            return Ok(None);
        };
        exam.apply(update);
        conn.execute(
            "UPDATE exams
             SET title = ?1, code = ?2, type = ?3, year = ?4, filename = ?5, userid = ?6
             WHERE id = ?7",
            params![
                &exam.title,
                &exam.code,
                &exam.kind,
                &exam.year,
                &exam.filename,
                exam.userid,
                exam.id
            ],
        )?;
        Ok(Some(exam))
    }

    pub fn delete(conn: &Connection, id: i64) -> Result<Option<Exam>> {
        let Some(exam) = Self::get(conn, id)? else {
            return Ok(None);
        };
        conn.execute("DELETE FROM exams WHERE id = ?1", params![id])?;
        Ok(Some(exam))
    }

    fn row_to_exam(row: &Row<'_>) -> rusqlite::Result<Exam> {
        Ok(Exam {
            id: row.get(0)?,
            title: row.get(1)?,
            code: row.get(2)?,
            kind: row.get(3)?,
            year: row.get(4)?,
            filename: row.get(5)?,
            userid: row.get(6)?,
        })
    }
}
