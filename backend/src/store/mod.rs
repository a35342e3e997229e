//! Persistence: the SQLite record store and the upload directory.

pub mod books;
pub mod database;
pub mod exams;
pub mod files;

use common::requests::Pagination;

/// Offset/limit window over an id-ordered listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: Option<u32>,
}

impl Page {
    pub fn all() -> Self {
        Self::default()
    }

    // SQLite treats a negative LIMIT as "no limit".
    fn limit_sql(&self) -> i64 {
        self.limit.map(i64::from).unwrap_or(-1)
    }

    fn offset_sql(&self) -> i64 {
        i64::from(self.offset)
    }
}

impl From<Pagination> for Page {
    fn from(query: Pagination) -> Self {
        Self {
            offset: query.skip.unwrap_or(0),
            limit: query.limit,
        }
    }
}
