use serde::Deserialize;

/// Query string of `GET /api/exams`. Both bounds are optional; omitting them
/// returns every row.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}
