//! Query parameter types for API handlers.

use cinedex_core::catalog::{Pagination, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use serde::Deserialize;

/// Page parameters for `GET /movies` (`?page=&limit=`).
///
/// Missing values default to page 1 with 10 rows. Non-positive values are
/// passed through; the catalog clamps the resulting offset and limit.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}

/// Parameters for `GET /movies/search`.
#[derive(Debug, Deserialize)]
pub struct MovieSearchParams {
    pub title: Option<String>,
    pub genre: Option<String>,
}
