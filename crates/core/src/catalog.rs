//! Consistency and query rules shared by the genre and movie catalogs.
//!
//! Movies reference genres by *name*, not by id. The helpers here decide
//! which requested names are missing, how a genre name is scrubbed from a
//! movie's list, how search input becomes a safe predicate, and how a
//! page number becomes a row offset.

use std::collections::HashSet;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default page number for movie listing.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for movie listing.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Message returned when a search names neither a title nor a genre.
pub const MISSING_SEARCH_PARAMS: &str =
    "At least one search parameter (title or genre) must be provided";

// ---------------------------------------------------------------------------
// Genre existence
// ---------------------------------------------------------------------------

/// Collapse duplicate genre names, keeping the first occurrence of each.
pub fn distinct_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Return the requested genre names that are absent from `found`.
///
/// Requested names are deduplicated first, so a name listed twice is
/// reported at most once. Order follows the first occurrence in `requested`.
///
/// # Examples
///
/// ```
/// use cinedex_core::catalog::missing_genres;
/// let requested = vec!["Action".to_string(), "Noir".to_string(), "Noir".to_string()];
/// let found = vec!["Action".to_string()];
/// assert_eq!(missing_genres(&requested, &found), vec!["Noir".to_string()]);
/// ```
pub fn missing_genres(requested: &[String], found: &[String]) -> Vec<String> {
    let found: HashSet<&str> = found.iter().map(String::as_str).collect();
    distinct_names(requested)
        .into_iter()
        .filter(|name| !found.contains(name.as_str()))
        .collect()
}

/// Build the rejection message for a movie whose genres do not all exist.
pub fn missing_genres_message(missing: &[String]) -> String {
    format!("Genres not found: {}", missing.join(", "))
}

/// Check that every requested genre name was found, or reject the request.
pub fn ensure_genres_exist(requested: &[String], found: &[String]) -> Result<(), CoreError> {
    let missing = missing_genres(requested, found);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidRequest(missing_genres_message(&missing)))
    }
}

// ---------------------------------------------------------------------------
// Cascade cleanup
// ---------------------------------------------------------------------------

/// Remove every entry equal to `name` from a movie's genre list.
///
/// Matching is exact and case-sensitive. Returns `true` if the list changed.
pub fn scrub_genre(genres: &mut Vec<String>, name: &str) -> bool {
    let before = genres.len();
    genres.retain(|g| g != name);
    genres.len() != before
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Validated movie search input.
///
/// At least one of `title` or `genre` is always present. Empty strings are
/// treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    title: Option<String>,
    genre: Option<String>,
}

impl SearchCriteria {
    /// Validate raw search input.
    pub fn new(title: Option<String>, genre: Option<String>) -> Result<Self, CoreError> {
        let title = title.filter(|t| !t.is_empty());
        let genre = genre.filter(|g| !g.is_empty());

        if title.is_none() && genre.is_none() {
            return Err(CoreError::InvalidRequest(MISSING_SEARCH_PARAMS.to_string()));
        }

        Ok(Self { title, genre })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// The `ILIKE` pattern for the title predicate, if a title was given.
    ///
    /// The title is matched as a literal substring: `%`, `_` and `\` in the
    /// input are escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinedex_core::catalog::SearchCriteria;
    /// let c = SearchCriteria::new(Some("100%".into()), None).unwrap();
    /// assert_eq!(c.title_pattern().as_deref(), Some("%100\\%%"));
    /// ```
    pub fn title_pattern(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(|t| format!("%{}%", escape_like(t)))
    }

    /// Evaluate the predicate against a movie held in memory.
    ///
    /// Title matching is a case-insensitive substring test, genre matching is
    /// exact membership. Both must hold when both are given.
    pub fn matches(&self, title: &str, genres: &[String]) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .map_or(true, |needle| title.to_lowercase().contains(&needle.to_lowercase()));
        let genre_ok = self
            .genre
            .as_deref()
            .map_or(true, |wanted| genres.iter().any(|g| g == wanted));
        title_ok && genre_ok
    }
}

/// Escape `LIKE` metacharacters using PostgreSQL's default escape character.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A 1-based page request.
///
/// No validation is done on construction. [`Pagination::offset`] and
/// [`Pagination::limit`] clamp to zero so a non-positive page or limit never
/// reaches the store as a negative `OFFSET`/`LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Row offset `(page - 1) * limit`, saturating and floored at zero.
    pub fn offset(&self) -> i64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .max(0)
    }

    /// Page size floored at zero.
    pub fn limit(&self) -> i64 {
        self.limit.max(0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_LIMIT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
