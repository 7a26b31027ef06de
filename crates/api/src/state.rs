use cinedex_catalog::{GenreCatalog, MovieCatalog, PgStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health probe.
    pub pool: cinedex_db::DbPool,
    /// Genre catalog backed by the pool.
    pub genres: GenreCatalog<PgStore>,
    /// Movie catalog backed by the pool.
    pub movies: MovieCatalog<PgStore>,
}

impl AppState {
    pub fn new(pool: cinedex_db::DbPool) -> Self {
        let store = PgStore::new(pool.clone());
        Self {
            genres: GenreCatalog::new(store.clone()),
            movies: MovieCatalog::new(store),
            pool,
        }
    }
}
