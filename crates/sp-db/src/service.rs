//! Service handle that owns the database and hosts the repo methods.
//!
//! Repos in [`crate::repos`] add their methods via `impl PlannerService`
//! blocks, so a single value carries the connection into every call.

use crate::PlannerDb;
use crate::error::DatabaseError;

pub struct PlannerService {
    db: PlannerDb,
}

impl PlannerService {
    /// Open a service backed by a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PlannerDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Wrap an already-open database.
    #[must_use]
    pub const fn from_db(db: PlannerDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PlannerDb {
        &self.db
    }
}
