pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;

pub use db::StoreOptions;

use crate::error::Result;
use rusqlite::{Connection, Transaction};
use std::path::Path;

/// One SQLite connection plus typed access to the repositories.
///
/// A `Store` is a single session; open one per thread or process. Callers
/// group writes with [`Store::begin`], which rolls back unless committed.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, &StoreOptions::default())
    }

    pub fn open_with(path: &Path, options: &StoreOptions) -> Result<Self> {
        let conn = db::open(path, options)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory(&StoreOptions::default())?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn begin(&self) -> Result<Transaction<'_>> {
        db::immediate_transaction(&self.conn)
    }

    pub fn customers(&self) -> repo::CustomersRepo<'_> {
        repo::CustomersRepo::new(&self.conn)
    }

    pub fn complaints(&self) -> repo::ComplaintsRepo<'_> {
        repo::ComplaintsRepo::new(&self.conn)
    }

    pub fn interactions(&self) -> repo::InteractionsRepo<'_> {
        repo::InteractionsRepo::new(&self.conn)
    }

    pub fn metrics(&self) -> repo::MetricsRepo<'_> {
        repo::MetricsRepo::new(&self.conn)
    }
}
