//! Database access layer for the course catalog
//!
//! All connections are read-only. The catalog is created and populated
//! externally; this crate only queries it.

use sqlx::SqlitePool;
use std::path::Path;

use crate::{Error, Result};

pub mod models;
pub mod queries;

pub use models::{ClassDetails, ClassOverview, DeptCourseNum};
pub use queries::{class_details, like_pattern, search_overviews, OverviewFilters};

/// Connect to the catalog database in read-only mode
///
/// Safety: Uses SQLite mode=ro to prevent any write operations
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::Config(format!(
            "Database not found: {}\nProvide a populated catalog via --database, {}, or the config file.",
            db_path.display(),
            crate::config::DATABASE_ENV_VAR,
        )));
    }

    // mode=ro: Read-only mode
    // immutable=1: Additional safety (SQLite won't write even for internal operations)
    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url).await?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            panic!("SAFETY VIOLATION: Database connection is not read-only!");
        }
    }

    Ok(pool)
}
