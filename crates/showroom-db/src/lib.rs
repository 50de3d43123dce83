//! Database layer for the Showroom dealership browser.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! and the embedded SQL migrations that provision the dealership database:
//! the `manufacturers` and `vehicles` tables plus their seed data.
//!
//! # Design decisions
//!
//! - **SQLite**: the dealership database is a single local file with a single
//!   user; an embedded engine is the whole point.
//! - **`r2d2` connection pool**: each user action checks a connection out,
//!   runs its statements, and releases it on drop. The pool exists for reuse
//!   and RAII release, not concurrency.
//! - **Embedded migrations**: SQL files are compiled into the binary via
//!   `include_str!`, so a fresh install provisions and seeds its own
//!   database file on first run.

mod migrations;
mod pool;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
