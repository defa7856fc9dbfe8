//! SQLite connection pool.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Pool of SQLite connections shared across request handlers.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single connection checked out of [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Applies per-connection pragmas when r2d2 opens a connection.
#[derive(Debug)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Build a connection pool for the SQLite database at `database_url`.
///
/// Foreign keys are enforced on every pooled connection so that cascading
/// deletes of cars reach their prices, details and bookings.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout: BUSY_TIMEOUT,
        }))
        .build(manager)
}
