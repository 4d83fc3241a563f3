#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use staybook_core::usecases as uc;
use std::{cell::RefCell, ops::Deref, sync::Arc};

mod models;
mod repo_impl;
mod schema;


const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// Persistent settings of the database file.
///
/// The encoding can only be chosen before the first table is created.
const DATABASE_PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA encoding = 'UTF-8';
"#;

/// Settings that SQLite forgets whenever a connection is closed.
const CONNECTION_PRAGMAS: &str = r#"
PRAGMA foreign_keys = ON;
PRAGMA synchronous = NORMAL;
PRAGMA busy_timeout = 5000;
"#;

/// Applies [`CONNECTION_PRAGMAS`] to every connection the pool opens.
#[derive(Debug)]
struct ConnectionSettings;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// A pooled connection that keeps the pool locked while in use.
pub struct Locked<G> {
    _lock: G,
    conn: RefCell<PooledConnection>,
}

/// Read access, shared with other readers.
pub type DbReadOnly<'a> = Locked<RwLockReadGuard<'a, ConnectionPool>>;

/// Write access, at most one at a time.
pub type DbReadWrite<'a> = Locked<RwLockWriteGuard<'a, ConnectionPool>>;

impl<G> Locked<G>
where
    G: Deref<Target = ConnectionPool>,
{
    fn checkout(lock: G, access: &str) -> Fallible<Self> {
        let conn = lock.get().map_err(|err| {
            log::error!("No pooled database connection available for {access} access: {err}");
            anyhow!(err)
        })?;
        Ok(Self {
            _lock: lock,
            conn: RefCell::new(conn),
        })
    }
}

/// The connection handed to the closure of [`DbReadWrite::transaction`].
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

enum TransactionError {
    Aborted(uc::Error),
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err)
    }
}

impl DbReadWrite<'_> {
    /// Runs `f` in a transaction that is only committed if `f` succeeds.
    ///
    /// The error of `f` is returned unmodified after the rollback.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let conn: &mut SqliteConnection = self.conn.get_mut();
        conn.transaction::<_, TransactionError, _>(|conn| {
            f(&DbConnection::new(conn)).map_err(|err| TransactionError::Aborted(err.into()))
        })
        .map_err(|err| match err {
            TransactionError::Aborted(err) => {
                log::debug!("Transaction rolled back: {err}");
                err
            }
            TransactionError::Database(err) => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }
}

#[derive(Clone)]
pub struct Connections {
    // Many readers or a single writer. The availability check and
    // the insert of a booking both happen while holding the write
    // lock, so competing bookings of a spot are serialized.
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 keeps retrying and logging if the database file is
        // inaccessible, e.g. ":/tmp/staybook.sqlite". Open a plain
        // connection first to fail immediately.
        use diesel::Connection as _;
        SqliteConnection::establish(url)
            .map_err(|err| anyhow!("Failed to open database '{url}': {err}"))?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionSettings))
            .build(ConnectionManager::new(url))?;
        pool.get()?.batch_execute(DATABASE_PRAGMAS)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        Locked::checkout(self.pool.read(), "read-only")
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        Locked::checkout(self.pool.write(), "read/write")
    }
}

pub fn run_embedded_database_migrations(mut db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let conn: &mut SqliteConnection = db.conn.get_mut();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
    for version in &applied {
        log::debug!("Applied database migration {version}");
    }
    Ok(())
}
