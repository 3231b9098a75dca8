#[macro_use]
extern crate diesel;

use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ocdb_core::{repositories as repo, usecases as uc};

mod models;
mod repo_impl;
mod schema;
mod util;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type Manager = r2d2::ConnectionManager<SqliteConnection>;
type Pool = r2d2::Pool<Manager>;
type PooledConn = r2d2::PooledConnection<Manager>;

/// Handle on the connection pool, cheap to clone.
///
/// The pool sits behind a read/write lock: any number of read-only
/// connections may be checked out concurrently, but only one connection
/// with write access at a time. Serializing the writers here keeps
/// SQLite from answering with SQLITE_LOCKED ("database is locked")
/// under concurrent load.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<Pool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // A throwaway connection is established first to fail early:
        // with an inaccessible file r2d2 retries and logs instead of
        // returning an error. It also creates a missing database file,
        // so everything after this point may assume one exists.
        use diesel::Connection as _;
        drop(SqliteConnection::establish(url)?);

        let pool = Pool::builder()
            .max_size(pool_size)
            .build(Manager::new(url))?;
        configure_database_engine(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let locked_pool = self.pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
        })?;
        Ok(DbReadOnly {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let locked_pool = self.pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
        })?;
        Ok(DbReadWrite {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

/// A pooled connection holding the read lock.
pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, Pool>,
    conn: RefCell<PooledConn>,
}

/// A pooled connection holding the write lock.
pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, Pool>,
    conn: RefCell<PooledConn>,
}

/// The connection inside an open transaction.
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

impl DbReadWrite<'_> {
    /// Runs `f` inside a database transaction.
    ///
    /// A business error returned by `f` must roll back the transaction
    /// without being swallowed by Diesel, so it is stashed outside the
    /// closure and restored after the rollback.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut stashed_error = None;
        self.conn
            .borrow_mut()
            .transaction(|conn| {
                f(&DbConnection::new(conn)).map_err(|err| {
                    stashed_error = Some(err.into());
                    diesel::result::Error::RollbackTransaction
                })
            })
            .map_err(|err| match stashed_error {
                Some(stashed) => {
                    debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                    stashed
                }
                None => uc::Error::Repo(match err {
                    diesel::result::Error::NotFound => repo::Error::NotFound,
                    _ => repo::Error::Other(err.into()),
                }),
            })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConn> {
        self.conn.borrow_mut()
    }
}

/// Configure the database engine.
///
/// The repository implementations rely on this configuration, e.g. on
/// enforced foreign keys and recursive cascading deletes.
///
/// Some values like the text encoding can only be changed once after the
/// database has initially been created.
fn configure_database_engine(connection: &mut SqliteConnection) -> Fallible<()> {
    use diesel::RunQueryDsl as _;
    diesel::sql_query(r#"
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA wal_autocheckpoint = 1000; -- write WAL changes back every 1000 pages (default)
PRAGMA wal_checkpoint(TRUNCATE);  -- truncate possibly massive WAL files from the last run
PRAGMA secure_delete = 0;         -- avoid some disk I/O
PRAGMA automatic_index = 1;       -- detect and log missing indexes
PRAGMA foreign_keys = 1;          -- check foreign key constraints
PRAGMA defer_foreign_keys = 1;    -- delay enforcement of foreign key constraints until commit
PRAGMA recursive_triggers = 1;    -- for recursive ON CASCADE DELETE actions
PRAGMA encoding = 'UTF-8';
"#).execute(connection)?;
    Ok(())
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) {
    log::info!("Running embedded database migrations");
    conn.sqlite_conn()
        .run_pending_migrations(MIGRATIONS)
        .unwrap();
}
