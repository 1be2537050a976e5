//! Request-scoped transactional boundary for mutating handlers.

use sqlx::{Sqlite, SqliteConnection, Transaction};

use crate::DbPool;

/// One transaction spanning a request's writes.
///
/// A unit is opened with [`UnitOfWork::begin`] and ended exactly once with
/// [`UnitOfWork::finish`], which commits on `Ok` and rolls back on `Err`.
/// Both paths consume the unit, returning its connection to the pool. A unit
/// dropped without finishing is rolled back by sqlx.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn begin(pool: &DbPool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection to run the unit's statements on.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    /// Commit if `result` is `Ok`, roll back otherwise, and hand `result` back.
    ///
    /// A failed commit turns an `Ok` into that commit error. A failed rollback
    /// is logged and the original error is returned.
    pub async fn finish<T>(self, result: Result<T, sqlx::Error>) -> Result<T, sqlx::Error> {
        match result {
            Ok(value) => {
                self.tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
