//! Scoped transactions.
//!
//! The pool hands out one connection for the transaction; it is committed
//! when the closure returns `Ok`, rolled back otherwise, and returned to the
//! pool on every path (a dropped `DatabaseTransaction` rolls back too).
use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::errors::ServiceError;

pub type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'c>>;

pub async fn with_transaction<T, F>(db: &DatabaseConnection, f: F) -> Result<T, ServiceError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T>,
{
    let txn = db.begin().await?;
    let outcome = f(&txn).await;
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "rollback failed; connection discarded");
            }
            Err(e)
        }
    }
}
