use crate::{
    config::Config,
    error::Result,
    month::{DateRange, shift_months},
};
use chrono::NaiveDate;
use sqlx::{Connection, Postgres, Transaction};
use tracing::{debug, error, info};

/// Role granted read access on every new partition.
const GRANT_ROLE: &str = "view";

/// Create partitions for every month in `range` and prepare the matching
/// `GRANT` statements.
///
/// The whole batch runs in one transaction: a failure in any month rolls back
/// everything issued so far and aborts the command.
///
/// # Errors
///
/// Returns [`crate::error::Error::Database`] when the connection cannot be
/// opened or any statement fails; the transaction is rolled back first and
/// the original database error is kept as the cause.
pub async fn execute(config: &Config, range: DateRange) -> Result<()> {
    let mut conn = super::connect(&config.database).await?;
    let mut tx = conn.begin().await?;

    match create_parts(&mut tx, range).await {
        Ok(()) => {
            tx.commit().await?;
            Ok(())
        }
        Err(err) => {
            error!("DatabaseError: {err}");
            let _ = tx.rollback().await;
            Err(err)
        }
    }
}

async fn create_parts(tx: &mut Transaction<'_, Postgres>, range: DateRange) -> Result<()> {
    let from = range.from.format("%Y-%m-%d").to_string();
    let to = range.to.format("%Y-%m-%d").to_string();

    info!("SELECT create_parts('{from}'::timestamp, '{to}'::timestamp)");
    sqlx::query("SELECT create_parts($1::timestamp, $2::timestamp)")
        .bind(&from)
        .bind(&to)
        .execute(tx.as_mut())
        .await?;

    // Grant privileges to all new tables, one month at a time
    let mut month = range.from;
    while month <= range.to {
        let suffix = month_suffix(month);
        debug!(
            "SELECT relname FROM pg_stat_user_tables WHERE schemaname='public' \
             AND relname LIKE '{suffix}'"
        );
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT relname FROM pg_stat_user_tables WHERE schemaname='public' \
             AND relname LIKE $1",
        )
        .bind(&suffix)
        .fetch_all(tx.as_mut())
        .await?;

        // The grant is rendered into the log only; issuing it is left to the
        // operator.
        for table in tables {
            info!("GRANT SELECT ON {table} TO {GRANT_ROLE}");
        }

        month = shift_months(month, 1);
    }

    Ok(())
}

/// `LIKE` pattern matching partition tables of one month, e.g. `%_17_10`.
fn month_suffix(month: NaiveDate) -> String {
    format!("%{}", month.format("_%y_%m"))
}
