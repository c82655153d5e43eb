use crate::{config::Config, error::Result, month::DateRange};
use sqlx::{Connection, Postgres, Transaction};
use std::fmt::Write as _;
use tracing::{error, info};

/// Drop partitions for `service` in `range` by calling the server-side
/// `drop_parts` routine and log every statement it reports.
///
/// With `dry_run` the transaction is always rolled back, whatever the routine
/// reported: the server may already have executed the destructive statements
/// inside the uncommitted transaction, and the client-side rollback is what
/// makes the dry-run promise hold. Without it, success commits.
///
/// # Errors
///
/// Returns [`crate::error::Error::Database`] when the connection cannot be
/// opened or the routine fails; the transaction is rolled back first and the
/// original database error is kept as the cause.
pub async fn execute(config: &Config, range: DateRange, service: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        info!("=== DRY-RUN ===");
    }

    let mut conn = super::connect(&config.database).await?;
    let mut tx = conn.begin().await?;

    match drop_parts(&mut tx, range, service, dry_run).await {
        Ok(reported) => {
            if reported.is_empty() {
                info!("No such partitions");
            } else {
                for statement in &reported {
                    info!("{statement}");
                }
            }

            if dry_run {
                tx.rollback().await?;
            } else {
                tx.commit().await?;
            }

            Ok(())
        }
        Err(err) => {
            error!("DatabaseError: {err}");
            let _ = tx.rollback().await;
            Err(err)
        }
    }
}

async fn drop_parts(
    tx: &mut Transaction<'_, Postgres>,
    range: DateRange,
    service: &str,
    dry_run: bool,
) -> Result<Vec<String>> {
    let from = range.from.format("%Y-%m-%d").to_string();
    let to = range.to.format("%Y-%m-%d").to_string();

    info!(
        "SELECT drop_parts('{from}'::timestamp, '{to}'::timestamp, '{service}', {dry_run})"
    );
    let reported: Vec<Option<String>> =
        sqlx::query_scalar("SELECT drop_parts($1::timestamp, $2::timestamp, $3, $4)")
            .bind(&from)
            .bind(&to)
            .bind(service)
            .bind(dry_run)
            .fetch_all(tx.as_mut())
            .await?;

    Ok(reported.into_iter().flatten().collect())
}

/// List the services partitions can be dropped for, definition-ordered.
///
/// Read-only; no transaction needed. The `service` table was not designed for
/// this listing, hence the trailing underscore stripped from the
/// `partition_postfix` column.
///
/// # Errors
///
/// Returns [`crate::error::Error::Database`] when the connection cannot be
/// opened or the query fails.
pub async fn list_services(config: &Config) -> Result<Vec<(String, String)>> {
    let mut conn = super::connect(&config.database).await?;

    let services = sqlx::query_as(
        "SELECT trim(trailing '_' from partition_postfix), name FROM service ORDER BY id",
    )
    .fetch_all(&mut conn)
    .await
    .map_err(|err| {
        error!("DatabaseError: {err}");
        err
    })?;

    Ok(services)
}

/// Operator-facing hint printed when `-s/--service` is missing.
#[must_use]
pub fn format_services(services: &[(String, String)]) -> String {
    let mut out = String::from("You have to pass -s/--service argument. Available choices:\n");
    for (name, description) in services {
        let _ = writeln!(out, "  {name:<15}{description}");
    }

    out
}
