pub mod create;
pub mod drop;

use crate::{config::DatabaseConfig, error::Result};
use sqlx::{
    ConnectOptions,
    postgres::{PgConnectOptions, PgConnection},
};
use tracing::error;

/// Open a single connection using credentials from the configuration file.
///
/// Exactly one connection exists per process run; it is released when the
/// calling command's scope ends, on every exit path.
///
/// # Errors
///
/// Returns [`crate::error::Error::Database`] when the server cannot be
/// reached or refuses the credentials.
pub async fn connect(db: &DatabaseConfig) -> Result<PgConnection> {
    let mut options = PgConnectOptions::new()
        .host(&db.host)
        .username(&db.user)
        .database(&db.database);

    if let Some(password) = &db.password {
        options = options.password(password);
    }

    if let Some(port) = db.port {
        options = options.port(port);
    }

    match options.connect().await {
        Ok(conn) => Ok(conn),
        Err(err) => {
            error!("DB connection failed: {err}");
            Err(err.into())
        }
    }
}
