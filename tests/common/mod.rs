#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use logmaint::config::{Config, DatabaseConfig};
use logmaint::queries::connect;
use sqlx::PgConnection;
use std::env;

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

pub fn test_config() -> Config {
    Config {
        database: DatabaseConfig {
            host: "localhost".to_string(),
            user: "postgres".to_string(),
            database: "testdb".to_string(),
            password: Some("secret".to_string()),
            port: Some(5432),
        },
    }
}

pub async fn test_connection(config: &Config) -> PgConnection {
    connect(&config.database)
        .await
        .expect("failed to connect to the test database")
}

/// Install stand-ins for the server-side routines the commands call, plus the
/// `service` reference table.
pub async fn setup_schema(config: &Config) {
    let mut conn = test_connection(config).await;

    let statements = [
        "CREATE TABLE IF NOT EXISTS service (
            id integer PRIMARY KEY,
            partition_postfix text NOT NULL,
            name text NOT NULL
        )",
        "INSERT INTO service (id, partition_postfix, name)
         VALUES (1, 'mojeid_', 'MojeID'), (2, 'whois_', 'Unix whois')
         ON CONFLICT (id) DO NOTHING",
        r#"CREATE OR REPLACE FUNCTION create_parts(date_from timestamp, date_to timestamp)
           RETURNS void AS $$
           DECLARE cur timestamp := date_trunc('month', date_from);
           BEGIN
               WHILE cur <= date_to LOOP
                   EXECUTE format('CREATE TABLE IF NOT EXISTS request_%s (id serial)',
                                  to_char(cur, 'YY_MM'));
                   cur := cur + interval '1 month';
               END LOOP;
           END;
           $$ LANGUAGE plpgsql"#,
        r#"CREATE OR REPLACE FUNCTION drop_parts(date_from timestamp, date_to timestamp,
                                                 service text, dry_run boolean)
           RETURNS SETOF text AS $$
           DECLARE cur timestamp := date_trunc('month', date_from);
                   part text;
           BEGIN
               WHILE cur <= date_to LOOP
                   part := format('request_%s_%s', service, to_char(cur, 'YY_MM'));
                   IF EXISTS (SELECT 1 FROM pg_tables
                              WHERE schemaname = 'public' AND tablename = part) THEN
                       EXECUTE format('DROP TABLE %I', part);
                       RETURN NEXT format('DROP TABLE %I', part);
                   END IF;
                   cur := cur + interval '1 month';
               END LOOP;
           END;
           $$ LANGUAGE plpgsql"#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(&mut conn)
            .await
            .unwrap_or_else(|e| panic!("schema setup failed: {e}"));
    }
}

pub async fn create_table(config: &Config, name: &str) {
    let mut conn = test_connection(config).await;
    sqlx::query(&format!("CREATE TABLE IF NOT EXISTS {name} (id serial)"))
        .execute(&mut conn)
        .await
        .unwrap_or_else(|e| panic!("failed to create {name}: {e}"));
}

pub async fn drop_table(config: &Config, name: &str) {
    let mut conn = test_connection(config).await;
    sqlx::query(&format!("DROP TABLE IF EXISTS {name}"))
        .execute(&mut conn)
        .await
        .unwrap_or_else(|e| panic!("failed to drop {name}: {e}"));
}

pub async fn table_exists(config: &Config, name: &str) -> bool {
    let mut conn = test_connection(config).await;
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM pg_tables WHERE schemaname = 'public' AND tablename = $1)",
    )
    .bind(name)
    .fetch_one(&mut conn)
    .await
    .expect("failed to query pg_tables");

    exists
}
