use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created on first start, keyed by name
const TABLES: &[(&str, &str)] = &[
    (
        "a002_quote_request",
        r#"
        CREATE TABLE a002_quote_request (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            company TEXT,
            subject TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "system_log",
        r#"
        CREATE TABLE system_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            source TEXT NOT NULL,
            category TEXT NOT NULL,
            message TEXT NOT NULL
        );
        "#,
    ),
];

/// Build a sqlite connection url from a file path
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Windows paths need a leading slash and forward separators
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    let conn = Database::connect(&db_url).await?;

    ensure_tables(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create any missing table from [`TABLES`]
pub async fn ensure_tables(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (name, ddl) in TABLES {
        let check = format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
            name
        );
        let existing = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
            .await?;
        if existing.is_empty() {
            tracing::info!("Creating {} table", name);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                ddl.to_string(),
            ))
            .await?;
        }
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/lib/quotes.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/quotes.db?mode=rwc");
    }

    #[tokio::test]
    async fn test_ensure_tables_is_idempotent() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('a002_quote_request','system_log');"
                    .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
    }
}
