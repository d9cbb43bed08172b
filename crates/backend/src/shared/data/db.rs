use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

const CREATE_PRODUCTS_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL,
        product_name TEXT NOT NULL,
        package_unit TEXT NOT NULL,
        contact TEXT
    );
"#;

/// Открывает файл БД (создаёт каталог и файл при необходимости) и
/// гарантирует наличие схемы.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database: {}", absolute_path.display());
    connect(&db_url, None).await
}

/// Connects to `db_url` and bootstraps the schema.
///
/// `max_connections` must be `Some(1)` for `sqlite::memory:`, otherwise every
/// pooled connection sees its own empty database.
pub async fn connect(db_url: &str, max_connections: Option<u32>) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_string());
    options.sqlx_logging(false);
    if let Some(max) = max_connections {
        options.max_connections(max).min_connections(1);
    }

    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_PRODUCTS_TABLE_SQL.to_string(),
    ))
    .await?;
    tracing::debug!("Schema check complete: products");
    Ok(())
}

#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    connect("sqlite::memory:", Some(1))
        .await
        .expect("in-memory sqlite")
}
