use anyhow::Result;
use migration::SchemaManager;
use sea_orm::ConnectionTrait;

use super::memory_db;
use crate::db::ensure_schema;
use crate::errors::ModelError;

#[tokio::test]
async fn ensure_schema_creates_every_table() -> Result<()> {
    let db = memory_db().await?;
    ensure_schema(&db).await?;

    let manager = SchemaManager::new(&db);
    for table in ["usuarios", "perfis", "agendamentos", "reviews", "fidelidades"] {
        assert!(manager.has_table(table).await?, "missing table {table}");
    }
    assert!(manager.has_column("reviews", "rating").await?);
    assert!(manager.has_column("agendamentos", "usuario_id").await?);
    Ok(())
}

#[tokio::test]
async fn ensure_schema_is_idempotent() -> Result<()> {
    let db = memory_db().await?;
    ensure_schema(&db).await?;
    ensure_schema(&db).await?;
    Ok(())
}

#[tokio::test]
async fn ensure_schema_adds_columns_missing_from_older_tables() -> Result<()> {
    let db = memory_db().await?;
    db.execute_unprepared(
        "CREATE TABLE reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author_name VARCHAR(100),
            content TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .await?;
    db.execute_unprepared(
        "CREATE TABLE agendamentos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            age INT,
            phone VARCHAR(20),
            service VARCHAR(100),
            data_agendamento DATE,
            hora TIME,
            observacoes TEXT
        )",
    )
    .await?;

    ensure_schema(&db).await?;

    let manager = SchemaManager::new(&db);
    assert!(manager.has_column("reviews", "rating").await?);
    assert!(manager.has_column("agendamentos", "usuario_id").await?);
    Ok(())
}

#[tokio::test]
async fn ensure_schema_resumes_when_an_index_already_exists() -> Result<()> {
    let db = memory_db().await?;
    db.execute_unprepared(
        "CREATE TABLE agendamentos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            age INT,
            phone VARCHAR(20),
            service VARCHAR(100),
            data_agendamento DATE,
            hora TIME,
            observacoes TEXT,
            usuario_id INT
        )",
    )
    .await?;
    db.execute_unprepared("CREATE INDEX idx_agendamentos_usuario ON agendamentos (usuario_id)").await?;

    ensure_schema(&db).await?;

    let manager = SchemaManager::new(&db);
    assert!(manager.has_index("agendamentos", "idx_agendamentos_usuario").await?);
    assert!(manager.has_index("fidelidades", "idx_fidelidades_usuario").await?);
    assert!(manager.has_index("perfis", "idx_perfis_nome").await?);
    Ok(())
}

#[tokio::test]
async fn connect_reports_unreachable_backend() {
    let cfg = configs::DatabaseConfig {
        url: "mysql://root@127.0.0.1:1/vipcortes".into(),
        connect_timeout_secs: 1,
        acquire_timeout_secs: 1,
        ..configs::DatabaseConfig::default()
    };
    let res = crate::db::connect(&cfg).await;
    assert!(matches!(res, Err(ModelError::Connect(_))));
}
