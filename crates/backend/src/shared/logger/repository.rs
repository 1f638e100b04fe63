use chrono::Utc;
use contracts::shared::logger::LogEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            source: m.source,
            category: m.category,
            message: m.message,
        }
    }
}

/// Fire-and-forget insert; failures go to the tracing log only
pub fn log_event_internal(source: &str, category: &str, message: &str) {
    let source = source.to_string();
    let category = category.to_string();
    let message = message.to_string();

    tokio::spawn(async move {
        if let Err(e) = log_event(&source, &category, &message).await {
            tracing::warn!("Failed to log event: {}", e);
        }
    });
}

pub async fn log_event(source: &str, category: &str, message: &str) -> anyhow::Result<LogEntry> {
    insert_into(get_connection(), source, category, message).await
}

pub async fn insert_into<C: ConnectionTrait>(
    conn: &C,
    source: &str,
    category: &str,
    message: &str,
) -> anyhow::Result<LogEntry> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        source: Set(source.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    };

    let model = active.insert(conn).await?;
    Ok(model.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::ensure_tables;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let first = insert_into(&conn, "client", "not_found", "/missing")
            .await
            .unwrap();
        let second = insert_into(&conn, "server", "startup", "ready")
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.source, "client");
        assert_eq!(first.message, "/missing");
        assert_eq!(Entity::find().all(&conn).await.unwrap().len(), 2);
    }
}
