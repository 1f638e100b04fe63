use contracts::domain::a002_quote_request::{QuoteRequest, QuoteRequestId};
use contracts::domain::common::AggregateId;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_quote_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for QuoteRequest {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let id = QuoteRequestId::from_string(&m.id).map_err(anyhow::Error::msg)?;
        Ok(QuoteRequest {
            id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            company: m.company,
            subject: m.subject,
            message: m.message,
            created_at: m.created_at,
        })
    }
}

impl From<&QuoteRequest> for ActiveModel {
    fn from(aggregate: &QuoteRequest) -> Self {
        ActiveModel {
            id: Set(aggregate.to_string_id()),
            name: Set(aggregate.name.clone()),
            email: Set(aggregate.email.clone()),
            phone: Set(aggregate.phone.clone()),
            company: Set(aggregate.company.clone()),
            subject: Set(aggregate.subject.clone()),
            message: Set(aggregate.message.clone()),
            created_at: Set(aggregate.created_at),
        }
    }
}

pub async fn insert(aggregate: &QuoteRequest) -> anyhow::Result<QuoteRequestId> {
    insert_into(get_connection(), aggregate).await
}

pub async fn insert_into<C: ConnectionTrait>(
    conn: &C,
    aggregate: &QuoteRequest,
) -> anyhow::Result<QuoteRequestId> {
    ActiveModel::from(aggregate).insert(conn).await?;
    Ok(aggregate.id)
}

pub async fn get_by_id_from<C: ConnectionTrait>(
    conn: &C,
    id: QuoteRequestId,
) -> anyhow::Result<Option<QuoteRequest>> {
    Entity::find_by_id(id.as_string())
        .one(conn)
        .await?
        .map(QuoteRequest::try_from)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::ensure_tables;
    use contracts::domain::a002_quote_request::QuoteRequestDto;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_insert_then_read_back() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let aggregate = QuoteRequest::new_for_insert(QuoteRequestDto {
            name: "Ana Cruz".into(),
            email: "ana@example.com".into(),
            phone: None,
            company: Some("Cruz Builders".into()),
            subject: "Quote Request: Plywood".into(),
            message: "Need 40 sheets".into(),
        });

        let id = insert_into(&conn, &aggregate).await.unwrap();
        let stored = get_by_id_from(&conn, id).await.unwrap().unwrap();

        assert_eq!(stored.name, "Ana Cruz");
        assert_eq!(stored.phone, None);
        assert_eq!(stored.company.as_deref(), Some("Cruz Builders"));
        assert_eq!(stored.subject, "Quote Request: Plywood");
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let aggregate = QuoteRequest::new_for_insert(QuoteRequestDto {
            name: "Ben".into(),
            email: "ben@example.com".into(),
            subject: "Roofing".into(),
            message: "Hello".into(),
            ..Default::default()
        });
        insert_into(&conn, &aggregate).await.unwrap();
        assert!(insert_into(&conn, &aggregate).await.is_err());
    }
}
