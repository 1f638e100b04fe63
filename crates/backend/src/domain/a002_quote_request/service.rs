use super::repository;
use crate::shared::logger;
use contracts::domain::a002_quote_request::{QuoteRequest, QuoteRequestDto, QuoteRequestId};
use sea_orm::ConnectionTrait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteRequestError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Validate and store a new quote request
pub async fn create(dto: QuoteRequestDto) -> Result<QuoteRequestId, QuoteRequestError> {
    let aggregate = prepare(dto)?;
    let id = repository::insert(&aggregate).await?;
    logger::log(
        "quote_request",
        &format!("Quote request {} from {}", id.value(), aggregate.email),
    );
    Ok(id)
}

/// Same as [`create`] against an explicit connection, without the event log
pub async fn create_in<C: ConnectionTrait>(
    conn: &C,
    dto: QuoteRequestDto,
) -> Result<QuoteRequestId, QuoteRequestError> {
    let aggregate = prepare(dto)?;
    Ok(repository::insert_into(conn, &aggregate).await?)
}

fn prepare(dto: QuoteRequestDto) -> Result<QuoteRequest, QuoteRequestError> {
    dto.validate().map_err(QuoteRequestError::Validation)?;
    Ok(QuoteRequest::new_for_insert(dto))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::ensure_tables;
    use sea_orm::{Database, EntityTrait};

    fn dto() -> QuoteRequestDto {
        QuoteRequestDto {
            name: "  Ana Cruz ".into(),
            email: "ana@example.com".into(),
            phone: Some("   ".into()),
            company: None,
            subject: "Quote Request: Marine Plywood".into(),
            message: "Please quote 20 sheets.".into(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_field() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let mut invalid = dto();
        invalid.message = "  ".into();

        match create_in(&conn, invalid).await {
            Err(QuoteRequestError::Validation(msg)) => assert_eq!(msg, "Message is required"),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(repository::Entity::find().all(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_stores_trimmed_record() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_tables(&conn).await.unwrap();

        let id = create_in(&conn, dto()).await.unwrap();
        let stored = repository::get_by_id_from(&conn, id).await.unwrap().unwrap();

        assert_eq!(stored.name, "Ana Cruz");
        assert_eq!(stored.phone, None);
    }
}
