use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier assigned by the store when a quote request is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteRequestId(pub Uuid);

impl QuoteRequestId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for QuoteRequestId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(QuoteRequestId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of `POST /api/quote_requests`.
///
/// `phone` and `company` are optional on the form and travel as `null`
/// when left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequestDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

impl QuoteRequestDto {
    /// Same required-field rules as the form's step gate
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        if self.subject.trim().is_empty() {
            return Err("Subject is required".into());
        }
        if self.message.trim().is_empty() {
            return Err("Message is required".into());
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Quote request as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: QuoteRequestId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
    /// Build a new record for insertion; the store owns id and timestamp
    pub fn new_for_insert(dto: QuoteRequestDto) -> Self {
        Self {
            id: QuoteRequestId::new_v4(),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: normalize_optional(dto.phone),
            company: normalize_optional(dto.company),
            subject: dto.subject.trim().to_string(),
            message: dto.message,
            created_at: Utc::now(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> QuoteRequestDto {
        QuoteRequestDto {
            name: "Jane".into(),
            email: "j@x.com".into(),
            phone: None,
            company: None,
            subject: "Bulk order".into(),
            message: "Need 40 sheets".into(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_dto() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        let mut d = dto();
        d.email = "   ".into();
        assert_eq!(d.validate(), Err("Email is required".to_string()));

        let mut d = dto();
        d.message = "\n\t".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_new_for_insert_normalizes_optionals() {
        let mut d = dto();
        d.phone = Some("  ".into());
        d.company = Some(" QJWC ".into());
        let record = QuoteRequest::new_for_insert(d);
        assert_eq!(record.phone, None);
        assert_eq!(record.company.as_deref(), Some("QJWC"));
    }

    #[test]
    fn test_id_round_trip_through_string() {
        let id = QuoteRequestId::new_v4();
        assert_eq!(QuoteRequestId::from_string(&id.as_string()), Ok(id));
        assert!(QuoteRequestId::from_string("nope").is_err());
    }

    #[test]
    fn test_dto_sends_empty_optionals_as_null() {
        let json = serde_json::to_value(dto()).unwrap();
        assert_eq!(json["phone"], serde_json::Value::Null);
        assert_eq!(json["subject"], "Bulk order");
    }
}
