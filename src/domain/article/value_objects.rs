use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Raw identifier as handed in by a caller, before any validation.
///
/// Integers cover auto-increment style ids; text covers hashes, UUIDs and
/// other opaque keys. `Integer(1)` and `Text("1")` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleIdValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ArticleIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ArticleIdValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ArticleIdValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for ArticleIdValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ArticleIdValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Validated article identifier.
///
/// Text ids are never empty and integer ids are strictly positive; both
/// rules are checked once in [`ArticleId::new`] and hold for the lifetime of
/// the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ArticleIdValue", into = "ArticleIdValue")]
pub struct ArticleId(ArticleIdValue);

impl ArticleId {
    /// # Errors
    ///
    /// [`DomainError::EmptyIdentifier`] for an empty string and
    /// [`DomainError::NonPositiveIdentifier`] for an integer below 1.
    pub fn new(value: impl Into<ArticleIdValue>) -> DomainResult<Self> {
        let value = value.into();
        match &value {
            ArticleIdValue::Text(text) if text.is_empty() => Err(DomainError::EmptyIdentifier),
            ArticleIdValue::Integer(id) if *id <= 0 => {
                Err(DomainError::NonPositiveIdentifier(*id))
            }
            _ => Ok(Self(value)),
        }
    }

    #[must_use]
    pub const fn value(&self) -> &ArticleIdValue {
        &self.0
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match &self.0 {
            ArticleIdValue::Integer(value) => Some(*value),
            ArticleIdValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            ArticleIdValue::Text(value) => Some(value),
            ArticleIdValue::Integer(_) => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> ArticleIdValue {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<ArticleIdValue> for ArticleId {
    type Error = DomainError;

    fn try_from(value: ArticleIdValue) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for ArticleId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for ArticleId {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ArticleId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ArticleId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArticleId> for ArticleIdValue {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// How a repository mints identifiers for articles created without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Positive integers counting up from the largest id seen so far.
    #[default]
    Sequential,
    /// Random UUID v4 rendered as text.
    Uuid,
}

impl IdStrategy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "sequence" | "integer" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            other => Err(DomainError::Validation(format!(
                "unknown id strategy '{other}', expected 'sequential' or 'uuid'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA256_HEX: &str = "3a6eb0790f39ac87c94f3856b2dd2c5d110e6811602261a9a923d3bb23adc8b7";
    const SHA512_HEX: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                              47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    #[test]
    fn accepts_positive_integers() {
        for raw in [1, 2, 42, i64::MAX] {
            let id = ArticleId::new(raw).unwrap();
            assert_eq!(id.value(), &ArticleIdValue::Integer(raw));
            assert_eq!(id.as_integer(), Some(raw));
            assert!(id.as_text().is_none());
        }
    }

    #[test]
    fn accepts_non_empty_text() {
        let uuid = uuid::Uuid::new_v4().to_string();
        for raw in [SHA256_HEX, SHA512_HEX, uuid.as_str(), " ", "0", "-1"] {
            let id = ArticleId::new(raw).unwrap();
            assert_eq!(id.as_text(), Some(raw));
            assert_eq!(id.to_string(), raw);
        }
    }

    #[test]
    fn rejects_empty_text() {
        let err = ArticleId::new("").unwrap_err();
        assert_eq!(err, DomainError::EmptyIdentifier);
        assert_eq!(
            err.to_string(),
            r#"invalid value "" provided for ArticleId: the value cannot be empty"#
        );
    }

    #[test]
    fn rejects_zero() {
        let err = ArticleId::new(0).unwrap_err();
        assert_eq!(err, DomainError::NonPositiveIdentifier(0));
    }

    #[test]
    fn rejects_negative_integers() {
        let err = ArticleId::try_from(-1_i64).unwrap_err();
        assert_eq!(err, DomainError::NonPositiveIdentifier(-1));
        assert_eq!(
            err.to_string(),
            r#"invalid value "-1" provided for ArticleId: the value must be a positive integer"#
        );
        assert!(ArticleId::new(i64::MIN).is_err());
    }

    #[test]
    fn integer_and_text_ids_are_distinct() {
        let numeric = ArticleId::new(1).unwrap();
        let text = ArticleId::new("1").unwrap();
        assert_ne!(numeric, text);
        assert_eq!(numeric.to_string(), text.to_string());
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(ArticleId::new(7).unwrap(), ArticleId::new(7).unwrap());
        assert_eq!(
            ArticleId::new(String::from("abc")).unwrap(),
            ArticleId::try_from("abc").unwrap()
        );
    }

    #[test]
    fn id_strategy_parses_known_names() {
        assert_eq!("sequential".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
        assert_eq!(" UUID ".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
        assert_eq!(
            IdStrategy::Uuid.to_string().parse::<IdStrategy>().unwrap(),
            IdStrategy::Uuid
        );

        let err = "ulid".parse::<IdStrategy>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg.contains("'ulid'")));
    }

    #[test]
    fn deserialization_validates() {
        let id: ArticleId = serde_json::from_str("5").unwrap();
        assert_eq!(id.as_integer(), Some(5));
        let id: ArticleId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id.as_text(), Some("abc"));

        assert!(serde_json::from_str::<ArticleId>(r#""""#).is_err());
        assert!(serde_json::from_str::<ArticleId>("0").is_err());
        assert!(serde_json::from_str::<ArticleId>("-3").is_err());
    }

    #[test]
    fn serializes_as_bare_value() {
        let id = ArticleId::new(9).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
        let id = ArticleId::new("slug-like").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""slug-like""#);
    }
}
