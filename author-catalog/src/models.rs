//! Data models for the author catalog

use serde::{Deserialize, Serialize};

/// One author as displayed in the catalog list
///
/// `name` is stored as `"Family, Given"` so that ordering on the full string
/// yields family-name ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct AuthorRecord {
    /// Display name, `"Family, Given"`
    pub name: String,

    /// Free-form lifespan text, e.g. `"1990 - 2020"`
    pub lifespan: String,
}

impl AuthorRecord {
    /// Create a new author record
    pub fn new(name: impl Into<String>, lifespan: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lifespan: lifespan.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_name_and_lifespan_only() {
        let author = AuthorRecord::new("Doe, John", "1990 - 2020");
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Doe, John", "lifespan": "1990 - 2020" })
        );
    }

    #[test]
    fn test_deserializes_seed_entry() {
        let author: AuthorRecord =
            serde_json::from_str(r#"{"name":"Smith, Jane","lifespan":"1985 - 2015"}"#).unwrap();
        assert_eq!(author.name, "Smith, Jane");
        assert_eq!(author.lifespan, "1985 - 2015");
    }
}
