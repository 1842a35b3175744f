use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::serde_ext::{lenient_i32, null_as_default};
use crate::storage::Record;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewInput {
    pub author_name: Option<String>,
    pub content: Option<String>,
    pub rating: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    #[serde(default = "anonymous", deserialize_with = "author_or_anonymous")]
    pub author_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub rating: i32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

fn anonymous() -> String { ANONYMOUS.to_string() }

fn author_or_anonymous<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).unwrap_or_else(anonymous))
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub author_name: String,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl Record for Review {
    type Draft = NewReview;
    type Filter = ();
    const FILE_NAME: &'static str = "reviews.json";
    const ENTITY: &'static str = "review";

    fn id(&self) -> i32 { self.id }

    fn from_draft(id: i32, d: NewReview) -> Self {
        Self { id, author_name: d.author_name, content: d.content, rating: d.rating, created_at: d.created_at }
    }

    fn matches(&self, _filter: &()) -> bool { true }

    /// Newest first.
    fn order(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_records_read_with_defaults() -> Result<(), serde_json::Error> {
        let r: Review = serde_json::from_str(
            r#"{"id": 4, "author_name": null, "content": "bom", "created_at": "2024-05-01T10:00:00Z"}"#,
        )?;
        assert_eq!(r.rating, 0);
        assert_eq!(r.author_name, ANONYMOUS);

        let r: Review = serde_json::from_str(r#"{"id": 5, "content": "ok", "rating": "4"}"#)?;
        assert_eq!(r.rating, 4);
        assert_eq!(r.author_name, ANONYMOUS);
        Ok(())
    }
}
