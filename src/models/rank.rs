use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Text reported in place of a position when the target URL is absent from
/// the examined results.
pub const NOT_FOUND_MESSAGE: &str = "İlk 100 mobil sonuç içinde bulunamadı";

/// Body of a rank check. Missing fields are read as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub url: String,
}

/// One non-paid entry of a search results page, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganicResult {
    pub position: u32,
    pub title: String,
    pub link: String,
}

/// 1-based position of the target in the results, or the not-found sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Position(u32),
    NotFound,
}

impl Rank {
    pub fn position(&self) -> Option<u32> {
        match self {
            Rank::Position(position) => Some(*position),
            Rank::NotFound => None,
        }
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rank::Position(position) => serializer.serialize_u32(*position),
            Rank::NotFound => serializer.serialize_str(NOT_FOUND_MESSAGE),
        }
    }
}

/// Outcome of a single lookup, before it is shaped for the wire.
#[derive(Debug, Clone)]
pub struct RankLookup {
    pub rank: Rank,
    pub found_url: String,
    pub normalized_target_url: String,
    pub timestamp: DateTime<Utc>,
    pub top_results: Vec<OrganicResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub rank: Rank,
    pub found_url: String,
    pub searched_url: String,
    pub timestamp: DateTime<Utc>,
    pub top_results: Vec<OrganicResult>,
}

impl From<RankLookup> for RankResponse {
    fn from(lookup: RankLookup) -> Self {
        Self {
            rank: lookup.rank,
            found_url: lookup.found_url,
            searched_url: lookup.normalized_target_url,
            timestamp: lookup.timestamp,
            top_results: lookup.top_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rank_serializes_as_number_or_sentinel() {
        assert_eq!(serde_json::to_value(Rank::Position(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(Rank::NotFound).unwrap(),
            json!(NOT_FOUND_MESSAGE)
        );
    }

    #[test]
    fn request_fields_default_to_empty() {
        let req: RankRequest = serde_json::from_str(r#"{"keyword":"rust"}"#).unwrap();
        assert_eq!(req.keyword, "rust");
        assert_eq!(req.url, "");
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let response = RankResponse::from(RankLookup {
            rank: Rank::Position(2),
            found_url: "https://example.com/".to_string(),
            normalized_target_url: "example.com".to_string(),
            timestamp: Utc::now(),
            top_results: vec![],
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["rank"], json!(2));
        assert_eq!(value["foundUrl"], json!("https://example.com/"));
        assert_eq!(value["searchedUrl"], json!("example.com"));
        assert!(value["timestamp"].is_string());
        assert!(value["topResults"].is_array());
    }
}
