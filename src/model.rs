use serde::{Deserialize, Serialize};

/// One winner observation pulled from a tagged block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: Option<String>,
    pub team: String,
    pub winner: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub team: String,
    pub winner: String,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_without_date_serializes_null() {
        let e = Event {
            date: None,
            team: "ZC".into(),
            winner: "Christy".into(),
            file: "daily.md".into(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert!(json["date"].is_null());
        assert_eq!(json["team"], "ZC");
    }

    #[test]
    fn meta_uses_camel_case_key() {
        let m = Meta { last_updated: "2024-03-01T09:00:00+01:00".into() };
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"lastUpdated":"2024-03-01T09:00:00+01:00"}"#);
    }
}
