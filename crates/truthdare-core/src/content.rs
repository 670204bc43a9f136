//! Prompt domain models.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::catalog;

/// The two prompt categories a player can draw.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Truth,
    Dare,
}

/// A single truth or dare prompt, tagged with a difficulty level and an
/// owning package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameContent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub text: String,
    pub level: i32,
    /// Owning package. Records persisted before packages existed carry no
    /// `packageId`; they belong to the default package, normalized here at
    /// deserialization so read paths never repeat the fallback.
    #[serde(default = "default_package_id")]
    pub package_id: String,
}

fn default_package_id() -> String {
    catalog::DEFAULT_PACKAGE_ID.to_string()
}

impl GameContent {
    /// Applies a partial update, leaving `None` fields untouched.
    pub fn apply(&mut self, patch: ContentPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(package_id) = patch.package_id {
            self.package_id = package_id;
        }
    }
}

/// Partial-field update for a prompt.
#[derive(Debug, Clone, Default)]
pub struct ContentPatch {
    pub kind: Option<ContentKind>,
    pub text: Option<String>,
    pub level: Option<i32>,
    pub package_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentKind::Truth).unwrap(),
            "\"truth\""
        );
        assert_eq!(
            serde_json::to_string(&ContentKind::Dare).unwrap(),
            "\"dare\""
        );
    }

    #[test]
    fn test_legacy_record_without_package_id_gets_default() {
        let json = r#"{"id":"7","type":"dare","text":"Do 10 jumping jacks","level":1}"#;
        let row: GameContent = serde_json::from_str(json).unwrap();
        assert_eq!(row.package_id, catalog::DEFAULT_PACKAGE_ID);
    }

    #[test]
    fn test_round_trips_with_camel_case_keys() {
        let row = GameContent {
            id: "42".to_string(),
            kind: ContentKind::Truth,
            text: "What is your biggest fear?".to_string(),
            level: 2,
            package_id: "beach".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"packageId\":\"beach\""));
        assert!(json.contains("\"type\":\"truth\""));
        assert_eq!(serde_json::from_str::<GameContent>(&json).unwrap(), row);
    }

    #[test]
    fn test_apply_merges_only_set_fields() {
        let mut row = GameContent {
            id: "1".to_string(),
            kind: ContentKind::Truth,
            text: "old".to_string(),
            level: 1,
            package_id: "default".to_string(),
        };
        row.apply(ContentPatch {
            text: Some("new".to_string()),
            level: Some(3),
            ..Default::default()
        });
        assert_eq!(row.text, "new");
        assert_eq!(row.level, 3);
        assert_eq!(row.kind, ContentKind::Truth);
        assert_eq!(row.package_id, "default");
    }
}
