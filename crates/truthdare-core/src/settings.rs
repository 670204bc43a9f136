//! Game settings domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// A difficulty tier shown on the level selector.
///
/// The three built-in levels are editable in place (name and color) but the
/// list itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLevel {
    pub id: i32,
    pub name: String,
    pub color: String,
}

/// Singleton settings record, created with defaults on first run and fully
/// overwritten on save.
///
/// `selected_level` is advisory for the UI's default selection; the content
/// query takes an explicit level argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub levels: Vec<GameLevel>,
    pub selected_level: i32,
    pub auto_advance_player: bool,
    /// Must never become empty; the store repairs any mutation that would
    /// empty it.
    pub selected_packages: Vec<String>,
    /// Mirror of per-package unlock timestamps (epoch milliseconds).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unlocked_packages: HashMap<String, i64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            levels: catalog::default_levels(),
            selected_level: 1,
            auto_advance_player: true,
            selected_packages: vec![catalog::DEFAULT_PACKAGE_ID.to_string()],
            unlocked_packages: HashMap::new(),
        }
    }
}
