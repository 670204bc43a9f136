//! Content package domain models.
//!
//! A package is a named, colored, iconable grouping of prompts. Three
//! built-in packages ship with the app and are immutable; user-created
//! packages are fully mutable and may be gated behind a password.
//!
//! Passwords are stored and compared in cleartext. This is a casual
//! parental-style content gate for a local single-user app, not a security
//! boundary. Anything stricter must substitute a salted-hash comparison
//! behind the same unlock contract.

use serde::{Deserialize, Serialize};

/// A named grouping of prompts, optionally password-gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPackage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    /// Built-in packages can never be deleted, edited, or
    /// password-protected.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_password_protected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_unlocked: bool,
    /// Epoch milliseconds of the most recent unlock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<i64>,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl ContentPackage {
    /// Creates a new user package with no protection.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
            is_default: false,
            is_password_protected: false,
            password: None,
            is_unlocked: false,
            unlocked_at: None,
        }
    }

    /// A protected package counts as locked until explicitly unlocked.
    pub fn is_locked(&self) -> bool {
        self.is_password_protected && !self.is_unlocked
    }

    /// Reverts the package to the locked state.
    pub fn relock(&mut self) {
        self.is_unlocked = false;
        self.unlocked_at = None;
    }

    /// Strips password protection and any unlock state.
    pub fn clear_protection(&mut self) {
        self.is_password_protected = false;
        self.password = None;
        self.relock();
    }
}

/// Partial-field update for a user-created package. Password and lock state
/// have dedicated operations and are not patchable here.
#[derive(Debug, Clone, Default)]
pub struct PackagePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl ContentPackage {
    /// Applies a partial update, leaving `None` fields untouched.
    pub fn apply(&mut self, patch: PackagePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}
