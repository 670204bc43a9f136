//! Platform path resolution for persisted game data.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for the game's on-disk data.
///
/// # Directory Structure
///
/// ```text
/// {platform data dir}/truthdare/
/// ├── truth_or_dare_players.json
/// ├── truth_or_dare_content.json
/// ├── truth_or_dare_packages.json
/// └── truth_or_dare_settings.json
/// ```
pub struct GamePaths;

impl GamePaths {
    /// Directory name under the platform data directory.
    pub const APP_DIR: &'static str = "truthdare";

    /// Returns the game data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.local/share/truthdare/` on Linux
    /// - `Err(PathError::HomeDirNotFound)`: could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }
}
