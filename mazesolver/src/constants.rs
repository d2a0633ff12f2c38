use std::path::PathBuf;

use dirs::preference_dir;

pub const APP_DIR: &str = "mazesolver";

pub fn base_path() -> Option<PathBuf> {
    preference_dir().map(|dir| dir.join(APP_DIR))
}
