use super::Settings;
use super::error::{SettingsError, SettingsResult};
use directories::ProjectDirs;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub fn default_path() -> SettingsResult<PathBuf> {
    ProjectDirs::from("dev", "armover", "armover")
        .map(|dirs| dirs.config_dir().join("settings.yaml"))
        .ok_or(SettingsError::MissingConfigDir)
}

/// An explicit path must exist; the default one may be absent.
pub fn load(path: Option<&Path>) -> SettingsResult<Settings> {
    match path {
        Some(path) => read(path.to_path_buf(), true),
        None => read(default_path()?, false),
    }
}

fn read(path: PathBuf, required: bool) -> SettingsResult<Settings> {
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => String::new(),
        Err(source) => return Err(SettingsError::Read { path, source }),
    };

    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&contents).map_err(|source| SettingsError::Deserialize { path, source })
}
