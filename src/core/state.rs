//! Application settings
//!
//! Persisted to `<data dir>/Album Planner/app_settings.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of entries kept in the recent projects list
pub const MAX_RECENT_PROJECTS: usize = 10;

/// Application-wide settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Folder the last album was exported to
    #[serde(default)]
    pub last_output_dir: Option<PathBuf>,
    /// Folder the last project file was saved to or opened from
    #[serde(default)]
    pub last_project_dir: Option<PathBuf>,
    /// Recently used project files, most recent first
    #[serde(default)]
    pub recent_projects: Vec<PathBuf>,
}

impl AppSettings {
    const SETTINGS_FILE: &'static str = "app_settings.json";

    /// Get the app data directory (`<data dir>/Album Planner/`)
    pub fn app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        Ok(data_dir.join("Album Planner"))
    }

    /// Load app settings from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::app_data_dir().and_then(|dir| Self::try_load(&dir)) {
            Ok(settings) => {
                log::debug!("Loaded app settings from disk");
                settings
            }
            Err(e) => {
                log::debug!("Using default app settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from `dir`, falling back to defaults
    pub fn load_from(dir: &Path) -> Self {
        Self::try_load(dir).unwrap_or_else(|e| {
            log::debug!("Using default app settings: {}", e);
            Self::default()
        })
    }

    fn try_load(dir: &Path) -> Result<Self, String> {
        let settings_path = dir.join(Self::SETTINGS_FILE);

        if !settings_path.exists() {
            return Err("Settings file not found".to_string());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| format!("Failed to read settings: {}", e))?;

        let mut settings: Self = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings: {}", e))?;

        // Forget projects that have been moved or deleted
        settings.recent_projects.retain(|p| p.exists());

        Ok(settings)
    }

    /// Save app settings to the app data directory
    pub fn save(&self) -> Result<(), String> {
        let app_dir = Self::app_data_dir()?;
        self.save_to(&app_dir)
    }

    /// Save app settings into `dir`, creating it if needed
    pub fn save_to(&self, dir: &Path) -> Result<(), String> {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }
        let settings_path = dir.join(Self::SETTINGS_FILE);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&settings_path, json)
            .map_err(|e| format!("Failed to write settings: {}", e))?;

        log::debug!("Saved app settings to {:?}", settings_path);
        Ok(())
    }

    /// Put `path` at the front of the recent projects list
    pub fn add_recent_project(&mut self, path: &Path) {
        self.recent_projects.retain(|p| p != path);
        self.recent_projects.insert(0, path.to_path_buf());
        self.recent_projects.truncate(MAX_RECENT_PROJECTS);

        if let Some(parent) = path.parent() {
            self.last_project_dir = Some(parent.to_path_buf());
        }
    }

    pub fn remove_recent_project(&mut self, path: &Path) {
        self.recent_projects.retain(|p| p != path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_dir_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = AppSettings::load_from(&temp_dir.path().join("nope"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("Album Planner");
        let project = temp_dir.path().join("demo.albumplan");
        std::fs::write(&project, "{}").unwrap();

        let mut settings = AppSettings {
            last_output_dir: Some(PathBuf::from("/exports")),
            ..Default::default()
        };
        settings.add_recent_project(&project);
        settings.save_to(&dir).unwrap();

        let loaded = AppSettings::load_from(&dir);
        assert_eq!(loaded.last_output_dir, Some(PathBuf::from("/exports")));
        assert_eq!(loaded.recent_projects, vec![project]);
        assert_eq!(loaded.last_project_dir, Some(temp_dir.path().to_path_buf()));
    }

    #[test]
    fn test_load_drops_missing_recent_projects() {
        let temp_dir = TempDir::new().unwrap();
        let settings = AppSettings {
            recent_projects: vec![temp_dir.path().join("gone.albumplan")],
            ..Default::default()
        };
        settings.save_to(temp_dir.path()).unwrap();

        let loaded = AppSettings::load_from(temp_dir.path());
        assert!(loaded.recent_projects.is_empty());
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("app_settings.json"), "not json").unwrap();
        assert_eq!(AppSettings::load_from(temp_dir.path()), AppSettings::default());
    }

    #[test]
    fn test_recent_projects_deduplicated_and_capped() {
        let mut settings = AppSettings::default();
        for i in 0..12 {
            settings.add_recent_project(Path::new(&format!("/p/{}.albumplan", i)));
        }
        settings.add_recent_project(Path::new("/p/5.albumplan"));

        assert_eq!(settings.recent_projects.len(), MAX_RECENT_PROJECTS);
        assert_eq!(settings.recent_projects[0], PathBuf::from("/p/5.albumplan"));
        assert_eq!(
            settings
                .recent_projects
                .iter()
                .filter(|p| p.ends_with("5.albumplan"))
                .count(),
            1
        );

        settings.remove_recent_project(Path::new("/p/5.albumplan"));
        assert_eq!(settings.recent_projects[0], PathBuf::from("/p/11.albumplan"));
    }
}
