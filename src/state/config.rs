//! User preferences that shape the task list.
//!
//! Preferences live in `settings.json` under the platform config directory.
//! `TODOS_PREFERRED_WORKFLOW` overrides the stored workflow for the running
//! process only; it is never written back.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::TaskMarker;

pub const WORKFLOW_ENV: &str = "TODOS_PREFERRED_WORKFLOW";

/// Which marker vocabulary is active.
///
/// `"now"` selects [`Workflow::Now`]; every other value selects
/// [`Workflow::Todo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Workflow {
    #[default]
    Now,
    Todo,
}

impl Workflow {
    pub fn parse(value: &str) -> Self {
        if value == "now" {
            Workflow::Now
        } else {
            Workflow::Todo
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Workflow::Now => "now",
            Workflow::Todo => "todo",
        }
    }

    /// The pair of open markers this workflow moves tasks through.
    pub fn markers(self) -> [TaskMarker; 2] {
        match self {
            Workflow::Now => [TaskMarker::Now, TaskMarker::Later],
            Workflow::Todo => [TaskMarker::Todo, TaskMarker::Doing],
        }
    }

    /// Marker given to new and reopened tasks.
    pub fn initial_marker(self) -> TaskMarker {
        match self {
            Workflow::Now => TaskMarker::Later,
            Workflow::Todo => TaskMarker::Todo,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Workflow::Now => Workflow::Todo,
            Workflow::Todo => Workflow::Now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("could not read settings file")]
    Read,
    #[error("settings file is not valid JSON")]
    Format,
    #[error("could not write settings file")]
    Write,
}

/// Contents of `settings.json`.
///
/// The workflow is kept as written so values this build does not know
/// survive a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfigs {
    pub preferred_workflow: String,
    pub theme_mode: ThemeMode,
}

impl Default for UserConfigs {
    fn default() -> Self {
        UserConfigs {
            preferred_workflow: Workflow::default().as_str().to_owned(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserConfigs {
    pub fn path() -> PathBuf {
        let mut path =
            if let Some(project_dirs) = directories::ProjectDirs::from("rs", "Iced", "Todos") {
                project_dirs.config_dir().into()
            } else {
                std::env::current_dir().unwrap_or_default()
            };

        path.push("settings.json");
        path
    }

    pub fn workflow(&self) -> Workflow {
        Workflow::parse(&self.preferred_workflow)
    }

    pub async fn load() -> Result<UserConfigs, ConfigError> {
        Self::load_from(&Self::path()).await
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub async fn load_from(path: &Path) -> Result<UserConfigs, ConfigError> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(UserConfigs::default());
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read settings");
                return Err(ConfigError::Read);
            }
        };

        serde_json::from_str(&contents).map_err(|error| {
            tracing::warn!(path = %path.display(), %error, "malformed settings");
            ConfigError::Format
        })
    }

    pub async fn save(self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()).await
    }

    pub async fn save_to(self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(&self).map_err(|error| {
            tracing::warn!(%error, "failed to encode settings");
            ConfigError::Format
        })?;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(|error| {
                tracing::warn!(dir = %dir.display(), %error, "failed to create config dir");
                ConfigError::Write
            })?;
        }

        tokio::fs::write(path, json.as_bytes())
            .await
            .map_err(|error| {
                tracing::warn!(path = %path.display(), %error, "failed to write settings");
                ConfigError::Write
            })?;

        tracing::info!(path = %path.display(), "settings saved");
        Ok(())
    }
}

/// Stored settings plus the per-process workflow override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    stored: UserConfigs,
    workflow_override: Option<Workflow>,
    persist: bool,
}

impl Preferences {
    /// Combines the outcome of loading `settings.json` with the override.
    ///
    /// An unreadable file falls back to defaults and is never overwritten,
    /// but the override still applies.
    pub fn resolve(stored: Result<UserConfigs, ConfigError>, env: Option<String>) -> Self {
        let (stored, persist) = match stored {
            Ok(stored) => (stored, true),
            Err(error) => {
                tracing::warn!(%error, "using default settings, file left untouched");
                (UserConfigs::default(), false)
            }
        };

        Preferences {
            stored,
            workflow_override: env.as_deref().map(Workflow::parse),
            persist,
        }
    }

    pub fn workflow(&self) -> Workflow {
        self.workflow_override
            .unwrap_or_else(|| self.stored.workflow())
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.stored.theme_mode
    }

    /// An explicit choice replaces the override and is stored.
    pub fn set_workflow(&mut self, workflow: Workflow) {
        self.workflow_override = None;
        self.stored.preferred_workflow = workflow.as_str().to_owned();
    }

    pub fn set_theme_mode(&mut self, theme_mode: ThemeMode) {
        self.stored.theme_mode = theme_mode;
    }

    /// Settings to write back, or `None` when the file must be left alone.
    pub fn to_save(&self) -> Option<UserConfigs> {
        self.persist.then(|| self.stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("now", Workflow::Now)]
    #[case("todo", Workflow::Todo)]
    #[case("todo-mode", Workflow::Todo)]
    #[case("NOW", Workflow::Todo)]
    #[case("", Workflow::Todo)]
    fn any_value_other_than_now_is_todo(#[case] raw: &str, #[case] expected: Workflow) {
        assert_eq!(Workflow::parse(raw), expected);
    }

    #[test]
    fn workflow_markers() {
        assert_eq!(Workflow::Now.markers(), [TaskMarker::Now, TaskMarker::Later]);
        assert_eq!(Workflow::Todo.markers(), [TaskMarker::Todo, TaskMarker::Doing]);
    }

    #[test]
    fn unknown_workflow_reads_as_todo() {
        let configs: UserConfigs =
            serde_json::from_str(r#"{"preferred_workflow":"kanban"}"#).unwrap();
        assert_eq!(configs.workflow(), Workflow::Todo);
        assert_eq!(configs.theme_mode, ThemeMode::Light);
    }

    fn stored(workflow: &str) -> UserConfigs {
        UserConfigs {
            preferred_workflow: workflow.to_owned(),
            theme_mode: ThemeMode::Dark,
        }
    }

    #[rstest]
    #[case(None, Workflow::Todo)]
    #[case(Some("now"), Workflow::Now)]
    #[case(Some("anything"), Workflow::Todo)]
    fn env_override_replaces_stored_workflow(
        #[case] env: Option<&str>,
        #[case] expected: Workflow,
    ) {
        let preferences = Preferences::resolve(Ok(stored("todo")), env.map(str::to_owned));
        assert_eq!(preferences.workflow(), expected);
        assert_eq!(preferences.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn env_override_is_not_saved() {
        let preferences = Preferences::resolve(Ok(stored("todo")), Some("now".to_owned()));

        assert_eq!(preferences.workflow(), Workflow::Now);
        assert_eq!(preferences.to_save(), Some(stored("todo")));
    }

    #[test]
    fn explicit_workflow_choice_clears_override() {
        let mut preferences = Preferences::resolve(Ok(stored("now")), Some("now".to_owned()));

        preferences.set_workflow(Workflow::Todo);

        assert_eq!(preferences.workflow(), Workflow::Todo);
        assert_eq!(
            preferences.to_save().map(|configs| configs.preferred_workflow),
            Some("todo".to_owned())
        );
    }

    #[test]
    fn unknown_workflow_survives_theme_change() {
        let mut preferences = Preferences::resolve(Ok(stored("kanban")), None);

        preferences.set_theme_mode(ThemeMode::Light);

        let saved = preferences.to_save().unwrap();
        assert_eq!(saved.preferred_workflow, "kanban");
        assert_eq!(saved.theme_mode, ThemeMode::Light);
    }

    #[tokio::test]
    async fn env_override_applies_when_settings_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = UserConfigs::load_from(&path).await;
        assert_eq!(loaded, Err(ConfigError::Format));

        let mut preferences = Preferences::resolve(loaded, Some("todo".to_owned()));
        assert_eq!(preferences.workflow(), Workflow::Todo);

        preferences.set_theme_mode(ThemeMode::Dark);
        assert_eq!(preferences.to_save(), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let configs = UserConfigs::load_from(&dir.path().join("settings.json"))
            .await
            .unwrap();
        assert_eq!(configs, UserConfigs::default());
        assert_eq!(configs.workflow(), Workflow::Now);
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let configs = stored("kanban");

        configs.clone().save_to(&path).await.unwrap();

        assert_eq!(UserConfigs::load_from(&path).await.unwrap(), configs);
    }
}
