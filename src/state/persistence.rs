use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::Task;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub input_value: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("could not read saved tasks")]
    File,
    #[error("saved tasks are not valid JSON")]
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("could not write saved tasks")]
    Write,
    #[error("could not encode tasks")]
    Format,
}

impl SavedState {
    pub fn path() -> PathBuf {
        let mut path =
            if let Some(project_dirs) = directories::ProjectDirs::from("rs", "Iced", "Todos") {
                project_dirs.data_dir().into()
            } else {
                std::env::current_dir().unwrap_or_default()
            };

        path.push("todos.json");
        path
    }

    pub async fn load() -> Result<SavedState, LoadError> {
        Self::load_from(&Self::path()).await
    }

    pub async fn load_from(path: &Path) -> Result<SavedState, LoadError> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
            tracing::info!(path = %path.display(), %error, "no saved tasks");
            LoadError::File
        })?;

        let state: SavedState = serde_json::from_str(&contents).map_err(|error| {
            tracing::warn!(path = %path.display(), %error, "malformed saved tasks");
            LoadError::Format
        })?;

        tracing::info!(tasks = state.tasks.len(), "tasks loaded");
        Ok(state)
    }

    /// Writes the state, then holds for two seconds so saves are throttled.
    pub async fn save(self) -> Result<(), SaveError> {
        self.save_to(&Self::path()).await?;

        tokio::time::sleep(std::time::Duration::from_secs(2)).await;

        Ok(())
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(self).map_err(|error| {
            tracing::warn!(%error, "failed to encode tasks");
            SaveError::Format
        })?;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(|error| {
                tracing::warn!(dir = %dir.display(), %error, "failed to create data dir");
                SaveError::Write
            })?;
        }

        tokio::fs::write(path, json.as_bytes())
            .await
            .map_err(|error| {
                tracing::warn!(path = %path.display(), %error, "failed to write tasks");
                SaveError::Write
            })?;

        tracing::debug!(tasks = self.tasks.len(), "tasks saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::config::Workflow;
    use crate::task::{TaskMarker, TaskPriority};

    #[tokio::test]
    async fn saved_tasks_load_back_with_markers_and_priorities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        let tasks = vec![
            Task::parse("NOW [#A] ship it", Workflow::Now).unwrap(),
            Task::parse("read mail", Workflow::Todo).unwrap(),
        ];
        let state = SavedState {
            input_value: "draft".to_owned(),
            tasks,
        };

        state.save_to(&path).await.unwrap();
        let loaded = SavedState::load_from(&path).await.unwrap();

        assert_eq!(loaded.input_value, "draft");
        let summary: Vec<_> = loaded
            .tasks
            .iter()
            .map(|task| (task.description(), task.marker(), task.priority()))
            .collect();
        assert_eq!(
            summary,
            [
                ("ship it", TaskMarker::Now, TaskPriority::High),
                ("read mail", TaskMarker::Todo, TaskPriority::None),
            ]
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SavedState::load_from(&dir.path().join("todos.json")).await;
        assert_eq!(result.err(), Some(LoadError::File));
    }

    #[tokio::test]
    async fn garbage_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let result = SavedState::load_from(&path).await;
        assert_eq!(result.err(), Some(LoadError::Format));
    }
}
