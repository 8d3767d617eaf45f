use std::fmt;

use serde::{Deserialize, Serialize};

/// Tokens that can be offered as filter choices.
pub trait FilterToken: Copy + Eq + fmt::Debug + 'static {
    fn token(self) -> &'static str;
}

/// Workflow stage of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskMarker {
    Todo,
    Doing,
    Done,
    Now,
    Later,
    Waiting,
    Canceled,
}

impl TaskMarker {
    pub const ALL: [TaskMarker; 7] = [
        TaskMarker::Todo,
        TaskMarker::Doing,
        TaskMarker::Done,
        TaskMarker::Now,
        TaskMarker::Later,
        TaskMarker::Waiting,
        TaskMarker::Canceled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskMarker::Todo => "TODO",
            TaskMarker::Doing => "DOING",
            TaskMarker::Done => "DONE",
            TaskMarker::Now => "NOW",
            TaskMarker::Later => "LATER",
            TaskMarker::Waiting => "WAITING",
            TaskMarker::Canceled => "CANCELED",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.as_str() == token)
    }
}

impl FilterToken for TaskMarker {
    fn token(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for TaskMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl TaskPriority {
    /// Every priority, in the order offered to the user.
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::High,
        TaskPriority::Medium,
        TaskPriority::Low,
        TaskPriority::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::High => "HIGH",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::Low => "LOW",
            TaskPriority::None => "NONE",
        }
    }

    /// Parses the inline `[#A]` / `[#B]` / `[#C]` priority syntax.
    pub fn from_inline(token: &str) -> Option<Self> {
        match token {
            "[#A]" => Some(TaskPriority::High),
            "[#B]" => Some(TaskPriority::Medium),
            "[#C]" => Some(TaskPriority::Low),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            TaskPriority::High => TaskPriority::Medium,
            TaskPriority::Medium => TaskPriority::Low,
            TaskPriority::Low => TaskPriority::None,
            TaskPriority::None => TaskPriority::High,
        }
    }
}

impl FilterToken for TaskPriority {
    fn token(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
