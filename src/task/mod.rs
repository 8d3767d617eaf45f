mod marker;
pub mod view;

use iced::Element;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::Workflow;
pub use marker::{FilterToken, TaskMarker, TaskPriority};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    description: String,
    marker: TaskMarker,
    #[serde(default)]
    priority: TaskPriority,

    #[serde(skip)]
    state: TaskState,
}

#[derive(Debug, Clone, Default)]
pub enum TaskState {
    #[default]
    Idle,
    Editing,
}

#[derive(Debug, Clone)]
pub enum TaskMessage {
    Completed(bool),
    Edit,
    DescriptionEdited(String),
    FinishEdition,
    CyclePriority,
    Delete,
}

impl Task {
    pub fn new(description: String, marker: TaskMarker, priority: TaskPriority) -> Self {
        Task {
            id: Uuid::new_v4(),
            description,
            marker,
            priority,
            state: TaskState::Idle,
        }
    }

    /// Builds a task from input such as `TODO [#A] water the plants`.
    ///
    /// The leading marker and inline priority are optional; a missing marker
    /// falls back to the workflow's initial marker. Returns `None` when no
    /// description is left.
    pub fn parse(input: &str, workflow: Workflow) -> Option<Self> {
        let mut rest = input.trim();
        let mut marker = workflow.initial_marker();
        let mut priority = TaskPriority::None;

        let (head, tail) = split_token(rest);
        if let Some(parsed) = TaskMarker::from_token(head) {
            marker = parsed;
            rest = tail;
        }

        let (head, tail) = split_token(rest);
        if let Some(parsed) = TaskPriority::from_inline(head) {
            priority = parsed;
            rest = tail;
        }

        if rest.is_empty() {
            None
        } else {
            Some(Task::new(rest.to_owned(), marker, priority))
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn completed(&self) -> bool {
        self.marker == TaskMarker::Done
    }

    pub fn marker(&self) -> TaskMarker {
        self.marker
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn text_input_id(i: usize) -> iced::widget::Id {
        iced::widget::Id::from(format!("task-{i}"))
    }

    pub fn update(&mut self, message: TaskMessage, workflow: Workflow) {
        match message {
            TaskMessage::Completed(true) => {
                self.marker = TaskMarker::Done;
            }
            TaskMessage::Completed(false) => {
                self.marker = workflow.initial_marker();
            }
            TaskMessage::Edit => {
                self.state = TaskState::Editing;
            }
            TaskMessage::DescriptionEdited(new_description) => {
                self.description = new_description;
            }
            TaskMessage::FinishEdition => {
                if !self.description.is_empty() {
                    self.state = TaskState::Idle;
                }
            }
            TaskMessage::CyclePriority => {
                self.priority = self.priority.next();
            }
            TaskMessage::Delete => {}
        }
    }

    pub fn view(&self, index: usize) -> Element<'_, TaskMessage> {
        view::task_view(self, index)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }
}

fn split_token(input: &str) -> (&str, &str) {
    input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(head, tail)| (head, tail.trim_start()))
}
