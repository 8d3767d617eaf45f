pub mod cell;
pub mod config;
pub mod filter;
pub mod persistence;
pub mod theme;

use crate::i18n::Language;
use crate::task::{Task, TaskMarker, TaskPriority};
pub use cell::{Atom, StateCell};
pub use config::{Preferences, Workflow};
pub use filter::FilterOption;

#[derive(Debug)]
pub struct State {
    pub input_value: String,
    pub tasks: Vec<Task>,
    pub preferences: Preferences,
    pub marker_filter: Atom<FilterOption<TaskMarker>>,
    pub priority_filter: Atom<FilterOption<TaskPriority>>,
    pub dirty: bool,
    pub saving: bool,
    pub input_hovered: bool,
    pub language: Language,
}

impl Default for State {
    fn default() -> Self {
        State {
            input_value: String::new(),
            tasks: Vec::new(),
            preferences: Preferences::default(),
            marker_filter: Atom::with_default("marker-filter"),
            priority_filter: Atom::with_default("priority-filter"),
            dirty: false,
            saving: false,
            input_hovered: false,
            language: Language::default(),
        }
    }
}

impl State {
    /// Tasks admitted by both filters, with their index in `tasks`.
    pub fn visible_tasks(&self) -> impl Iterator<Item = (usize, &Task)> {
        let marker = self.marker_filter.get();
        let priority = self.priority_filter.get();

        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| marker.admits(task.marker()) && priority.admits(task.priority()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(inputs: &[&str]) -> State {
        State {
            tasks: inputs
                .iter()
                .filter_map(|input| Task::parse(input, Workflow::Todo))
                .collect(),
            ..State::default()
        }
    }

    fn visible(state: &State) -> Vec<&str> {
        state.visible_tasks().map(|(_, task)| task.description()).collect()
    }

    #[test]
    fn default_filters_show_every_task() {
        let state = state_with(&["TODO a", "DOING [#A] b", "DONE c"]);
        assert_eq!(visible(&state), ["a", "b", "c"]);
    }

    #[test]
    fn both_filters_must_admit_a_task() {
        let mut state = state_with(&["TODO [#A] a", "DOING [#A] b", "TODO [#B] c"]);
        state.marker_filter.set(FilterOption::of(TaskMarker::Todo));
        state.priority_filter.set(FilterOption::of(TaskPriority::High));

        assert_eq!(visible(&state), ["a"]);
    }

    #[test]
    fn visible_tasks_keep_their_indices() {
        let mut state = state_with(&["TODO a", "DOING b", "TODO c"]);
        state.marker_filter.set(FilterOption::of(TaskMarker::Todo));

        let indices: Vec<_> = state.visible_tasks().map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 2]);
    }
}
