use std::borrow::Cow;
use std::fmt;

use crate::state::config::Workflow;
use crate::task::{FilterToken, TaskMarker, TaskPriority};

/// A selectable filter choice.
///
/// `value == None` is the "no filter" choice, see [`FilterOption::all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption<T> {
    pub label: Cow<'static, str>,
    pub value: Option<T>,
}

impl<T: FilterToken> FilterOption<T> {
    pub const fn all() -> Self {
        FilterOption {
            label: Cow::Borrowed("ALL"),
            value: None,
        }
    }

    pub fn of(value: T) -> Self {
        FilterOption {
            label: Cow::Borrowed(value.token()),
            value: Some(value),
        }
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    pub fn admits(&self, candidate: T) -> bool {
        self.value.is_none_or(|value| value == candidate)
    }
}

impl<T: FilterToken> Default for FilterOption<T> {
    fn default() -> Self {
        FilterOption::all()
    }
}

impl<T> fmt::Display for FilterOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn with_default<T: FilterToken>(values: impl IntoIterator<Item = T>) -> Vec<FilterOption<T>> {
    std::iter::once(FilterOption::all())
        .chain(values.into_iter().map(FilterOption::of))
        .collect()
}

pub fn marker_options(workflow: Workflow) -> Vec<FilterOption<TaskMarker>> {
    with_default(workflow.markers())
}

pub fn priority_options() -> Vec<FilterOption<TaskPriority>> {
    with_default(TaskPriority::ALL)
}

/// Whether either filter narrows the list, i.e. whether reset has anything to do.
pub fn any_active(
    marker: &FilterOption<TaskMarker>,
    priority: &FilterOption<TaskPriority>,
) -> bool {
    marker.is_active() || priority.is_active()
}
