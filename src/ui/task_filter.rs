//! Marker and priority filter bar shown under the task list.
//!
//! The widget owns only its derived option lists. The selected filters live
//! in shared state and are passed in as [`StateCell`] handles, so the same
//! cells can be read by the task list and written from anywhere else.

use iced::widget::{button, container, pick_list, row, text, PickList};
use iced::{Center, Element, Fill};

use crate::i18n::{translate, Language};
use crate::state::filter::{any_active, marker_options, priority_options};
use crate::state::theme::{SelectPalette, ThemeStyle};
use crate::state::{FilterOption, StateCell, Workflow};
use crate::task::{TaskMarker, TaskPriority};
use crate::ui::icons::reset_icon;
use crate::ui::styles;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterMessage {
    MarkerSelected(FilterOption<TaskMarker>),
    PrioritySelected(FilterOption<TaskPriority>),
    Reset,
}

#[derive(Debug)]
pub struct TaskFilter {
    workflow: Workflow,
    marker_options: Vec<FilterOption<TaskMarker>>,
    priority_options: Vec<FilterOption<TaskPriority>>,
}

impl TaskFilter {
    pub fn new(workflow: Workflow) -> Self {
        TaskFilter {
            workflow,
            marker_options: marker_options(workflow),
            priority_options: priority_options(),
        }
    }

    /// Re-derives the marker options if the workflow changed.
    ///
    /// Returns whether the options were recomputed.
    pub fn sync_workflow(&mut self, workflow: Workflow) -> bool {
        if self.workflow == workflow {
            return false;
        }

        tracing::debug!(workflow = workflow.as_str(), "marker options re-derived");
        self.workflow = workflow;
        self.marker_options = marker_options(workflow);
        true
    }

    pub fn marker_options(&self) -> &[FilterOption<TaskMarker>] {
        &self.marker_options
    }

    pub fn priority_options(&self) -> &[FilterOption<TaskPriority>] {
        &self.priority_options
    }

    pub fn update(
        message: FilterMessage,
        marker: &mut impl StateCell<FilterOption<TaskMarker>>,
        priority: &mut impl StateCell<FilterOption<TaskPriority>>,
    ) {
        match message {
            FilterMessage::MarkerSelected(option) => marker.set(option),
            FilterMessage::PrioritySelected(option) => priority.set(option),
            FilterMessage::Reset => {
                marker.set(FilterOption::all());
                priority.set(FilterOption::all());
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        marker: &'a FilterOption<TaskMarker>,
        priority: &'a FilterOption<TaskPriority>,
        style: ThemeStyle,
        language: Language,
    ) -> Element<'a, FilterMessage> {
        let palette = SelectPalette::from(&style);

        let marker_select = pick_list(
            self.marker_options(),
            Some(marker),
            FilterMessage::MarkerSelected,
        );
        let priority_select = pick_list(
            self.priority_options(),
            Some(priority),
            FilterMessage::PrioritySelected,
        );

        let selects = row![
            labelled(translate("filter-marker", language), marker_select, palette),
            labelled(translate("filter-priority", language), priority_select, palette),
        ]
        .spacing(8)
        .align_y(Center);

        let reset: Option<Element<'a, FilterMessage>> = any_active(marker, priority).then(|| {
            button(reset_icon())
                .on_press(FilterMessage::Reset)
                .padding(2)
                .style(styles::reset_button)
                .into()
        });

        let mut bar = row![container(selects).width(Fill)].align_y(Center).width(Fill);
        if let Some(reset) = reset {
            bar = bar.push(reset);
        }

        container(bar)
            .padding([2, 8])
            .style(styles::filter_bar(style))
            .into()
    }
}

fn labelled<'a, T>(
    label: String,
    select: PickList<'a, FilterOption<T>, &'a [FilterOption<T>], &'a FilterOption<T>, FilterMessage>,
    palette: SelectPalette,
) -> Element<'a, FilterMessage>
where
    T: Clone + PartialEq + 'a,
{
    row![
        text(label).size(12),
        select
            .text_size(12)
            .padding([0, 4])
            .handle(pick_list::Handle::None)
            .style(styles::select(palette))
            .menu_style(styles::select_menu(palette)),
    ]
    .spacing(2)
    .align_y(Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Atom;

    /// Cell double that records every write.
    #[derive(Debug)]
    struct RecordingCell<T> {
        value: T,
        writes: Vec<T>,
    }

    impl<T: Clone> RecordingCell<T> {
        fn new(value: T) -> Self {
            RecordingCell {
                value,
                writes: Vec::new(),
            }
        }
    }

    impl<T: Clone> StateCell<T> for RecordingCell<T> {
        fn get(&self) -> &T {
            &self.value
        }

        fn set(&mut self, value: T) {
            self.writes.push(value.clone());
            self.value = value;
        }
    }

    fn cells() -> (
        Atom<FilterOption<TaskMarker>>,
        Atom<FilterOption<TaskPriority>>,
    ) {
        (Atom::with_default("marker"), Atom::with_default("priority"))
    }

    #[test]
    fn selecting_now_marker_activates_reset() {
        let filter = TaskFilter::new(Workflow::parse("now"));
        let (mut marker, mut priority) = cells();
        let now = filter
            .marker_options()
            .iter()
            .find(|option| option.value == Some(TaskMarker::Now))
            .cloned()
            .unwrap();

        TaskFilter::update(FilterMessage::MarkerSelected(now), &mut marker, &mut priority);

        assert_eq!(marker.get().label, "NOW");
        assert_eq!(marker.get().value, Some(TaskMarker::Now));
        assert!(any_active(marker.get(), priority.get()));
    }

    #[test]
    fn view_builds_with_borrowed_selections() {
        let filter = TaskFilter::new(Workflow::Now);
        let style = ThemeStyle::from_theme(&iced::Theme::Light);
        let all_markers = FilterOption::all();
        let now = FilterOption::of(TaskMarker::Now);
        let all_priorities = FilterOption::all();

        let without_reset = filter.view(&all_markers, &all_priorities, style, Language::English);
        let with_reset = filter.view(&now, &all_priorities, style, Language::English);

        drop((without_reset, with_reset));
    }

    #[test]
    fn reset_clears_both_filters() {
        let (mut marker, mut priority) = cells();
        TaskFilter::update(
            FilterMessage::MarkerSelected(FilterOption::of(TaskMarker::Now)),
            &mut marker,
            &mut priority,
        );
        TaskFilter::update(
            FilterMessage::PrioritySelected(FilterOption::of(TaskPriority::High)),
            &mut marker,
            &mut priority,
        );

        TaskFilter::update(FilterMessage::Reset, &mut marker, &mut priority);

        assert_eq!(*marker.get(), FilterOption::all());
        assert_eq!(*priority.get(), FilterOption::all());
        assert!(!any_active(marker.get(), priority.get()));
    }

    #[test]
    fn reset_on_default_state_is_a_no_op() {
        let (mut marker, mut priority) = cells();

        TaskFilter::update(FilterMessage::Reset, &mut marker, &mut priority);

        assert_eq!(*marker.get(), FilterOption::all());
        assert_eq!(*priority.get(), FilterOption::all());
    }

    #[test]
    fn selections_write_only_their_own_cell() {
        let mut marker = RecordingCell::new(FilterOption::all());
        let mut priority = RecordingCell::new(FilterOption::all());

        TaskFilter::update(
            FilterMessage::PrioritySelected(FilterOption::of(TaskPriority::Low)),
            &mut marker,
            &mut priority,
        );

        assert!(marker.writes.is_empty());
        assert_eq!(priority.writes, [FilterOption::of(TaskPriority::Low)]);
    }

    #[test]
    fn reset_writes_both_cells_once() {
        let mut marker = RecordingCell::new(FilterOption::of(TaskMarker::Todo));
        let mut priority = RecordingCell::new(FilterOption::all());

        TaskFilter::update(FilterMessage::Reset, &mut marker, &mut priority);

        assert_eq!(marker.writes, [FilterOption::all()]);
        assert_eq!(priority.writes, [FilterOption::all()]);
    }

    #[test]
    fn setter_accepts_options_as_given() {
        let mut marker = RecordingCell::new(FilterOption::all());
        let mut priority = RecordingCell::new(FilterOption::all());
        let custom = FilterOption {
            label: "Waiting on others".into(),
            value: Some(TaskMarker::Waiting),
        };

        TaskFilter::update(
            FilterMessage::MarkerSelected(custom.clone()),
            &mut marker,
            &mut priority,
        );

        assert_eq!(*marker.get(), custom);
    }

    #[test]
    fn marker_options_recompute_only_on_workflow_change() {
        let mut filter = TaskFilter::new(Workflow::Now);

        assert!(!filter.sync_workflow(Workflow::Now));
        assert!(filter.sync_workflow(Workflow::parse("todo-mode")));

        let values: Vec<_> = filter.marker_options().iter().map(|o| o.value).collect();
        assert_eq!(values, [None, Some(TaskMarker::Todo), Some(TaskMarker::Doing)]);
    }

    #[test]
    fn priority_options_are_stable_across_workflows() {
        let mut filter = TaskFilter::new(Workflow::Now);
        let before = filter.priority_options().to_vec();

        filter.sync_workflow(Workflow::Todo);

        assert_eq!(filter.priority_options(), before.as_slice());
        assert_eq!(before.len(), 5);
    }
}
