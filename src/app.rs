use iced::keyboard::{self, key};
use iced::widget::{self, center_x, column, keyed_column, mouse_area, operation, scrollable, text_input};
use iced::{event, window, Element, Event, Fill, Function, Subscription, Task as Command, Theme};

use crate::i18n::{translate, Language};
use crate::state::config::{ConfigError, Preferences, ThemeMode, UserConfigs, WORKFLOW_ENV};
use crate::state::filter::any_active;
use crate::state::persistence::{LoadError, SaveError, SavedState};
use crate::state::theme::ThemeStyle;
use crate::state::{State, StateCell, Workflow};
use crate::task::{Task, TaskMessage};
use crate::ui::task_filter::{FilterMessage, TaskFilter};
use crate::ui::{controls::view_controls, styles::subtle};

#[derive(Debug)]
pub enum Todos {
    Loading,
    Loaded {
        state: State,
        task_filter: TaskFilter,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<SavedState, LoadError>, Result<UserConfigs, ConfigError>),
    Saved(Result<(), SaveError>),
    ConfigsSaved(Result<(), ConfigError>),
    InputChanged(String),
    InputHovered,
    InputUnhovered,
    CreateTask,
    Filter(FilterMessage),
    TaskMessage(usize, TaskMessage),
    TabPressed { shift: bool },
    ToggleFullscreen(window::Mode),
    LanguageChanged(Language),
    WorkflowChanged(Workflow),
    ThemeModeChanged(ThemeMode),
}

fn new_task_input_id() -> widget::Id {
    widget::Id::new("new-task")
}

fn save_preferences(preferences: &Preferences) -> Command<Message> {
    match preferences.to_save() {
        Some(configs) => Command::perform(configs.save(), Message::ConfigsSaved),
        None => {
            tracing::warn!("settings file was unreadable at startup, not overwriting it");
            Command::none()
        }
    }
}

async fn load() -> (Result<SavedState, LoadError>, Result<UserConfigs, ConfigError>) {
    (SavedState::load().await, UserConfigs::load().await)
}

impl Todos {
    pub fn new() -> (Self, Command<Message>) {
        tracing::info!(
            data = %SavedState::path().display(),
            settings = %UserConfigs::path().display(),
            "starting"
        );

        (
            Self::Loading,
            Command::perform(load(), |(saved, configs)| Message::Loaded(saved, configs)),
        )
    }

    pub fn title(&self) -> String {
        let (dirty, language) = match self {
            Todos::Loading => (false, Language::default()),
            Todos::Loaded { state, .. } => (state.dirty, state.language),
        };

        format!(
            "{}{}",
            translate("app-title", language),
            if dirty { "..." } else { "" }
        )
    }

    pub fn theme(&self) -> Theme {
        match self {
            Todos::Loading => ThemeMode::default().theme(),
            Todos::Loaded { state, .. } => state.preferences.theme_mode().theme(),
        }
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match self {
            Todos::Loading => {
                if let Message::Loaded(saved_state, configs) = message {
                    let preferences = Preferences::resolve(configs, std::env::var(WORKFLOW_ENV).ok());
                    let workflow = preferences.workflow();
                    let saved_state = saved_state.unwrap_or_default();

                    *self = Todos::Loaded {
                        state: State {
                            input_value: saved_state.input_value,
                            tasks: saved_state.tasks,
                            preferences,
                            ..State::default()
                        },
                        task_filter: TaskFilter::new(workflow),
                    };
                }

                operation::focus(new_task_input_id())
            }
            Todos::Loaded { state, task_filter } => {
                let mut tasks_changed = true;

                let command = match message {
                    Message::InputChanged(value) => {
                        state.input_value = value;
                        Command::none()
                    }
                    Message::InputHovered => {
                        state.input_hovered = true;
                        tasks_changed = false;
                        Command::none()
                    }
                    Message::InputUnhovered => {
                        state.input_hovered = false;
                        tasks_changed = false;
                        Command::none()
                    }
                    Message::CreateTask => {
                        if let Some(task) =
                            Task::parse(&state.input_value, state.preferences.workflow())
                        {
                            state.tasks.push(task);
                            state.input_value.clear();
                        }
                        Command::none()
                    }
                    Message::Filter(filter_message) => {
                        TaskFilter::update(
                            filter_message,
                            &mut state.marker_filter,
                            &mut state.priority_filter,
                        );
                        tasks_changed = false;
                        Command::none()
                    }
                    Message::TaskMessage(i, TaskMessage::Delete) => {
                        if i < state.tasks.len() {
                            state.tasks.remove(i);
                        }
                        Command::none()
                    }
                    Message::TaskMessage(i, task_message) => {
                        let workflow = state.preferences.workflow();

                        if let Some(task) = state.tasks.get_mut(i) {
                            let should_focus = matches!(task_message, TaskMessage::Edit);

                            task.update(task_message, workflow);

                            if should_focus {
                                let id = Task::text_input_id(i);
                                Command::batch(vec![
                                    operation::focus(id.clone()),
                                    operation::select_all(id),
                                ])
                            } else {
                                Command::none()
                            }
                        } else {
                            Command::none()
                        }
                    }
                    Message::Saved(result) => {
                        if let Err(error) = result {
                            tracing::warn!(%error, "tasks not saved");
                        }
                        state.saving = false;
                        tasks_changed = false;
                        Command::none()
                    }
                    Message::ConfigsSaved(result) => {
                        if let Err(error) = result {
                            tracing::warn!(%error, "settings not saved");
                        }
                        tasks_changed = false;
                        Command::none()
                    }
                    Message::TabPressed { shift } => {
                        tasks_changed = false;
                        if shift {
                            operation::focus_previous()
                        } else {
                            operation::focus_next()
                        }
                    }
                    Message::ToggleFullscreen(mode) => {
                        tasks_changed = false;
                        window::latest()
                            .and_then(move |window| window::set_mode(window, mode))
                    }
                    Message::LanguageChanged(language) => {
                        state.language = language;
                        crate::i18n::update_language(language);
                        tasks_changed = false;
                        Command::none()
                    }
                    Message::WorkflowChanged(workflow) => {
                        state.preferences.set_workflow(workflow);
                        task_filter.sync_workflow(workflow);
                        tasks_changed = false;
                        save_preferences(&state.preferences)
                    }
                    Message::ThemeModeChanged(theme_mode) => {
                        state.preferences.set_theme_mode(theme_mode);
                        tasks_changed = false;
                        save_preferences(&state.preferences)
                    }
                    Message::Loaded(..) => {
                        tasks_changed = false;
                        Command::none()
                    }
                };

                if tasks_changed {
                    state.dirty = true;
                }

                let save = if state.dirty && !state.saving {
                    state.dirty = false;
                    state.saving = true;

                    Command::perform(
                        SavedState {
                            input_value: state.input_value.clone(),
                            tasks: state.tasks.clone(),
                        }
                        .save(),
                        Message::Saved,
                    )
                } else {
                    Command::none()
                };

                Command::batch(vec![command, save])
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self {
            Todos::Loading => self.loading_view(),
            Todos::Loaded { state, task_filter } => self.loaded_view(state, task_filter),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| {
            let Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key),
                modifiers,
                ..
            }) = event
            else {
                return None;
            };

            match (key, modifiers) {
                (key::Named::Tab, _) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                (key::Named::ArrowUp, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Fullscreen))
                }
                (key::Named::ArrowDown, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Windowed))
                }
                _ => None,
            }
        })
    }

    fn loading_view(&self) -> Element<'_, Message> {
        iced::widget::center(
            iced::widget::text(translate("loading", Language::default()))
                .width(Fill)
                .align_x(iced::Center)
                .size(50),
        )
        .into()
    }

    fn loaded_view<'a>(&'a self, state: &'a State, task_filter: &'a TaskFilter) -> Element<'a, Message> {
        let input = self.create_input(&state.input_value, state.language);
        let input_container = self.create_input_container(input, state.input_hovered);
        let controls = view_controls(&state.tasks, &state.preferences, state.language);
        let tasks_view = self.create_tasks_view(state);
        let filter_bar = task_filter
            .view(
                state.marker_filter.get(),
                state.priority_filter.get(),
                ThemeStyle::from_theme(&self.theme()),
                state.language,
            )
            .map(Message::Filter);

        let footer_input = mouse_area(input_container)
            .on_enter(Message::InputHovered)
            .on_exit(Message::InputUnhovered);

        let content = column![controls, column![tasks_view, filter_bar], footer_input]
            .spacing(20)
            .height(Fill);

        center_x(content)
            .padding(iced::Padding {
                top: 24.0,
                left: 16.0,
                bottom: 32.0,
                right: 16.0,
            })
            .into()
    }

    fn create_input(&self, input_value: &str, language: Language) -> Element<'_, Message> {
        text_input(&translate("add-task-placeholder", language), input_value)
            .id(new_task_input_id())
            .on_input(Message::InputChanged)
            .on_submit(Message::CreateTask)
            .padding(iced::Padding {
                top: 8.0,
                left: 0.0,
                bottom: 8.0,
                right: 0.0,
            })
            .size(16)
            .style(|theme: &Theme, status| {
                let default_style = text_input::default(theme, status);

                text_input::Style {
                    background: iced::Color::TRANSPARENT.into(),
                    border: iced::Border {
                        color: iced::Color::TRANSPARENT,
                        width: 0.0,
                        radius: 0.0.into(),
                    },
                    ..default_style
                }
            })
            .width(Fill)
            .into()
    }

    fn create_input_container<'a>(&self, input: Element<'a, Message>, is_hovered: bool) -> Element<'a, Message> {
        use crate::ui::icons::plus_icon;
        use iced::widget::{container, row};

        let input_row = row![plus_icon(), input].spacing(8).align_y(iced::Center);

        container(input_row)
            .padding(iced::Padding {
                top: 8.0,
                left: 16.0,
                bottom: 8.0,
                right: 4.0,
            })
            .style(move |theme: &Theme| {
                let background_color = if is_hovered {
                    theme.extended_palette().background.strong.color
                } else {
                    theme.extended_palette().background.weak.color
                };

                container::Style {
                    background: Some(background_color.into()),
                    border: iced::Border {
                        color: background_color,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    ..Default::default()
                }
            })
            .width(Fill)
            .into()
    }

    fn create_tasks_view<'a>(&'a self, state: &'a State) -> Element<'a, Message> {
        if state.visible_tasks().next().is_some() {
            let tasks_column = keyed_column(state.visible_tasks().map(|(i, task)| {
                (
                    task.id(),
                    task.view(i).map(Message::TaskMessage.with(i)),
                )
            }))
            .spacing(10);

            scrollable(tasks_column).height(Fill).into()
        } else {
            let key = if any_active(state.marker_filter.get(), state.priority_filter.get()) {
                "empty-no-matching"
            } else {
                "empty-no-tasks"
            };
            self.empty_message(key, state.language)
        }
    }

    fn empty_message<'a>(&'a self, key: &str, language: Language) -> Element<'a, Message> {
        iced::widget::center(
            iced::widget::text(translate(key, language))
                .width(Fill)
                .size(25)
                .align_x(iced::Center)
                .style(subtle),
        )
        .height(Fill)
        .into()
    }
}
