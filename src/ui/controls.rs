use iced::widget::{button, row, text};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::i18n::{translate, translate_tasks_left, Language};
use crate::state::config::ThemeMode;
use crate::state::{Preferences, Workflow};
use crate::task::Task;

pub fn view_controls<'a>(
    tasks: &[Task],
    preferences: &Preferences,
    language: Language,
) -> Element<'a, Message> {
    let tasks_left = tasks.iter().filter(|task| !task.completed()).count();

    let toggle = |label: String, message: Message| {
        button(text(label).size(12))
            .on_press(message)
            .padding(iced::Padding {
                top: 5.0,
                left: 8.0,
                bottom: 5.0,
                right: 8.0,
            })
            .style(button::text)
    };

    let workflow = preferences.workflow();
    let theme_mode = preferences.theme_mode();

    let workflow_key = match workflow {
        Workflow::Now => "workflow-now",
        Workflow::Todo => "workflow-todo",
    };
    let theme_key = match theme_mode {
        ThemeMode::Light => "theme-light",
        ThemeMode::Dark => "theme-dark",
    };

    row![
        text(translate_tasks_left(tasks_left)).width(Fill),
        row![
            toggle(
                translate(workflow_key, language),
                Message::WorkflowChanged(workflow.toggled()),
            ),
            toggle(
                translate(theme_key, language),
                Message::ThemeModeChanged(theme_mode.toggled()),
            ),
            toggle(
                translate("language-toggle", language),
                Message::LanguageChanged(language.toggled()),
            ),
        ]
        .spacing(10)
        .align_y(Center)
    ]
    .spacing(20)
    .align_y(Center)
    .into()
}
