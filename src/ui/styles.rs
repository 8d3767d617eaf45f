use iced::overlay::menu;
use iced::widget::{button, container, pick_list, text};
use iced::{Border, Color, Theme};

use crate::state::theme::{SelectPalette, ThemeStyle};
use crate::task::TaskPriority;

pub fn subtle(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strongest.color),
    }
}

pub fn marker_badge(theme: &Theme) -> container::Style {
    let pair = theme.extended_palette().secondary.weak;

    container::Style {
        background: Some(pair.color.into()),
        text_color: Some(pair.text),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn priority_badge(theme: &Theme, status: button::Status, priority: TaskPriority) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match priority {
        TaskPriority::High => palette.danger.weak,
        TaskPriority::Medium => palette.primary.weak,
        TaskPriority::Low => palette.success.weak,
        TaskPriority::None => palette.background.strong,
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => pair.color.scale_alpha(0.8),
        button::Status::Active | button::Status::Disabled => pair.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: pair.text,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Filter bar container: tinted with the secondary background.
pub fn filter_bar(style: ThemeStyle) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(style.secondary_background_color.into()),
        text_color: Some(theme.extended_palette().background.base.text),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Borderless, transparent select control.
pub fn select(
    palette: SelectPalette,
) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    move |theme, status| {
        let text_color = match status {
            pick_list::Status::Active => theme.extended_palette().background.base.text,
            pick_list::Status::Hovered | pick_list::Status::Opened { .. } => palette.primary,
        };

        pick_list::Style {
            text_color,
            handle_color: Color::TRANSPARENT,
            background: Color::TRANSPARENT.into(),
            border: Border::default(),
            ..pick_list::default(theme, status)
        }
    }
}

pub fn select_menu(palette: SelectPalette) -> impl Fn(&Theme) -> menu::Style {
    move |theme| menu::Style {
        background: palette.neutral0.into(),
        border: Border {
            color: palette.primary25,
            width: 1.0,
            radius: 4.0.into(),
        },
        text_color: theme.extended_palette().background.base.text,
        selected_text_color: palette.primary,
        selected_background: palette.primary25.into(),
        ..menu::default(theme)
    }
}

pub fn reset_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.base.text,
        button::Status::Active | button::Status::Disabled => palette.background.strongest.color,
    };

    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
