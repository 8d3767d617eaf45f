use iced::widget::{text, Text};
use iced::Center;

pub fn icon(unicode: char) -> Text<'static> {
    text(unicode.to_string())
        .width(20)
        .align_x(Center)
        .shaping(text::Shaping::Advanced)
}

pub fn edit_icon() -> Text<'static> {
    icon('\u{270E}')
}

pub fn delete_icon() -> Text<'static> {
    icon('\u{2715}')
}

/// Circle with a slash, used to clear filters.
pub fn reset_icon() -> Text<'static> {
    icon('\u{2298}').size(14)
}

pub fn plus_icon() -> Text<'static> {
    text("+").size(20).style(|theme: &iced::Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    })
}
