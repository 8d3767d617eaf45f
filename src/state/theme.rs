use iced::{Color, Theme};

/// Colour tokens the filter bar reads from the active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub section_title_color: Color,
    pub secondary_background_color: Color,
    pub primary_background_color: Color,
}

impl ThemeStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        let palette = theme.extended_palette();

        ThemeStyle {
            section_title_color: palette.primary.strong.color,
            secondary_background_color: palette.background.weak.color,
            primary_background_color: palette.background.base.color,
        }
    }
}

/// Themed values for the style slots the select widgets consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectPalette {
    /// Accent for the hovered control and the selected menu entry.
    pub primary: Color,
    /// Background of the hovered menu entry.
    pub primary25: Color,
    /// Menu background.
    pub neutral0: Color,
}

impl From<&ThemeStyle> for SelectPalette {
    fn from(style: &ThemeStyle) -> Self {
        SelectPalette {
            primary: style.section_title_color,
            primary25: style.secondary_background_color,
            neutral0: style.primary_background_color,
        }
    }
}
