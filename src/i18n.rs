use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DesktopLanguageRequester,
};
use i18n_embed_fl::fl;
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    if let Err(error) = i18n_embed::select(&loader, &Localizations, &requested_languages) {
        tracing::warn!(%error, "failed to select desktop language");
    }
    loader
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Korean,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Korean => Language::English,
            Language::English => Language::Korean,
        }
    }

    fn identifier(self) -> &'static str {
        match self {
            Language::Korean => "ko-KR",
            Language::English => "en-US",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        let requested_languages = DesktopLanguageRequester::requested_languages();
        if requested_languages
            .iter()
            .any(|lang| lang.language.as_str() == "ko")
        {
            Language::Korean
        } else {
            Language::English
        }
    }
}

pub fn translate(key: &str, language: Language) -> String {
    if key == "language-toggle" {
        return match language {
            Language::Korean => "En".to_owned(),
            Language::English => "Ko".to_owned(),
        };
    }

    match key {
        "app-title" => fl!(LANGUAGE_LOADER, "app-title"),
        "loading" => fl!(LANGUAGE_LOADER, "loading"),
        "add-task-placeholder" => fl!(LANGUAGE_LOADER, "add-task-placeholder"),
        "describe-task-placeholder" => fl!(LANGUAGE_LOADER, "describe-task-placeholder"),
        "filter-marker" => fl!(LANGUAGE_LOADER, "filter-marker"),
        "filter-priority" => fl!(LANGUAGE_LOADER, "filter-priority"),
        "empty-no-tasks" => fl!(LANGUAGE_LOADER, "empty-no-tasks"),
        "empty-no-matching" => fl!(LANGUAGE_LOADER, "empty-no-matching"),
        "workflow-now" => fl!(LANGUAGE_LOADER, "workflow-now"),
        "workflow-todo" => fl!(LANGUAGE_LOADER, "workflow-todo"),
        "theme-light" => fl!(LANGUAGE_LOADER, "theme-light"),
        "theme-dark" => fl!(LANGUAGE_LOADER, "theme-dark"),
        _ => key.to_owned(),
    }
}

pub fn translate_tasks_left(count: usize) -> String {
    fl!(LANGUAGE_LOADER, "tasks-left", count = count)
}

pub fn update_language(language: Language) {
    let lang_id = match language.identifier().parse::<LanguageIdentifier>() {
        Ok(lang_id) => lang_id,
        Err(error) => {
            tracing::warn!(%error, "invalid language identifier");
            return;
        }
    };

    if let Err(error) = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &[lang_id]) {
        tracing::warn!(%error, "failed to switch language");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(translate("language-toggle", Language::English), "Ko");
        assert_eq!(translate("language-toggle", Language::Korean), "En");
    }

    #[test]
    fn unknown_keys_fall_through() {
        assert_eq!(translate("no-such-key", Language::English), "no-such-key");
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }
}
