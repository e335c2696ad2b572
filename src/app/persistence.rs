// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The only preference that changes at runtime is the language, via the
//! `--lang` flag: a valid override is written back to `settings.toml` so the
//! next launch keeps it without the flag.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the function directly rather than through disk round trips.
pub fn apply_language_change(i18n: &mut I18n, config: &mut Config, locale: LanguageIdentifier) {
    i18n.set_locale(locale.clone());
    config.language = Some(locale.to_string());

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

/// Persists a CLI locale override when it names an available locale that
/// differs from the configured one.
pub fn persist_cli_language(i18n: &mut I18n, config: &mut Config, cli_lang: Option<&str>) {
    let Some(lang) = cli_lang else {
        return;
    };
    let Ok(locale) = lang.parse::<LanguageIdentifier>() else {
        return;
    };

    if i18n.available_locales.contains(&locale)
        && config.language.as_deref() != Some(locale.to_string().as_str())
    {
        apply_language_change(i18n, config, locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_updates_config_language() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let mut config = Config::default();

        persist_cli_language(&mut i18n, &mut config, Some("fr"));

        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn unknown_locale_is_ignored() {
        let mut i18n = I18n::new(None, &Config::default());
        let mut config = Config::default();

        persist_cli_language(&mut i18n, &mut config, Some("xx-YY"));

        assert!(config.language.is_none());
    }

    #[test]
    fn matching_locale_is_not_rewritten() {
        let mut config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let mut i18n = I18n::new(None, &config);

        persist_cli_language(&mut i18n, &mut config, Some("fr"));

        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
