use serde::{Deserialize, Serialize};

/// Displayed for the `C`/`POSIX` locale and when nothing is configured.
pub const INVARIANT: &str = "(Invariant)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleInfo {
    pub region: String,
    pub culture: String,
    pub ui_culture: String,
}

impl LocaleInfo {
    pub fn new() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the locale categories with POSIX precedence: `LC_ALL`, then
    /// the category variable, then `LANG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |category: &str| {
            ["LC_ALL", category, "LANG"]
                .iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.is_empty())
                .and_then(|value| parse_posix_locale(&value))
        };

        let culture = resolve("LC_CTYPE");
        let ui_culture = resolve("LC_MESSAGES");
        let region = culture
            .as_ref()
            .and_then(|tag| tag.split_once('-'))
            .map(|(_, territory)| territory.to_string());

        LocaleInfo {
            region: region.unwrap_or_else(|| INVARIANT.to_string()),
            culture: culture.unwrap_or_else(|| INVARIANT.to_string()),
            ui_culture: ui_culture.unwrap_or_else(|| INVARIANT.to_string()),
        }
    }
}

impl Default for LocaleInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns `language[_territory][.codeset][@modifier]` into a `language-TERRITORY`
/// tag. Returns `None` for `C` and `POSIX`.
pub fn parse_posix_locale(value: &str) -> Option<String> {
    let name = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }

    Some(match name.split_once('_') {
        Some((language, territory)) => format!(
            "{}-{}",
            language.to_ascii_lowercase(),
            territory.to_ascii_uppercase()
        ),
        None => name.to_ascii_lowercase(),
    })
}
