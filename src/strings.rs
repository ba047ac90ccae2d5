//! User-facing labels, resolvable by key through the host's localization.

pub const KEY_TITLE: &str = "symbol_picker_title";
pub const KEY_CANCEL: &str = "cancel";
pub const KEY_DONE: &str = "done";
pub const KEY_SEARCH_PLACEHOLDER: &str = "search_placeholder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerStrings {
    pub title: String,
    pub cancel: String,
    pub done: String,
    pub search_placeholder: String,
}

impl Default for PickerStrings {
    fn default() -> Self {
        Self {
            title: "Symbols".to_owned(),
            cancel: "Cancel".to_owned(),
            done: "Done".to_owned(),
            search_placeholder: "Search".to_owned(),
        }
    }
}

impl PickerStrings {
    /// Resolves each label by key through the host's localization mechanism,
    /// falling back to the built-in English label for unknown keys.
    pub fn localized(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            title: lookup(KEY_TITLE).unwrap_or(defaults.title),
            cancel: lookup(KEY_CANCEL).unwrap_or(defaults.cancel),
            done: lookup(KEY_DONE).unwrap_or(defaults.done),
            search_placeholder: lookup(KEY_SEARCH_PLACEHOLDER).unwrap_or(defaults.search_placeholder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_pulls_known_keys_and_keeps_defaults_for_the_rest() {
        let strings = PickerStrings::localized(|key| match key {
            KEY_TITLE => Some("Symbole".to_owned()),
            KEY_CANCEL => Some("Abbrechen".to_owned()),
            _ => None,
        });
        assert_eq!(strings.title, "Symbole");
        assert_eq!(strings.cancel, "Abbrechen");
        assert_eq!(strings.done, "Done");
        assert_eq!(strings.search_placeholder, "Search");
    }
}
