use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::storage::{get_local_storage, set_local_storage};

// color theme management
//
// the single persisted preference: localStorage key "theme", values "light"
// and "dark".  the stylesheet keys off a data-theme attribute on the document
// element, so applying a theme is one attribute write.

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // value written to the document element's data-theme attribute
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    // the toggle button shows the theme you would switch to
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

// read once at startup; missing or unreadable just means light
pub fn load() -> Theme {
    get_local_storage(THEME_KEY).unwrap_or(Theme::Light)
}

// persist the choice and flip the attribute the stylesheet keys off of.
// a page without a document element is skipped, not an error.
pub fn apply(theme: Theme) {
    set_local_storage(THEME_KEY, theme);

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("no document element to apply the theme to");
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", theme.as_attr()) {
        warn!("failed to set the theme attribute: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn persisted_encoding_matches_the_documented_values() {
        // gloo-storage writes serde_json encodings, so the stored strings are
        // the documented "light"/"dark" pair
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");

        let back: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, Theme::Dark);
    }

    #[test]
    fn attribute_values_match_the_encoding() {
        assert_eq!(Theme::Light.as_attr(), "light");
        assert_eq!(Theme::Dark.as_attr(), "dark");
    }
}
