//! Theme Flag
//!
//! Dark/light flag persisted in local storage under `theme`.

use crate::error::PageError;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Toggle button label: names the theme a click switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light",
            Theme::Light => "🌙 Dark",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// Saved theme, or dark when nothing (valid) is stored
pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) -> Result<(), PageError> {
    let storage = local_storage().ok_or(PageError::Missing("localStorage"))?;
    storage.set_item(THEME_STORAGE_KEY, theme.as_str())?;
    Ok(())
}

/// Set `data-theme` on the document root and relabel `#theme-toggle`
pub fn apply_theme(theme: Theme) -> Result<(), PageError> {
    let document = crate::dom::document()?;
    if let Some(root) = document.document_element() {
        root.set_attribute("data-theme", theme.as_str())?;
    }
    if let Some(toggle) = document.get_element_by_id("theme-toggle") {
        toggle.set_text_content(Some(theme.toggle_label()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    }
}
