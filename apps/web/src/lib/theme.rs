//! Dark/light theme preference, persisted under the `theme` storage key and
//! applied as the `dark` class on the document root.

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Reads the persisted preference; defaults to light when absent or unreadable.
#[cfg(target_arch = "wasm32")]
pub fn load() -> ThemePreference {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| ThemePreference::parse(&value))
        .unwrap_or_default()
}

/// Persists the preference and applies it to the document root.
#[cfg(target_arch = "wasm32")]
pub fn store_and_apply(preference: ThemePreference) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, preference.as_str());
    }
    apply(preference);
}

/// Applies the preference by toggling the `dark` class on `<html>`.
#[cfg(target_arch = "wasm32")]
pub fn apply(preference: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let result = match preference {
        ThemePreference::Dark => class_list.add_1("dark"),
        ThemePreference::Light => class_list.remove_1("dark"),
    };
    if result.is_err() {
        log::warn!("failed to apply theme preference");
    }
}

#[cfg(test)]
mod tests {
    use super::ThemePreference;

    #[test]
    fn parse_round_trips_known_values() {
        assert_eq!(
            ThemePreference::parse("dark"),
            Some(ThemePreference::Dark)
        );
        assert_eq!(
            ThemePreference::parse("light"),
            Some(ThemePreference::Light)
        );
        assert_eq!(ThemePreference::parse("solarized"), None);
    }

    #[test]
    fn toggled_flips_the_preference() {
        assert_eq!(
            ThemePreference::Light.toggled(),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::Dark.toggled().as_str(),
            "light"
        );
    }
}
