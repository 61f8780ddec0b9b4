use shared_types::ThemePreference;
use thiserror::Error;

pub const DEFAULT_THEME: ThemePreference = ThemePreference::Light;
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Single durable slot holding the theme preference.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn store(&self, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalThemeStorage {
    key: String,
}

impl LocalThemeStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn store(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

/// Icon and label of the toggle control. Both describe the theme the user
/// would switch *to*, not the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub icon_class: &'static str,
    pub label: &'static str,
}

pub fn toggle_affordance(active: ThemePreference) -> ToggleAffordance {
    match active {
        ThemePreference::Dark => ToggleAffordance {
            icon_class: "fas fa-sun",
            label: "Light Mode",
        },
        ThemePreference::Light => ToggleAffordance {
            icon_class: "fas fa-moon",
            label: "Dark Mode",
        },
    }
}

/// Current theme plus the slot it is persisted in.
#[derive(Debug, Clone)]
pub struct ThemeController<S: ThemeStorage> {
    current: ThemePreference,
    storage: S,
}

impl<S: ThemeStorage> ThemeController<S> {
    /// Missing, unreadable or unknown values fall back to the default theme.
    pub fn initialize(storage: S) -> Self {
        let current = match storage.load() {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                dioxus_logger::tracing::debug!("Unknown persisted theme {:?}, using default", value);
                DEFAULT_THEME
            }),
            Ok(None) => DEFAULT_THEME,
            Err(e) => {
                dioxus_logger::tracing::warn!("Theme preference unavailable, using default: {}", e);
                DEFAULT_THEME
            }
        };

        Self { current, storage }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip and persist. A failed write only costs persistence across restarts.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        if let Err(e) = self.storage.store(self.current.as_str()) {
            dioxus_logger::tracing::warn!("Failed to persist theme preference: {}", e);
        }
        self.current
    }
}

pub fn apply_theme_to_document(theme: ThemePreference) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

pub fn document_theme() -> Option<ThemePreference> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
        .and_then(|value| ThemePreference::parse(&value))
}

/// Ctrl+T / Cmd+T.
pub fn is_theme_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key == "t"
}
