use std::{fmt, str::FromStr};

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::error::SiteError;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn color_scheme(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Highlight colour for decorative elements.
    pub fn accent(self) -> &'static str {
        match self {
            Theme::Dark => "#c084fc",
            Theme::Light => "#eab308",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color_scheme())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Where the theme preference lives and where it gets applied.
///
/// Persistence is best effort: a backend that can't store anything
/// should just report `None` from [`ThemeBackend::persisted`].
pub trait ThemeBackend {
    fn persisted(&self) -> Option<Theme>;
    fn persist(&self, theme: Theme);
    fn prefers_dark(&self) -> bool;
    fn apply(&self, theme: Theme);
}

/// Reads the raw stored value. Only an empty value counts as unset; anything
/// other than `"dark"` means light.
pub fn from_stored(raw: &str) -> Option<Theme> {
    match raw {
        "" => None,
        raw => Some(raw.parse().unwrap_or(Theme::Light)),
    }
}

/// A stored preference always wins over the system one.
pub fn resolve(persisted: Option<Theme>, prefers_dark: bool) -> Theme {
    persisted.unwrap_or(Theme::from_dark(prefers_dark))
}

pub struct ThemeController<B> {
    backend: B,
    current: Theme,
}

impl<B: ThemeBackend> ThemeController<B> {
    pub fn mount(backend: B) -> Self {
        let current = resolve(backend.persisted(), backend.prefers_dark());
        backend.apply(current);
        log::debug!("theme mounted as {current}");
        Self { backend, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.backend.apply(self.current);
        self.backend.persist(self.current);
        self.current
    }
}

/// Local storage and `prefers-color-scheme`, with the result written onto `<html>`.
///
/// Must be created inside a reactive owner; only `apply` touches the DOM.
#[derive(Clone, Copy)]
pub struct BrowserTheme {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
    prefers_dark: Signal<bool>,
}

impl BrowserTheme {
    pub fn new() -> Self {
        let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
        Self {
            stored,
            set_stored,
            prefers_dark: use_preferred_dark(),
        }
    }

    fn apply_to_document(theme: Theme) -> Result<(), SiteError> {
        let root = document().document_element().ok_or(SiteError::NoDocument)?;
        root.class_list()
            .toggle_with_force("dark", theme.is_dark())
            .map_err(SiteError::dom)?;
        let root = root
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| SiteError::NoDocument)?;
        root.style()
            .set_property("color-scheme", theme.color_scheme())
            .map_err(SiteError::dom)
    }
}

impl Default for BrowserTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBackend for BrowserTheme {
    fn persisted(&self) -> Option<Theme> {
        self.stored.with_untracked(|raw| from_stored(raw))
    }

    /// The signal updates immediately; the storage write follows on the next
    /// effect flush, so `persisted()` agrees right after this call even
    /// before `localStorage` does.
    fn persist(&self, theme: Theme) {
        self.set_stored.set(theme.to_string());
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get_untracked()
    }

    fn apply(&self, theme: Theme) {
        if let Err(e) = Self::apply_to_document(theme) {
            log::warn!("{e}");
        }
    }
}
