//! Widget configuration
//!
//! [`AutocompleteConfig`] carries the caller's capabilities (lookup, label
//! extraction, selection callback). [`WidgetSettings`] holds the presentation
//! strings and can be loaded from a JSON file.

use crate::error::{Result, TypeaheadError};
use crate::lookup::FilterOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Quiet period after the last keystroke before a lookup is started
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

/// Derives the display label of an option. Must be stable for a given option.
pub type GetOptionLabel<T> = Box<dyn Fn(&T) -> String>;

/// Notified once per successful selection
pub type OnSelect<T> = Box<dyn FnMut(&T)>;

/// What the option list holds after the user picks an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterSelect {
    /// Drop all options; reopening shows the empty placeholder
    #[default]
    Clear,
    /// Keep the chosen option as the only entry
    KeepSelected,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Label shown above the input
    pub label: String,
    /// Shown in the input while it is empty
    pub placeholder: String,
    /// Placeholder row when there is nothing to list
    pub no_options_text: String,
    /// Placeholder row while the first results load
    pub loading_text: String,
    /// Message shown when a lookup fails
    pub error_text: String,
    pub after_select: AfterSelect,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            label: "Search".to_string(),
            placeholder: String::new(),
            no_options_text: "No options found".to_string(),
            loading_text: "Loading...".to_string(),
            error_text: "Something went wrong while searching. Please try again.".to_string(),
            after_select: AfterSelect::Clear,
        }
    }
}

impl WidgetSettings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TypeaheadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&raw).map_err(|source| TypeaheadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded widget settings");
        Ok(settings)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_after_select(mut self, after_select: AfterSelect) -> Self {
        self.after_select = after_select;
        self
    }
}

/// Everything a controller needs from its caller
pub struct AutocompleteConfig<T> {
    pub filter_options: FilterOptions<T>,
    pub get_option_label: GetOptionLabel<T>,
    pub on_select: Option<OnSelect<T>>,
    pub settings: WidgetSettings,
}

impl<T> AutocompleteConfig<T> {
    pub fn new<L>(filter_options: FilterOptions<T>, get_option_label: L) -> Self
    where
        L: Fn(&T) -> String + 'static,
    {
        Self {
            filter_options,
            get_option_label: Box::new(get_option_label),
            on_select: None,
            settings: WidgetSettings::default(),
        }
    }

    pub fn on_select<F>(mut self, on_select: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn with_settings(mut self, settings: WidgetSettings) -> Self {
        self.settings = settings;
        self
    }
}
