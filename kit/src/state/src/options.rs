use leptos::prelude::*;
use serde::Deserialize;

use crate::error::ModalError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Host configuration. Fixed once the host is created.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ModalOptions {
    pub theme: Theme,
    pub default_padding: bool,
    pub bg_class: Option<String>,
    pub modal_class: Option<String>,
    pub close_class: Option<String>,
    /// Applied to the primary action of every dialog variant.
    pub action_class: Option<String>,
    #[serde(skip)]
    pub custom_close_icon: Option<ViewFn>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            default_padding: true,
            bg_class: None,
            modal_class: None,
            close_class: None,
            action_class: None,
            custom_close_icon: None,
        }
    }
}

impl ModalOptions {
    /// Parses options from JSON. Missing keys keep their defaults; the close
    /// icon can only be set through [`ModalOptions::with_close_icon`].
    pub fn from_json(json: &str) -> Result<Self, ModalError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_default_padding(mut self, default_padding: bool) -> Self {
        self.default_padding = default_padding;
        self
    }

    pub fn with_bg_class(mut self, class: impl Into<String>) -> Self {
        self.bg_class = Some(class.into());
        self
    }

    pub fn with_modal_class(mut self, class: impl Into<String>) -> Self {
        self.modal_class = Some(class.into());
        self
    }

    pub fn with_close_class(mut self, class: impl Into<String>) -> Self {
        self.close_class = Some(class.into());
        self
    }

    pub fn with_action_class(mut self, class: impl Into<String>) -> Self {
        self.action_class = Some(class.into());
        self
    }

    pub fn with_close_icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.custom_close_icon = Some(icon.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfirmOptions {
    pub confirm_text: Option<String>,
    pub close_text: Option<String>,
    pub modal_class: Option<String>,
    pub message_class: Option<String>,
    pub buttons_class: Option<String>,
    pub primary_btn_class: Option<String>,
    pub close_btn_class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InfoOptions {
    pub action_text: Option<String>,
    pub message_class: Option<String>,
    pub dismiss_class: Option<String>,
    pub modal_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_light_padded_host() {
        let options = ModalOptions::default();
        assert_eq!(options.theme, Theme::Light);
        assert!(options.default_padding);
        assert!(options.bg_class.is_none());
        assert!(options.custom_close_icon.is_none());
    }

    #[test]
    fn json_fills_missing_keys_with_defaults() {
        let options =
            ModalOptions::from_json(r#"{ "theme": "dark", "action_class": "btn" }"#).unwrap();
        assert!(options.theme.is_dark());
        assert!(options.default_padding);
        assert_eq!(options.action_class.as_deref(), Some("btn"));
        assert!(options.modal_class.is_none());
    }

    #[test]
    fn json_rejects_unknown_theme() {
        let err = ModalOptions::from_json(r#"{ "theme": "sepia" }"#)
            .err()
            .unwrap();
        assert!(matches!(err, ModalError::InvalidOptions(_)));
    }

    #[test]
    fn builder_sets_fields() {
        let options = ModalOptions::default()
            .with_theme(Theme::Dark)
            .with_default_padding(false)
            .with_bg_class("bg")
            .with_close_class("close");
        assert!(options.theme.is_dark());
        assert!(!options.default_padding);
        assert_eq!(options.bg_class.as_deref(), Some("bg"));
        assert_eq!(options.close_class.as_deref(), Some("close"));
    }

    #[test]
    fn dialog_options_deserialize_partially() {
        let confirm: ConfirmOptions =
            serde_json::from_str(r#"{ "confirm_text": "Delete" }"#).unwrap();
        assert_eq!(confirm.confirm_text.as_deref(), Some("Delete"));
        assert_eq!(confirm.close_text, None);

        let info: InfoOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(info, InfoOptions::default());
    }
}
