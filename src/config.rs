//! Selectors and class names used to find and toggle the navigation elements.

use serde::Deserialize;

use crate::error::{NavError, NavResult};

pub const DEFAULT_NAV_SELECTOR: &str = ".mobile-nav";
pub const DEFAULT_OPEN_SELECTOR: &str = ".mobile-menu-icon";
pub const DEFAULT_CLOSE_SELECTOR: &str = ".close-mobile-menu-icon";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    #[serde(default = "default_nav_selector")]
    pub nav_selector: String,
    #[serde(default = "default_open_selector")]
    pub open_selector: String,
    #[serde(default = "default_close_selector")]
    pub close_selector: String,
    /// Class whose presence hides an element
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
}

fn default_nav_selector() -> String {
    DEFAULT_NAV_SELECTOR.to_string()
}

fn default_open_selector() -> String {
    DEFAULT_OPEN_SELECTOR.to_string()
}

fn default_close_selector() -> String {
    DEFAULT_CLOSE_SELECTOR.to_string()
}

fn default_hidden_class() -> String {
    DEFAULT_HIDDEN_CLASS.to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_selector: default_nav_selector(),
            open_selector: default_open_selector(),
            close_selector: default_close_selector(),
            hidden_class: default_hidden_class(),
        }
    }
}

impl NavConfig {
    /// Parse a (possibly partial) JSON object; missing keys fall back to defaults.
    pub fn from_json(json: &str) -> NavResult<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NavResult<()> {
        let selectors = [
            ("navSelector", &self.nav_selector),
            ("openSelector", &self.open_selector),
            ("closeSelector", &self.close_selector),
        ];
        for (key, value) in selectors {
            if value.trim().is_empty() {
                return Err(NavError::InvalidConfig(format!("{} must not be empty", key)));
            }
        }

        if self.hidden_class.is_empty() {
            return Err(NavError::InvalidConfig("hiddenClass must not be empty".to_string()));
        }
        // classList.add only rejects ASCII whitespace in a token
        if self.hidden_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(NavError::InvalidConfig(format!(
                "hiddenClass '{}' must be a single class name",
                self.hidden_class
            )));
        }

        Ok(())
    }
}
