//! Mobile navigation toggle
//!
//! Shows and hides a mobile navigation panel from a hamburger button and a
//! close button. The open/close logic lives in [`toggle::NavToggle`] and is
//! independent of how elements are represented:
//! - `dom` binds it to markup already in the page (wasm32 only)
//! - `components::MobileNav` renders the controls with Dioxus
//!
//! ## Example
//! ```rust
//! use mobile_nav::prelude::*;
//! use std::cell::Cell;
//!
//! struct Flag(Cell<bool>);
//!
//! impl Visibility for Flag {
//!     fn show(&self) { self.0.set(true) }
//!     fn hide(&self) { self.0.set(false) }
//!     fn is_visible(&self) -> bool { self.0.get() }
//! }
//!
//! let nav = NavToggle::new(Flag(Cell::new(true)), Flag(Cell::new(true)), Flag(Cell::new(true)));
//! assert_eq!(nav.state(), MenuState::Closed);
//!
//! nav.on_open_click();
//! assert!(nav.panel().is_visible());
//! assert!(!nav.open_control().is_visible());
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod toggle;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub mod prelude {
    pub use crate::config::NavConfig;
    pub use crate::error::{NavError, NavResult};
    pub use crate::toggle::{ElementSource, MenuState, NavToggle, Visibility};
}
