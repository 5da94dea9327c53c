pub mod use_nav_toggle;

pub use use_nav_toggle::{use_nav_toggle, NavToggleHandle, SignalVisibility};
