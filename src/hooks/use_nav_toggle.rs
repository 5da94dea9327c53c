use std::rc::Rc;

use dioxus::prelude::*;

use crate::toggle::{MenuState, NavToggle, Visibility};

/// A reactive visibility flag
#[derive(Clone, Copy, PartialEq)]
pub struct SignalVisibility(Signal<bool>);

impl SignalVisibility {
    fn set(&self, visible: bool) {
        // Skip redundant writes so unchanged flags don't trigger a re-render
        if *self.0.peek() != visible {
            let mut signal = self.0;
            signal.set(visible);
        }
    }
}

impl Visibility for SignalVisibility {
    fn show(&self) {
        self.set(true);
    }

    fn hide(&self) {
        self.set(false);
    }

    fn is_visible(&self) -> bool {
        (self.0)()
    }
}

#[derive(Clone)]
pub struct NavToggleHandle {
    toggle: Rc<NavToggle<SignalVisibility>>,
}

/// Handles compare equal when they share the same toggle
impl PartialEq for NavToggleHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.toggle, &other.toggle)
    }
}

pub fn use_nav_toggle() -> NavToggleHandle {
    let open_control = use_signal(|| true);
    let close_control = use_signal(|| true);
    let panel = use_signal(|| false);

    let toggle = use_hook(|| {
        Rc::new(NavToggle::new(
            SignalVisibility(open_control),
            SignalVisibility(close_control),
            SignalVisibility(panel),
        ))
    });

    NavToggleHandle { toggle }
}

impl NavToggleHandle {
    pub fn open(&self) {
        self.toggle.on_open_click();
    }

    pub fn close(&self) {
        self.toggle.on_close_click();
    }

    pub fn state(&self) -> MenuState {
        self.toggle.state()
    }

    pub fn open_control_visible(&self) -> bool {
        self.toggle.open_control().is_visible()
    }

    pub fn close_control_visible(&self) -> bool {
        self.toggle.close_control().is_visible()
    }

    pub fn panel_visible(&self) -> bool {
        self.toggle.panel().is_visible()
    }
}
