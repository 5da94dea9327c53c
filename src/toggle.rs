//! Two-state open/close toggle for the mobile navigation panel.
//!
//! `NavToggle` never looks anything up on its own: the three element
//! handles are handed to it, either directly or through an
//! [`ElementSource`]. Whatever backs a handle (a DOM element, a reactive
//! signal, a test double) only has to implement [`Visibility`].

use std::cell::Cell;

use crate::config::NavConfig;
use crate::error::{NavError, NavResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Something that can be shown or hidden
pub trait Visibility {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// Resolves selectors to element handles
pub trait ElementSource {
    type Element: Visibility;

    fn query(&self, selector: &str) -> Option<Self::Element>;
}

pub struct NavToggle<E: Visibility> {
    open_control: E,
    close_control: E,
    panel: E,
    state: Cell<MenuState>,
}

impl<E: Visibility> NavToggle<E> {
    /// Create the toggle in the closed state: open control shown, panel hidden.
    /// The close control is left as it is.
    pub fn new(open_control: E, close_control: E, panel: E) -> Self {
        open_control.show();
        panel.hide();
        Self {
            open_control,
            close_control,
            panel,
            state: Cell::new(MenuState::Closed),
        }
    }

    /// Look up the three handles by selector.
    ///
    /// Fails on the first selector that matches nothing, in page order:
    /// panel, open control, close control.
    pub fn from_source<S>(source: &S, config: &NavConfig) -> NavResult<Self>
    where
        S: ElementSource<Element = E>,
    {
        let lookup = |selector: &str| {
            source.query(selector).ok_or_else(|| NavError::missing(selector))
        };

        let panel = lookup(&config.nav_selector)?;
        let open_control = lookup(&config.open_selector)?;
        let close_control = lookup(&config.close_selector)?;

        Ok(Self::new(open_control, close_control, panel))
    }

    pub fn on_open_click(&self) {
        self.open_control.hide();
        self.panel.show();
        self.transition(MenuState::Open);
    }

    pub fn on_close_click(&self) {
        self.open_control.show();
        self.panel.hide();
        self.transition(MenuState::Closed);
    }

    fn transition(&self, next: MenuState) {
        let prev = self.state.replace(next);
        if prev != next {
            tracing::debug!("Mobile nav {:?} -> {:?}", prev, next);
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn open_control(&self) -> &E {
        &self.open_control
    }

    pub fn close_control(&self) -> &E {
        &self.close_control
    }

    pub fn panel(&self) -> &E {
        &self.panel
    }
}
