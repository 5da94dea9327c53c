//! Browser binding: wires the toggle to elements already present in the page.
//!
//! Elements are hidden by adding the configured class (`hidden` by default)
//! to their class list, the same way the page stylesheet expects.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config::NavConfig;
use crate::error::{NavError, NavResult};
use crate::toggle::{ElementSource, NavToggle, Visibility};

#[derive(Clone)]
pub struct ClassToggleElement {
    element: Element,
    hidden_class: Rc<str>,
}

impl ClassToggleElement {
    pub fn new(element: Element, hidden_class: Rc<str>) -> Self {
        Self { element, hidden_class }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Visibility for ClassToggleElement {
    fn show(&self) {
        if let Err(e) = self.element.class_list().remove_1(&self.hidden_class) {
            tracing::warn!("Failed to show element: {:?}", e);
        }
    }

    fn hide(&self) {
        if let Err(e) = self.element.class_list().add_1(&self.hidden_class) {
            tracing::warn!("Failed to hide element: {:?}", e);
        }
    }

    fn is_visible(&self) -> bool {
        !self.element.class_list().contains(&self.hidden_class)
    }
}

/// `querySelector` over a document, producing class-toggled handles
pub struct DocumentSource<'a> {
    document: &'a Document,
    hidden_class: Rc<str>,
}

impl<'a> DocumentSource<'a> {
    pub fn new(document: &'a Document, hidden_class: &str) -> Self {
        Self {
            document,
            hidden_class: Rc::from(hidden_class),
        }
    }
}

impl ElementSource for DocumentSource<'_> {
    type Element = ClassToggleElement;

    fn query(&self, selector: &str) -> Option<ClassToggleElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|el| ClassToggleElement::new(el, self.hidden_class.clone())),
            Err(e) => {
                // Syntactically invalid selector
                tracing::warn!("querySelector('{}') threw: {:?}", selector, e);
                None
            }
        }
    }
}

type ClickHandler = Closure<dyn FnMut(MouseEvent)>;

/// Live click listeners on the open and close controls.
///
/// Dropping the binding removes both listeners.
pub struct NavBinding {
    toggle: Rc<NavToggle<ClassToggleElement>>,
    on_open: ClickHandler,
    on_close: ClickHandler,
}

impl NavBinding {
    pub fn attach(document: &Document, config: &NavConfig) -> NavResult<Self> {
        config.validate()?;

        let source = DocumentSource::new(document, &config.hidden_class);
        let toggle = Rc::new(NavToggle::from_source(&source, config)?);

        let on_open = {
            let toggle = toggle.clone();
            ClickHandler::new(move |_event: MouseEvent| toggle.on_open_click())
        };
        let on_close = {
            let toggle = toggle.clone();
            ClickHandler::new(move |_event: MouseEvent| toggle.on_close_click())
        };

        listen(toggle.open_control().element(), &on_open)?;
        if let Err(e) = listen(toggle.close_control().element(), &on_close) {
            unlisten(toggle.open_control().element(), &on_open);
            return Err(e);
        }

        tracing::info!(
            "Mobile nav attached ({} / {} / {})",
            config.nav_selector,
            config.open_selector,
            config.close_selector
        );

        Ok(Self {
            toggle,
            on_open,
            on_close,
        })
    }

    /// Keep the listeners for the rest of the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for NavBinding {
    fn drop(&mut self) {
        unlisten(self.toggle.open_control().element(), &self.on_open);
        unlisten(self.toggle.close_control().element(), &self.on_close);
    }
}

fn listen(element: &Element, handler: &ClickHandler) -> NavResult<()> {
    element
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| NavError::Dom(format!("{:?}", e)))
}

fn unlisten(element: &Element, handler: &ClickHandler) {
    if let Err(e) =
        element.remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to remove click listener: {:?}", e);
    }
}

/// Attach the toggle to the current page.
///
/// `config_json` is an optional JSON object overriding the default
/// selectors. Failures are logged and otherwise ignored; the controls
/// simply stay inert.
#[wasm_bindgen(js_name = "attachMobileNav")]
pub fn attach_mobile_nav(config_json: Option<String>) {
    let config = match config_json.as_deref().map(NavConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("Mobile nav not attached: {}", e);
            return;
        }
        None => NavConfig::default(),
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("Mobile nav not attached: no document");
        return;
    };

    match NavBinding::attach(&document, &config) {
        Ok(binding) => binding.forget(),
        Err(e) => tracing::warn!("Mobile nav not attached: {}", e),
    }
}
