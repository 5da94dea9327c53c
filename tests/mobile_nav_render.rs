use dioxus::prelude::*;
use mobile_nav::components::{MobileNavView, NavLink};
use mobile_nav::hooks::{use_nav_toggle, NavToggleHandle};
use mobile_nav::prelude::MenuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared with the root component so the test can reach the hook's handle
#[derive(Clone, Default)]
struct Harness {
    menu: Rc<RefCell<Option<NavToggleHandle>>>,
    renders: Rc<Cell<usize>>,
}

impl Harness {
    fn menu(&self) -> NavToggleHandle {
        self.menu.borrow().clone().expect("root component rendered")
    }
}

fn app() -> Element {
    let harness = use_context::<Harness>();
    let menu = use_nav_toggle();

    harness.renders.set(harness.renders.get() + 1);
    *harness.menu.borrow_mut() = Some(menu.clone());
    let panel_visible = menu.panel_visible();

    rsx! {
        header { "data-open": "{panel_visible}",
            MobileNavView {
                menu,
                links: vec![NavLink::new("Home", "#home"), NavLink::new("About", "#about")],
            }
        }
    }
}

fn mount() -> (VirtualDom, Harness) {
    let harness = Harness::default();
    let mut dom = VirtualDom::new(app).with_root_context(harness.clone());
    dom.rebuild_in_place();
    (dom, harness)
}

/// Run a handler the way an onclick would, then flush the re-render
fn click(dom: &mut VirtualDom, handler: impl FnOnce()) {
    dom.in_runtime(handler);
    let _ = dom.render_immediate_to_vec();
}

fn assert_closed_markup(html: &str) {
    assert!(html.contains(r#"class="mobile-nav hidden""#), "{}", html);
    assert!(html.contains(r#"class="mobile-menu-icon""#), "{}", html);
    assert!(!html.contains(r#"class="mobile-menu-icon hidden""#), "{}", html);
}

fn assert_close_control_shown(html: &str) {
    assert!(html.contains(r#"class="close-mobile-menu-icon""#), "{}", html);
    assert!(!html.contains("close-mobile-menu-icon hidden"), "{}", html);
}

#[test]
fn initial_render_is_closed() {
    let (dom, harness) = mount();
    let html = dioxus_ssr::render(&dom);

    assert_closed_markup(&html);
    assert_close_control_shown(&html);
    assert!(html.contains(r##"href="#about""##));
    assert_eq!(harness.menu().state(), MenuState::Closed);
}

#[test]
fn open_and_close_flip_hidden_classes() {
    let (mut dom, harness) = mount();
    let menu = harness.menu();

    click(&mut dom, || menu.open());
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"class="mobile-nav""#), "{}", html);
    assert!(html.contains(r#"class="mobile-menu-icon hidden""#), "{}", html);
    assert_close_control_shown(&html);
    assert_eq!(menu.state(), MenuState::Open);

    click(&mut dom, || menu.close());
    let html = dioxus_ssr::render(&dom);
    assert_closed_markup(&html);
    assert_close_control_shown(&html);
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn unchanged_visibility_does_not_rerender() {
    let (mut dom, harness) = mount();
    let menu = harness.menu();
    assert_eq!(harness.renders.get(), 1);

    // Already closed: both writes are no-ops
    click(&mut dom, || menu.close());
    assert_eq!(harness.renders.get(), 1);

    click(&mut dom, || menu.open());
    assert_eq!(harness.renders.get(), 2);

    click(&mut dom, || menu.open());
    assert_eq!(harness.renders.get(), 2);
}
