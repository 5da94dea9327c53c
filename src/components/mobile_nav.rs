use dioxus::prelude::*;

use crate::hooks::{use_nav_toggle, NavToggleHandle};

#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Hamburger button plus the slide-in navigation panel it reveals.
///
/// Uses the same class names as the static page markup, so the page
/// stylesheet applies unchanged.
#[component]
pub fn MobileNav(links: Vec<NavLink>) -> Element {
    let menu = use_nav_toggle();

    rsx! {
        MobileNavView { menu, links }
    }
}

/// Markup for [`MobileNav`], driven by a toggle owned further up the tree.
#[component]
pub fn MobileNavView(menu: NavToggleHandle, links: Vec<NavLink>) -> Element {
    let open_menu = menu.clone();
    let close_menu = menu.clone();

    rsx! {
        button {
            class: if menu.open_control_visible() { "mobile-menu-icon" } else { "mobile-menu-icon hidden" },
            onclick: move |_| open_menu.open(),
            "☰"
        }

        nav {
            class: if menu.panel_visible() { "mobile-nav" } else { "mobile-nav hidden" },

            button {
                class: if menu.close_control_visible() { "close-mobile-menu-icon" } else { "close-mobile-menu-icon hidden" },
                onclick: move |_| close_menu.close(),
                "✕"
            }

            ul { class: "mobile-nav-list",
                for link in links {
                    li { key: "{link.href}",
                        a { class: "mobile-nav-link", href: "{link.href}", "{link.label}" }
                    }
                }
            }
        }
    }
}
