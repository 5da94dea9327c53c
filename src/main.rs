use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use mobile_nav::components::{MobileNav, NavLink};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let links = vec![
        NavLink::new("Home", "#home"),
        NavLink::new("About", "#about"),
        NavLink::new("Projects", "#projects"),
        NavLink::new("Contact", "#contact"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header { class: "site-header",
            span { class: "site-brand", "Portfolio" }
            MobileNav { links }
        }
    }
}
