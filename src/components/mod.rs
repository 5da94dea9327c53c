pub mod mobile_nav;

pub use mobile_nav::{MobileNav, MobileNavView, NavLink};
