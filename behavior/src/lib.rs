// behavior layer for the school homepage
//
// everything here is written against the Page trait in dom.rs, so the same controllers
// run in the browser (see the webapp crate) and against the in-memory page in testing.rs
pub mod config;
pub mod dom;
pub mod dropdown;
pub mod mobile;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod section;
pub mod site;

#[cfg(test)]
pub mod testing;

pub use config::SiteConfig;
pub use dom::{Event, EventKind, Page, Target};
pub use site::Site;
