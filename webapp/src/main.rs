#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;
use common::SiteHandle;

mod home;
use home::HomePage;

mod page;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let site = use_signal(|| None);
    let handle = use_context_provider(|| SiteHandle::new(site));

    // the behavior layer needs the rendered markup, so it is installed after mount
    use_effect(move || handle.install());

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        HomePage {}
    }
}
