pub mod style;

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{error, info};

use behavior::{Site, SiteConfig};

use crate::page::WebPage;

const SITE_TOML: &str = include_str!("../../site.toml");

pub fn load_config() -> SiteConfig {
    parse_config(SITE_TOML)
}

// a broken config file should not take the page down with it
fn parse_config(contents: &str) -> SiteConfig {
    match SiteConfig::from_toml(contents) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site.toml, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

// handle to the installed behavior layer
//
// provided as context by App so that inline onclick handlers in the markup can reach the
// two entry points.  the signal is only ever peeked, so installing the site never
// triggers a re-render that could overwrite the classes the controllers toggle
#[derive(Clone, Copy)]
pub struct SiteHandle {
    site: Signal<Option<Rc<Site<WebPage>>>>,
}

impl SiteHandle {
    pub fn new(site: Signal<Option<Rc<Site<WebPage>>>>) -> Self {
        SiteHandle { site }
    }

    fn current(&self) -> Option<Rc<Site<WebPage>>> {
        self.site.peek().clone()
    }

    pub fn install(mut self) {
        if self.current().is_some() {
            return;
        }

        let page = match WebPage::new() {
            Ok(page) => page,
            Err(err) => {
                error!("page behavior disabled: {err}");
                return;
            }
        };

        let site = Site::install(page, load_config());
        info!("homepage behavior installed");

        self.site.set(Some(Rc::new(site)));
    }

    pub fn toggle_mobile_menu(&self) {
        if let Some(site) = self.current() {
            site.toggle_mobile_menu();
        }
    }

    pub fn show_section(&self, ident: &str) {
        if let Some(site) = self.current() {
            site.show_section(ident);
        }
    }
}
