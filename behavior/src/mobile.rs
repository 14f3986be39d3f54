use std::rc::Rc;

use tracing::debug;

use crate::dom::{Bindings, EventKind, Page, Target};

pub const NAV_MENU: &str = ".nav-menu";
pub const HAMBURGER: &str = ".hamburger-menu";
pub const NAV_REGION: &str = ".main-nav, .nav-menu, .hamburger-menu";

pub const MENU_OPEN_CLASS: &str = "mobile-active";
pub const HAMBURGER_OPEN_CLASS: &str = "active";

// mobile menu
//
// the panel and the hamburger icon always carry the same state: both are written from
// the panel's state in one call, so markup that starts out of sync is corrected on the
// first toggle
pub struct MobileMenu<P: Page> {
    page: P,
    menu: Option<P::Node>,
    hamburger: Option<P::Node>,
}

impl<P: Page> MobileMenu<P> {
    pub fn new(page: P) -> Rc<Self> {
        let menu = page.query(NAV_MENU);
        let hamburger = page.query(HAMBURGER);

        if menu.is_none() {
            debug!("no {NAV_MENU} found, mobile menu disabled");
        }

        Rc::new(MobileMenu {
            page,
            menu,
            hamburger,
        })
    }

    pub fn is_open(&self) -> bool {
        self.menu
            .as_ref()
            .is_some_and(|menu| self.page.has_class(menu, MENU_OPEN_CLASS))
    }

    pub fn toggle(&self) {
        self.set_open(!self.is_open());
    }

    pub fn close(&self) {
        if self.is_open() {
            self.set_open(false);
        }
    }

    fn set_open(&self, open: bool) {
        let Some(menu) = &self.menu else {
            return;
        };

        self.page.set_class(menu, MENU_OPEN_CLASS, open);
        if let Some(hamburger) = &self.hamburger {
            self.page.set_class(hamburger, HAMBURGER_OPEN_CLASS, open);
        }
    }

    // clicks anywhere outside the navigation region close an open panel
    pub fn bind(self: &Rc<Self>, bindings: &mut Bindings<P>) {
        let this = Rc::downgrade(self);
        bindings.on(Target::Document, EventKind::Click, move |evt| {
            let Some(this) = this.upgrade() else {
                return;
            };
            if !this.is_open() {
                return;
            }

            let inside = evt
                .target
                .as_ref()
                .and_then(|t| this.page.closest(t, NAV_REGION))
                .is_some();
            if !inside {
                this.close();
            }
        });
    }
}
