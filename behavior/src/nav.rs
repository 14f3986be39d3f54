use std::rc::Rc;

use tracing::{debug, info};

use crate::{
    dom::{Bindings, Event, EventKind, Page, Target, is_narrow},
    dropdown::{DROPDOWN, DROPDOWN_MENU, Dropdowns},
    mobile::MobileMenu,
    section::Sections,
};

pub const NAV_LINKS: &str = ".nav-menu a";
pub const ACTIVE_CLASS: &str = "active";

// what a navigation click should do, derived from the link label alone
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavIntent {
    // scroll the viewport to the absolute top
    Top,
    // resolve and jump to a section identifier
    Section(&'static str),
    // claim the active marker but otherwise do nothing
    Stay,
}

// gallery entries only count when they are items inside a flyout; the dropdown trigger
// labelled "Gallery" just opens the menu
pub fn intent_for(label: &str, in_dropdown_menu: bool) -> NavIntent {
    let label = label.trim().to_lowercase();

    match label.as_str() {
        "home" => NavIntent::Top,
        "facilities" => NavIntent::Section("facility"),
        "infrastructure" => NavIntent::Section("welcome"),
        "contact us" => NavIntent::Section("footer"),
        l if in_dropdown_menu && l.contains("gallery") => NavIntent::Section("facility"),
        _ => NavIntent::Stay,
    }
}

// navigation click dispatcher
//
// every link under the nav menu gets the same handler.  the active marker is claimed
// unconditionally on each click (last click wins), the label decides whether anything
// scrolls, and on narrow viewports a real navigation closes the mobile panel
pub struct Navigation<P: Page> {
    page: P,
    breakpoint: f64,
    links: Vec<P::Node>,
    sections: Rc<Sections<P>>,
    menu: Rc<MobileMenu<P>>,
    dropdowns: Rc<Dropdowns<P>>,
}

impl<P: Page> Navigation<P> {
    pub fn new(
        page: P,
        breakpoint: f64,
        sections: Rc<Sections<P>>,
        menu: Rc<MobileMenu<P>>,
        dropdowns: Rc<Dropdowns<P>>,
    ) -> Rc<Self> {
        let links = page.query_all(NAV_LINKS);
        info!("found {} navigation links", links.len());

        Rc::new(Navigation {
            page,
            breakpoint,
            links,
            sections,
            menu,
            dropdowns,
        })
    }

    pub fn links(&self) -> &[P::Node] {
        &self.links
    }

    pub fn set_active(&self, link: &P::Node) {
        for other in &self.links {
            self.page.remove_class(other, ACTIVE_CLASS);
        }
        self.page.add_class(link, ACTIVE_CLASS);
    }

    // items inside a flyout mark the flyout's own trigger instead of themselves
    fn marker_for(&self, link: &P::Node) -> P::Node {
        self.page
            .closest(link, DROPDOWN)
            .and_then(|dropdown| self.page.query_in(&dropdown, "a"))
            .unwrap_or_else(|| link.clone())
    }

    pub fn on_click(&self, link: &P::Node, evt: &Event<P::Node>) {
        evt.prevent_default();

        let in_menu = self.page.closest(link, DROPDOWN_MENU).is_some();
        let marker = if in_menu {
            self.marker_for(link)
        } else {
            link.clone()
        };
        self.set_active(&marker);

        let label = self.page.text(link);
        match intent_for(&label, in_menu) {
            NavIntent::Top => self.sections.scroll_to_top(),
            NavIntent::Section(ident) => {
                self.sections.show(ident);
            }
            NavIntent::Stay => debug!("no navigation for {:?}", label.trim()),
        }

        if is_narrow(&self.page, self.breakpoint) && self.dropdowns.trigger_index(link).is_none() {
            self.menu.close();
        }
    }

    pub fn bind(self: &Rc<Self>, bindings: &mut Bindings<P>) {
        for link in &self.links {
            let this = Rc::downgrade(self);
            let node = link.clone();
            bindings.on(Target::Node(link.clone()), EventKind::Click, move |evt| {
                if let Some(this) = this.upgrade() {
                    this.on_click(&node, evt);
                }
            });
        }
    }
}
