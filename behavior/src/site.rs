use std::rc::Rc;

use tracing::info;

use crate::{
    config::SiteConfig,
    dom::{Bindings, Page},
    dropdown::Dropdowns,
    mobile::MobileMenu,
    modal::ModalAlert,
    nav::Navigation,
    reveal::Reveal,
    ripple::Ripples,
    scroll::HeaderEffect,
    section::Sections,
};

// the installed behavior layer
//
// built once after the markup is in place and kept for the lifetime of the page.  all
// of the controllers describe their wiring into one registration table, which is then
// attached in a single pass; dropping the Site detaches everything
pub struct Site<P: Page> {
    sections: Rc<Sections<P>>,
    menu: Rc<MobileMenu<P>>,
    dropdowns: Rc<Dropdowns<P>>,
    nav: Rc<Navigation<P>>,
    modal: Rc<ModalAlert<P>>,
    header: Rc<HeaderEffect<P>>,
    _reveal: Rc<Reveal<P>>,
    ripples: Rc<Ripples<P>>,
    _listeners: Vec<P::Listener>,
}

impl<P: Page> Site<P> {
    pub fn install(page: P, config: SiteConfig) -> Self {
        let breakpoint = config.narrow_breakpoint;

        let sections = Sections::new(page.clone(), config.highlight.clone());
        let menu = MobileMenu::new(page.clone());
        let dropdowns = Dropdowns::new(page.clone(), breakpoint, &config.dropdown);
        let nav = Navigation::new(
            page.clone(),
            breakpoint,
            sections.clone(),
            menu.clone(),
            dropdowns.clone(),
        );
        let modal = ModalAlert::new(page.clone(), config.school_name.clone(), config.modal.clone());
        let header = HeaderEffect::new(page.clone(), config.header.clone());
        let reveal = Reveal::new(page.clone());
        let ripples = Ripples::new(page.clone(), config.ripple_duration);

        let mut bindings = Bindings::new();
        nav.bind(&mut bindings);
        dropdowns.bind(&mut bindings);
        menu.bind(&mut bindings);
        modal.bind(&mut bindings);
        ripples.bind(&mut bindings);
        header.bind(&mut bindings);

        header.update();
        reveal.install(&config.reveal);

        info!("attaching {} event handlers", bindings.len());
        let listeners = bindings.attach(&page);

        Site {
            sections,
            menu,
            dropdowns,
            nav,
            modal,
            header,
            _reveal: reveal,
            ripples,
            _listeners: listeners,
        }
    }

    // inline entry point for the hamburger icon
    pub fn toggle_mobile_menu(&self) {
        self.menu.toggle();
    }

    // inline entry point for markup that jumps to a named section (the about-us flyout)
    pub fn show_section(&self, ident: &str) {
        self.sections.show(ident);
        self.menu.close();
    }

    pub fn sections(&self) -> &Sections<P> {
        &self.sections
    }

    pub fn menu(&self) -> &MobileMenu<P> {
        &self.menu
    }

    pub fn dropdowns(&self) -> &Dropdowns<P> {
        &self.dropdowns
    }

    pub fn nav(&self) -> &Navigation<P> {
        &self.nav
    }

    pub fn modal(&self) -> &ModalAlert<P> {
        &self.modal
    }

    pub fn header(&self) -> &HeaderEffect<P> {
        &self.header
    }

    pub fn ripples(&self) -> &Ripples<P> {
        &self.ripples
    }
}
