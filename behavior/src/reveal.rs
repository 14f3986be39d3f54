use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::{debug, info};

use crate::{
    config::RevealConfig,
    dom::{ObserveOptions, Page},
};

pub const SECTIONS: &str = ".facilities-section, .why-choose-section, .welcome-section";
pub const CARDS: &str = ".facility-card";

// `reveal` puts an element into its hidden starting pose, `visible` plays the entrance
pub const PENDING_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

// entrance animations
//
// one observer for every section and card, set up once.  the reveal is one-shot: an
// element is unobserved as soon as it has been marked visible, so leaving and
// re-entering the viewport does nothing
pub struct Reveal<P: Page> {
    page: P,
    observer: RefCell<Option<P::Observer>>,
    this: Weak<Reveal<P>>,
}

impl<P: Page> Reveal<P> {
    pub fn new(page: P) -> Rc<Self> {
        Rc::new_cyclic(|this| Reveal {
            page,
            observer: RefCell::new(None),
            this: this.clone(),
        })
    }

    pub fn install(&self, config: &RevealConfig) {
        let mut targets = self.page.query_all(SECTIONS);

        let cards = self.page.query_all(CARDS);
        for (idx, card) in cards.iter().enumerate() {
            let delay = config.card_stagger.saturating_mul(idx as u32);
            self.page
                .set_style(card, "animation-delay", &format!("{delay}ms"));
        }
        targets.extend(cards);

        if targets.is_empty() {
            debug!("nothing to reveal");
            return;
        }

        for target in &targets {
            self.page.add_class(target, PENDING_CLASS);
        }

        let options = ObserveOptions {
            threshold: config.threshold,
            root_margin: config.root_margin.clone(),
        };
        let this = self.this.clone();
        let observer = self.page.observe(
            &targets,
            &options,
            Rc::new(move |node: &P::Node| {
                if let Some(this) = this.upgrade() {
                    this.reveal(node);
                }
            }),
        );

        info!("observing {} elements for entrance animation", targets.len());
        *self.observer.borrow_mut() = Some(observer);
    }

    pub fn reveal(&self, node: &P::Node) {
        if !self.page.has_class(node, VISIBLE_CLASS) {
            self.page.add_class(node, VISIBLE_CLASS);
        }

        if let Some(observer) = self.observer.borrow().as_ref() {
            self.page.unobserve(observer, node);
        }
    }
}
