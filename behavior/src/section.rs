use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{config::HighlightConfig, dom::Page};

// several logical subsections (welcome, director, principal) share one visual container,
// so a jump lands on the container rather than the nested anchor.  facilities is the one
// identifier that is never widened
pub const SECTION_WRAPPER: &str = ".welcome-section";
pub const UNWRAPPED_SECTION: &str = "facility";

// section table
//
// closed on purpose: identifiers not listed here are looked up as a raw element id and
// then as a class name.  candidate selectors are tried in order
const SECTION_TABLE: &[(&str, &[&str])] = &[
    ("facility", &[".facilities-section"]),
    ("welcome", &["#welcome", ".welcome-section"]),
    ("footer", &["footer", ".main-footer"]),
];

pub fn resolve<P: Page>(page: &P, ident: &str) -> Option<P::Node> {
    let ident = ident.trim();
    if ident.is_empty() {
        return None;
    }

    let direct = match SECTION_TABLE.iter().find(|(key, _)| *key == ident) {
        Some((_, selectors)) => selectors.iter().find_map(|s| page.query(s)),
        None => page.by_id(ident).or_else(|| class_lookup(page, ident)),
    }?;

    if ident == UNWRAPPED_SECTION {
        return Some(direct);
    }

    Some(page.closest(&direct, SECTION_WRAPPER).unwrap_or(direct))
}

// only plain identifiers are turned into class selectors, anything else would be an
// invalid (or surprising) selector
fn class_lookup<P: Page>(page: &P, ident: &str) -> Option<P::Node> {
    let plain = ident
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !plain {
        return None;
    }
    page.query(&format!(".{ident}"))
}

// highlight lifecycle
//
// Lit: background swapped, waiting to restore it
// Fading: background restored, waiting to drop the transition so later style changes
// are instant again
enum Phase<P: Page> {
    Lit {
        node: P::Node,
        original: String,
        _timer: P::Timer,
    },
    Fading {
        node: P::Node,
        _timer: P::Timer,
    },
}

// scroll-and-highlight effector
//
// owns the single pending highlight.  starting a new one settles the previous one
// immediately instead of letting two timers fight over the same style properties
pub struct Sections<P: Page> {
    page: P,
    config: HighlightConfig,
    pending: RefCell<Option<Phase<P>>>,
    this: Weak<Sections<P>>,
}

impl<P: Page> Sections<P> {
    pub fn new(page: P, config: HighlightConfig) -> Rc<Self> {
        Rc::new_cyclic(|this| Sections {
            page,
            config,
            pending: RefCell::new(None),
            this: this.clone(),
        })
    }

    pub fn resolve(&self, ident: &str) -> Option<P::Node> {
        resolve(&self.page, ident)
    }

    // returns false when nothing could be resolved; the caller just carries on
    pub fn show(&self, ident: &str) -> bool {
        match self.resolve(ident) {
            Some(target) => {
                self.scroll_and_highlight(&target);
                true
            }
            None => {
                debug!("no section found for {ident}");
                false
            }
        }
    }

    pub fn scroll_to_top(&self) {
        self.page.scroll_to_top();
    }

    pub fn scroll_and_highlight(&self, target: &P::Node) {
        self.page.scroll_into_view(target);
        self.highlight(target);
    }

    pub fn highlight(&self, target: &P::Node) {
        let previous = self.pending.borrow_mut().take();
        if let Some(previous) = previous {
            self.settle(previous);
        }

        let original = self.page.style(target, "background-color");
        self.page
            .set_style(target, "background-color", &self.config.color);
        self.page
            .set_style(target, "transition", &self.config.transition);

        let this = self.this.clone();
        let timer = self.page.set_timeout(
            self.config.duration,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.restore();
                }
            }),
        );

        *self.pending.borrow_mut() = Some(Phase::Lit {
            node: target.clone(),
            original,
            _timer: timer,
        });
    }

    pub fn is_highlighting(&self) -> bool {
        self.pending.borrow().is_some()
    }

    fn restore(&self) {
        let phase = self.pending.borrow_mut().take();
        let Some(Phase::Lit { node, original, .. }) = phase else {
            return;
        };

        self.page.set_style(&node, "background-color", &original);

        let this = self.this.clone();
        let timer = self.page.set_timeout(
            self.config.transition_reset,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    let phase = this.pending.borrow_mut().take();
                    if let Some(phase) = phase {
                        this.settle(phase);
                    }
                }
            }),
        );

        *self.pending.borrow_mut() = Some(Phase::Fading {
            node,
            _timer: timer,
        });
    }

    fn settle(&self, phase: Phase<P>) {
        match phase {
            Phase::Lit { node, original, .. } => {
                self.page.set_style(&node, "background-color", &original);
                self.page.set_style(&node, "transition", "");
            }
            Phase::Fading { node, .. } => {
                self.page.set_style(&node, "transition", "");
            }
        }
    }
}
