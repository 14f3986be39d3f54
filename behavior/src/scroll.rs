use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{
    config::HeaderConfig,
    dom::{Bindings, EventKind, Page, Target},
};

pub const HEADER: &str = ".main-header";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderStyle {
    Flat,
    Elevated,
}

impl HeaderStyle {
    // strictly greater: sitting exactly on the threshold is still flat
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderStyle::Elevated
        } else {
            HeaderStyle::Flat
        }
    }
}

// header styling
//
// scroll events arrive in bursts; each burst schedules at most one animation frame, and
// the frame only touches the header when the style actually changes
pub struct HeaderEffect<P: Page> {
    page: P,
    header: Option<P::Node>,
    config: HeaderConfig,
    frame: RefCell<Option<P::Frame>>,
    applied: Cell<Option<HeaderStyle>>,
    this: Weak<HeaderEffect<P>>,
}

impl<P: Page> HeaderEffect<P> {
    pub fn new(page: P, config: HeaderConfig) -> Rc<Self> {
        let header = page.query(HEADER);
        if header.is_none() {
            debug!("no {HEADER} found, header styling disabled");
        }

        Rc::new_cyclic(|this| HeaderEffect {
            page,
            header,
            config,
            frame: RefCell::new(None),
            applied: Cell::new(None),
            this: this.clone(),
        })
    }

    pub fn current(&self) -> Option<HeaderStyle> {
        self.applied.get()
    }

    pub fn on_scroll(&self) {
        if self.header.is_none() || self.frame.borrow().is_some() {
            return;
        }

        let this = self.this.clone();
        let frame = self.page.request_frame(Box::new(move || {
            if let Some(this) = this.upgrade() {
                this.frame.borrow_mut().take();
                this.update();
            }
        }));
        *self.frame.borrow_mut() = Some(frame);
    }

    // read the offset now and restyle if needed
    pub fn update(&self) {
        let Some(header) = &self.header else {
            return;
        };

        let style = HeaderStyle::for_offset(self.page.scroll_offset(), self.config.elevation_offset);
        if self.applied.get() == Some(style) {
            return;
        }

        let (shadow, backdrop) = match style {
            HeaderStyle::Elevated => (&self.config.elevated_shadow, self.config.elevated_blur.as_str()),
            HeaderStyle::Flat => (&self.config.flat_shadow, "none"),
        };
        self.page.set_style(header, "box-shadow", shadow);
        self.page.set_style(header, "backdrop-filter", backdrop);
        self.applied.set(Some(style));
    }

    pub fn bind(self: &Rc<Self>, bindings: &mut Bindings<P>) {
        let this = Rc::downgrade(self);
        bindings.on(Target::Window, EventKind::Scroll, move |_| {
            if let Some(this) = this.upgrade() {
                this.on_scroll();
            }
        });
    }
}
