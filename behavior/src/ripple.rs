use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::dom::{Bindings, Event, EventKind, Page, Target};

pub const RIPPLE_TARGETS: &str = "button, .apply-btn";
pub const RIPPLE_CLASS: &str = "ripple";

// click ripple
//
// unlike the other effects, ripples are allowed to overlap: every spawned span carries
// its own removal timer
pub struct Ripples<P: Page> {
    page: P,
    duration: u32,
    live: RefCell<Vec<(P::Node, P::Timer)>>,
    this: Weak<Ripples<P>>,
}

impl<P: Page> Ripples<P> {
    pub fn new(page: P, duration: u32) -> Rc<Self> {
        Rc::new_cyclic(|this| Ripples {
            page,
            duration,
            live: RefCell::new(Vec::new()),
            this: this.clone(),
        })
    }

    pub fn live(&self) -> usize {
        self.live.borrow().len()
    }

    // a circle as large as the button's longer side, centered on the click point
    pub fn spawn(&self, button: &P::Node, evt: &Event<P::Node>) {
        let Some(span) = self.page.create_element("span") else {
            return;
        };

        let rect = self.page.rect(button);
        let size = rect.width.max(rect.height);
        let x = evt.client_x - rect.left - size / 2.0;
        let y = evt.client_y - rect.top - size / 2.0;

        self.page.add_class(&span, RIPPLE_CLASS);
        self.page.set_style(&span, "left", &format!("{x}px"));
        self.page.set_style(&span, "top", &format!("{y}px"));
        self.page.set_style(&span, "width", &format!("{size}px"));
        self.page.set_style(&span, "height", &format!("{size}px"));

        self.page.set_style(button, "position", "relative");
        self.page.set_style(button, "overflow", "hidden");
        self.page.append_child(button, &span);

        let this = self.this.clone();
        let expiring = span.clone();
        let timer = self.page.set_timeout(
            self.duration,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.expire(&expiring);
                }
            }),
        );
        self.live.borrow_mut().push((span, timer));
    }

    fn expire(&self, span: &P::Node) {
        let expired = {
            let mut live = self.live.borrow_mut();
            let idx = live.iter().position(|(s, _)| s == span);
            idx.map(|idx| live.remove(idx))
        };
        self.page.remove(span);
        drop(expired);
    }

    pub fn bind(self: &Rc<Self>, bindings: &mut Bindings<P>) {
        let buttons = self.page.query_all(RIPPLE_TARGETS);
        debug!("ripple on {} buttons", buttons.len());

        for button in buttons {
            let this = Rc::downgrade(self);
            let node = button.clone();
            bindings.on(Target::Node(button), EventKind::Click, move |evt| {
                if let Some(this) = this.upgrade() {
                    this.spawn(&node, evt);
                }
            });
        }
    }
}
