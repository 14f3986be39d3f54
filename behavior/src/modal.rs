use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::{debug, warn};

use crate::{
    config::ModalConfig,
    dom::{Bindings, Event, EventKind, Handler, Page, Target},
};

pub const MODAL: &str = ".custom-alert-modal";
pub const MODAL_CLASS: &str = "custom-alert-modal";
pub const CONTENT_CLASS: &str = "custom-alert-content";
pub const CLOSE_CLASS: &str = "alert-close-btn";

pub const APPLY_BUTTON_ID: &str = "apply-btn";
pub const PHONE_BUTTON_ID: &str = "phone";

// a live modal.  the listeners and the pending timer (fade-in, later the delayed
// removal) belong to the instance, so discarding it tears all of that down at once
struct Instance<P: Page> {
    backdrop: P::Node,
    message: String,
    closing: bool,
    _timer: Option<P::Timer>,
    _listeners: Vec<P::Listener>,
}

// modal alert
//
// at most one modal exists at a time.  show() replaces whatever is there instantly
// (including one that is still fading out) rather than queueing
pub struct ModalAlert<P: Page> {
    page: P,
    title: String,
    config: ModalConfig,
    current: RefCell<Option<Instance<P>>>,
    this: Weak<ModalAlert<P>>,
}

impl<P: Page> ModalAlert<P> {
    pub fn new(page: P, title: impl Into<String>, config: ModalConfig) -> Rc<Self> {
        Rc::new_cyclic(|this| ModalAlert {
            page,
            title: title.into(),
            config,
            current: RefCell::new(None),
            this: this.clone(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.current.borrow().as_ref().is_some_and(|m| !m.closing)
    }

    pub fn message(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|m| m.message.clone())
    }

    pub fn show(&self, message: &str) {
        self.discard();

        let Some(body) = self.page.body() else {
            warn!("no document body, cannot show modal");
            return;
        };
        let Some(backdrop) = self.build(message) else {
            warn!("failed to create modal elements");
            return;
        };

        self.page.set_style(&backdrop, "opacity", "0");
        self.page.append_child(&body, &backdrop);

        let listeners = self.listeners(&backdrop);

        let page = self.page.clone();
        let fading_in = backdrop.clone();
        let timer = self.page.set_timeout(
            self.config.fade_in_delay,
            Box::new(move || page.set_style(&fading_in, "opacity", "1")),
        );

        debug!("showing modal");
        *self.current.borrow_mut() = Some(Instance {
            backdrop,
            message: message.to_owned(),
            closing: false,
            _timer: Some(timer),
            _listeners: listeners,
        });
    }

    // fade out, then remove once the fade has run
    pub fn close(&self) {
        let mut current = self.current.borrow_mut();
        let Some(instance) = current.as_mut() else {
            return;
        };
        if instance.closing {
            return;
        }

        instance.closing = true;
        self.page.set_style(&instance.backdrop, "opacity", "0");

        let this = self.this.clone();
        instance._timer = Some(self.page.set_timeout(
            self.config.fade_out,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.finish_close();
                }
            }),
        ));
    }

    fn finish_close(&self) {
        let closing = self
            .current
            .borrow()
            .as_ref()
            .is_some_and(|m| m.closing);
        if closing {
            self.discard();
        }
    }

    fn discard(&self) {
        let previous = self.current.borrow_mut().take();
        if let Some(previous) = previous {
            self.page.remove(&previous.backdrop);
        }
    }

    // backdrop > content > (title, message, ok button)
    fn build(&self, message: &str) -> Option<P::Node> {
        let page = &self.page;

        let backdrop = page.create_element("div")?;
        page.add_class(&backdrop, MODAL_CLASS);

        let content = page.create_element("div")?;
        page.add_class(&content, CONTENT_CLASS);

        let title = page.create_element("h3")?;
        page.set_text(&title, &self.title);

        let text = page.create_element("p")?;
        page.set_text(&text, message);

        let button = page.create_element("button")?;
        page.add_class(&button, CLOSE_CLASS);
        page.set_text(&button, "OK");

        page.append_child(&content, &title);
        page.append_child(&content, &text);
        page.append_child(&content, &button);
        page.append_child(&backdrop, &content);

        Some(backdrop)
    }

    fn listeners(&self, backdrop: &P::Node) -> Vec<P::Listener> {
        let mut listeners = Vec::with_capacity(2);

        if let Some(button) = self.page.query_in(backdrop, &format!(".{CLOSE_CLASS}")) {
            let this = self.this.clone();
            let on_ok: Handler<P::Node> = Rc::new(move |_: &Event<P::Node>| {
                if let Some(this) = this.upgrade() {
                    this.close();
                }
            });
            listeners.push(
                self.page
                    .listen(&Target::Node(button), EventKind::Click, on_ok),
            );
        }

        // only a click on the backdrop itself dismisses; clicks inside the content panel
        // bubble up here too and have to be ignored
        let this = self.this.clone();
        let own = backdrop.clone();
        let on_backdrop: Handler<P::Node> = Rc::new(move |evt: &Event<P::Node>| {
            if evt.target.as_ref() != Some(&own) {
                return;
            }
            if let Some(this) = this.upgrade() {
                this.close();
            }
        });
        listeners.push(self.page.listen(
            &Target::Node(backdrop.clone()),
            EventKind::Click,
            on_backdrop,
        ));

        listeners
    }

    // the two fixed buttons on the page
    pub fn bind(self: &Rc<Self>, bindings: &mut Bindings<P>) {
        let buttons = [
            (APPLY_BUTTON_ID, self.config.apply_message.clone()),
            (PHONE_BUTTON_ID, self.config.phone_message.clone()),
        ];

        for (id, message) in buttons {
            let Some(button) = self.page.by_id(id) else {
                debug!("no #{id} button on the page");
                continue;
            };

            let this = Rc::downgrade(self);
            bindings.on(Target::Node(button), EventKind::Click, move |evt| {
                evt.prevent_default();
                if let Some(this) = this.upgrade() {
                    this.show(&message);
                }
            });
        }
    }
}
