use std::{cell::Cell, rc::Rc};

// page abstraction
//
// every behavior in this crate talks to the document through this trait, never through
// web-sys directly.  the webapp provides the real implementation; the testing module
// provides an in-memory one so that handlers can be driven without a browser.
//
// all of the lookups return Option and all of the mutations are infallible from the
// caller's point of view: a missing element just means that feature does nothing
pub trait Page: Clone + 'static {
    type Node: Clone + PartialEq + 'static;

    // guards: dropping any of these detaches/cancels the underlying registration
    type Listener;
    type Timer;
    type Frame;
    type Observer;

    // queries
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_in(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn text(&self, node: &Self::Node) -> String;

    // classes and inline style
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn style(&self, node: &Self::Node, property: &str) -> String;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    // tree mutation
    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    fn remove(&self, node: &Self::Node);

    // geometry and scrolling
    fn rect(&self, node: &Self::Node) -> Rect;
    fn scroll_into_view(&self, node: &Self::Node);
    fn scroll_to_top(&self);
    fn scroll_offset(&self) -> f64;
    fn viewport_width(&self) -> f64;

    // scheduling
    fn listen(
        &self,
        target: &Target<Self::Node>,
        kind: EventKind,
        handler: Handler<Self::Node>,
    ) -> Self::Listener;
    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Frame;

    // viewport intersection
    fn observe(
        &self,
        nodes: &[Self::Node],
        options: &ObserveOptions,
        on_enter: Rc<dyn Fn(&Self::Node)>,
    ) -> Self::Observer;
    fn unobserve(&self, observer: &Self::Observer, node: &Self::Node);

    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }
}

// narrow viewport predicate
//
// this is deliberately recomputed on every call since the window can be resized at any
// point during the session
pub fn is_narrow<P: Page>(page: &P, breakpoint: f64) -> bool {
    page.viewport_width() <= breakpoint
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Target<N> {
    Node(N),
    Document,
    Window,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    KeyDown,
    Scroll,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::KeyDown => "keydown",
            EventKind::Scroll => "scroll",
        }
    }

    pub fn bubbles(&self) -> bool {
        matches!(self, EventKind::Click | EventKind::KeyDown)
    }

    // whether a handler for this kind might call prevent_default(), which in the browser
    // requires a non-passive listener
    pub fn cancelable(&self) -> bool {
        matches!(self, EventKind::Click | EventKind::KeyDown)
    }
}

pub type Handler<N> = Rc<dyn Fn(&Event<N>)>;

// a host-independent view of a dom event
//
// only the fields that the handlers actually read are carried over
#[derive(Debug)]
pub struct Event<N> {
    pub target: Option<N>,
    pub key: Option<String>,
    pub client_x: f64,
    pub client_y: f64,
    default_prevented: Cell<bool>,
}

impl<N> Event<N> {
    pub fn new(target: Option<N>) -> Self {
        Event {
            target,
            key: None,
            client_x: 0.0,
            client_y: 0.0,
            default_prevented: Cell::new(false),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn at(mut self, client_x: f64, client_y: f64) -> Self {
        self.client_x = client_x;
        self.client_y = client_y;
        self
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

// handler registration table
//
// controllers describe their wiring here as (target, event kind) -> handler entries, and
// the table is attached to a page exactly once.  keeping the description separate from
// the attachment means the wiring can be inspected and each handler invoked directly
pub struct Bindings<P: Page> {
    entries: Vec<Binding<P>>,
}

pub struct Binding<P: Page> {
    pub target: Target<P::Node>,
    pub kind: EventKind,
    pub handler: Handler<P::Node>,
}

impl<P: Page> Bindings<P> {
    pub fn new() -> Self {
        Bindings {
            entries: Vec::new(),
        }
    }

    pub fn on(
        &mut self,
        target: Target<P::Node>,
        kind: EventKind,
        handler: impl Fn(&Event<P::Node>) + 'static,
    ) {
        self.entries.push(Binding {
            target,
            kind,
            handler: Rc::new(handler),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // all handlers registered for exactly this target and kind
    pub fn handlers_for(&self, target: &Target<P::Node>, kind: EventKind) -> Vec<Handler<P::Node>> {
        self.entries
            .iter()
            .filter(|b| b.kind == kind && &b.target == target)
            .map(|b| b.handler.clone())
            .collect()
    }

    pub fn attach(self, page: &P) -> Vec<P::Listener> {
        self.entries
            .into_iter()
            .map(|b| page.listen(&b.target, b.kind, b.handler))
            .collect()
    }
}

impl<P: Page> Default for Bindings<P> {
    fn default() -> Self {
        Bindings::new()
    }
}
