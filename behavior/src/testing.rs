use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use crate::dom::{Event, EventKind, Handler, ObserveOptions, Page, Rect, Target};

// in-memory page
//
// a small stand-in for the browser: a node tree with enough selector support for the
// selectors this crate uses (tag, .class, #id, compounds of those, descendant
// combinators and comma lists), a listener table with bubbling, a manual clock for
// timeouts, a queue of animation frames and an explicit intersection trigger.
//
// callbacks are always invoked with the internal borrow released, so handlers are free
// to query and mutate the page (or register new timers) while running
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone)]
pub struct FakePage {
    state: Rc<RefCell<State>>,
}

struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    style_writes: usize,
}

struct ObserverEntry {
    handle: u64,
    nodes: Vec<NodeId>,
    options: ObserveOptions,
    on_enter: Rc<dyn Fn(&NodeId)>,
}

struct State {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    next_handle: u64,
    now: u64,
    listeners: Vec<(u64, Target<NodeId>, EventKind, Handler<NodeId>)>,
    timers: Vec<(u64, u64, Box<dyn FnOnce()>)>,
    frames: Vec<(u64, Box<dyn FnOnce()>)>,
    observers: Vec<ObserverEntry>,
    scroll_offset: f64,
    viewport_width: f64,
    scrolled_into_view: Vec<NodeId>,
    scrolls_to_top: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum GuardKind {
    Listener,
    Timer,
    Frame,
    Observer,
}

// handle returned for every registration; dropping it removes the registration
pub struct FakeGuard {
    state: Weak<RefCell<State>>,
    handle: u64,
    kind: GuardKind,
}

impl Drop for FakeGuard {
    fn drop(&mut self) {
        let Some(shared) = self.state.upgrade() else {
            return;
        };
        let Ok(mut state) = shared.try_borrow_mut() else {
            return;
        };

        // pull the entry out first so its closure is dropped after the borrow ends
        let removed: Option<Box<dyn std::any::Any>> = match self.kind {
            GuardKind::Listener => take_where(&mut state.listeners, |l| l.0 == self.handle)
                .map(|l| Box::new(l.3) as Box<dyn std::any::Any>),
            GuardKind::Timer => take_where(&mut state.timers, |t| t.0 == self.handle)
                .map(|t| Box::new(t.2) as Box<dyn std::any::Any>),
            GuardKind::Frame => take_where(&mut state.frames, |f| f.0 == self.handle)
                .map(|f| Box::new(f.1) as Box<dyn std::any::Any>),
            GuardKind::Observer => take_where(&mut state.observers, |o| o.handle == self.handle)
                .map(|o| Box::new(o.on_enter) as Box<dyn std::any::Any>),
        };
        drop(state);
        drop(removed);
    }
}

fn take_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    let idx = items.iter().position(pred)?;
    Some(items.remove(idx))
}

impl NodeData {
    fn new(tag: &str) -> Self {
        NodeData {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            rect: Rect::default(),
            style_writes: 0,
        }
    }
}

// a single compound selector such as `a`, `.dropdown-menu` or `li.dropdown#gallery`
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn parse_compound(input: &str) -> Compound {
    let mut compound = Compound::default();
    let mut current = String::new();
    let mut sigil = None;

    let flush = |sigil: Option<char>, current: &mut String, compound: &mut Compound| {
        if current.is_empty() {
            return;
        }
        let token = std::mem::take(current);
        match sigil {
            Some('.') => compound.classes.push(token),
            Some('#') => compound.id = Some(token),
            _ => compound.tag = Some(token.to_ascii_lowercase()),
        }
    };

    for c in input.chars() {
        if c == '.' || c == '#' {
            flush(sigil, &mut current, &mut compound);
            sigil = Some(c);
        } else {
            current.push(c);
        }
    }
    flush(sigil, &mut current, &mut compound);

    compound
}

impl State {
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn matches_compound(&self, id: NodeId, compound: &Compound) -> bool {
        let node = self.node(id);

        if let Some(tag) = &compound.tag {
            if tag != "*" && &node.tag != tag {
                return false;
            }
        }
        if let Some(want) = &compound.id {
            if node.id.as_ref() != Some(want) {
                return false;
            }
        }
        compound.classes.iter().all(|c| node.classes.contains(c))
    }

    // right-to-left matching of a descendant chain, as browsers do it
    fn matches_complex(&self, id: NodeId, selector: &str) -> bool {
        let parts: Vec<Compound> = selector.split_whitespace().map(parse_compound).collect();
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        if !self.matches_compound(id, last) {
            return false;
        }

        let mut cursor = self.node(id).parent;
        for part in ancestors.iter().rev() {
            loop {
                let Some(candidate) = cursor else {
                    return false;
                };
                cursor = self.node(candidate).parent;
                if self.matches_compound(candidate, part) {
                    break;
                }
            }
        }
        true
    }

    fn matches(&self, id: NodeId, selector: &str) -> bool {
        selector.split(',').any(|s| self.matches_complex(id, s.trim()))
    }

    fn descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.node(id).children {
            out.push(child);
            self.descendants(child, out);
        }
    }

    fn attached(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == self.root {
                return true;
            }
            cursor = self.node(current).parent;
        }
        false
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }
}

impl FakePage {
    pub fn new() -> Self {
        let mut nodes = vec![NodeData::new("html"), NodeData::new("body")];
        nodes[1].parent = Some(NodeId(0));
        nodes[0].children.push(NodeId(1));

        FakePage {
            state: Rc::new(RefCell::new(State {
                nodes,
                root: NodeId(0),
                body: NodeId(1),
                next_handle: 0,
                now: 0,
                listeners: Vec::new(),
                timers: Vec::new(),
                frames: Vec::new(),
                observers: Vec::new(),
                scroll_offset: 0.0,
                viewport_width: 1280.0,
                scrolled_into_view: Vec::new(),
                scrolls_to_top: 0,
            })),
        }
    }

    pub fn body_id(&self) -> NodeId {
        self.state.borrow().body
    }

    // builder: `shape` is a compound selector describing the new element, e.g.
    // "li.dropdown" or "button#phone"
    pub fn add(&self, parent: NodeId, shape: &str) -> NodeId {
        let compound = parse_compound(shape);
        let mut state = self.state.borrow_mut();

        let id = NodeId(state.nodes.len());
        let mut data = NodeData::new(compound.tag.as_deref().unwrap_or("div"));
        data.id = compound.id;
        data.classes = compound.classes;
        data.parent = Some(parent);

        state.nodes.push(data);
        state.node_mut(parent).children.push(id);
        id
    }

    pub fn add_text(&self, parent: NodeId, shape: &str, text: &str) -> NodeId {
        let id = self.add(parent, shape);
        self.state.borrow_mut().node_mut(id).text = text.to_owned();
        id
    }

    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.state.borrow_mut().node_mut(node).rect = rect;
    }

    pub fn resize(&self, width: f64) {
        self.state.borrow_mut().viewport_width = width;
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.state.borrow().attached(node)
    }

    pub fn count(&self, selector: &str) -> usize {
        self.query_all(selector).len()
    }

    pub fn style_writes(&self, node: &NodeId) -> usize {
        self.state.borrow().node(*node).style_writes
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.state.borrow().scrolled_into_view.clone()
    }

    pub fn scrolls_to_top(&self) -> usize {
        self.state.borrow().scrolls_to_top
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn observed(&self) -> Vec<NodeId> {
        self.state
            .borrow()
            .observers
            .iter()
            .flat_map(|o| o.nodes.iter().copied())
            .collect()
    }

    pub fn observer_options(&self) -> Vec<ObserveOptions> {
        self.state
            .borrow()
            .observers
            .iter()
            .map(|o| o.options.clone())
            .collect()
    }

    // events

    pub fn dispatch(&self, target: &Target<NodeId>, kind: EventKind, event: &Event<NodeId>) {
        let handlers: Vec<Handler<NodeId>> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.2 == kind && &l.1 == target)
            .map(|l| l.3.clone())
            .collect();

        for handler in handlers {
            handler(event);
        }
    }

    // deliver to the node, then (for bubbling kinds) each ancestor and the document
    pub fn fire(&self, node: NodeId, kind: EventKind, event: Event<NodeId>) -> Event<NodeId> {
        self.dispatch(&Target::Node(node), kind, &event);

        if kind.bubbles() {
            let mut cursor = self.parent(&node);
            while let Some(ancestor) = cursor {
                self.dispatch(&Target::Node(ancestor), kind, &event);
                cursor = self.parent(&ancestor);
            }
            self.dispatch(&Target::Document, kind, &event);
        }
        event
    }

    pub fn click(&self, node: NodeId) -> Event<NodeId> {
        self.fire(node, EventKind::Click, Event::new(Some(node)))
    }

    pub fn click_at(&self, node: NodeId, x: f64, y: f64) -> Event<NodeId> {
        self.fire(node, EventKind::Click, Event::new(Some(node)).at(x, y))
    }

    pub fn hover(&self, node: NodeId) {
        self.fire(node, EventKind::MouseEnter, Event::new(Some(node)));
    }

    pub fn leave(&self, node: NodeId) {
        self.fire(node, EventKind::MouseLeave, Event::new(Some(node)));
    }

    pub fn press_key(&self, key: &str) -> Event<NodeId> {
        let body = self.body_id();
        self.fire(body, EventKind::KeyDown, Event::new(Some(body)).with_key(key))
    }

    pub fn scroll_to(&self, offset: f64) {
        self.state.borrow_mut().scroll_offset = offset;
        self.dispatch(&Target::Window, EventKind::Scroll, &Event::new(None));
    }

    // clock

    // fire every timer due within the next `millis`, in due order
    pub fn advance(&self, millis: u64) {
        let end = self.state.borrow().now + millis;

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.1 <= end)
                    .min_by_key(|(_, t)| (t.1, t.0))
                    .map(|(idx, _)| idx);

                match due {
                    Some(idx) => {
                        let (_, at, callback) = state.timers.remove(idx);
                        state.now = at;
                        Some(callback)
                    }
                    None => None,
                }
            };

            match next {
                Some(callback) => callback(),
                None => break,
            }
        }

        self.state.borrow_mut().now = end;
    }

    // run every frame callback queued before this call
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        let count = frames.len();
        for (_, callback) in frames {
            callback();
        }
        count
    }

    pub fn intersect(&self, node: NodeId) {
        let callbacks: Vec<Rc<dyn Fn(&NodeId)>> = self
            .state
            .borrow()
            .observers
            .iter()
            .filter(|o| o.nodes.contains(&node))
            .map(|o| o.on_enter.clone())
            .collect();

        for callback in callbacks {
            callback(&node);
        }
    }

    fn guard(&self, handle: u64, kind: GuardKind) -> FakeGuard {
        FakeGuard {
            state: Rc::downgrade(&self.state),
            handle,
            kind,
        }
    }
}

impl Default for FakePage {
    fn default() -> Self {
        FakePage::new()
    }
}

impl Page for FakePage {
    type Node = NodeId;
    type Listener = FakeGuard;
    type Timer = FakeGuard;
    type Frame = FakeGuard;
    type Observer = FakeGuard;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let state = self.state.borrow();
        let mut all = Vec::new();
        state.descendants(state.root, &mut all);
        all.into_iter().filter(|id| state.matches(*id, selector)).collect()
    }

    fn query_in(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let state = self.state.borrow();
        let mut all = Vec::new();
        state.descendants(*node, &mut all);
        all.into_iter().find(|id| state.matches(*id, selector))
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let state = self.state.borrow();
        let mut all = Vec::new();
        state.descendants(state.root, &mut all);
        all.into_iter()
            .find(|n| state.node(*n).id.as_deref() == Some(id))
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let state = self.state.borrow();
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if state.matches(current, selector) {
                return Some(current);
            }
            cursor = state.node(current).parent;
        }
        None
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.state.borrow().node(*node).parent
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body_id())
    }

    fn text(&self, node: &NodeId) -> String {
        let state = self.state.borrow();
        let mut text = state.node(*node).text.clone();
        let mut all = Vec::new();
        state.descendants(*node, &mut all);
        for child in all {
            text.push_str(&state.node(child).text);
        }
        text
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.node_mut(*node).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.state
            .borrow_mut()
            .node_mut(*node)
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.state
            .borrow()
            .node(*node)
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.state
            .borrow()
            .node(*node)
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let data = state.node_mut(*node);
        data.style_writes += 1;
        if value.is_empty() {
            data.styles.remove(property);
        } else {
            data.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        let mut state = self.state.borrow_mut();
        let id = NodeId(state.nodes.len());
        state.nodes.push(NodeData::new(tag));
        Some(id)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.state.borrow_mut().node_mut(*node).text = text.to_owned();
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut state = self.state.borrow_mut();
        state.detach(*child);
        state.node_mut(*child).parent = Some(*parent);
        state.node_mut(*parent).children.push(*child);
    }

    fn remove(&self, node: &NodeId) {
        self.state.borrow_mut().detach(*node);
    }

    fn rect(&self, node: &NodeId) -> Rect {
        self.state.borrow().node(*node).rect
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.state.borrow_mut().scrolled_into_view.push(*node);
    }

    fn scroll_to_top(&self) {
        self.state.borrow_mut().scrolls_to_top += 1;
    }

    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll_offset
    }

    fn viewport_width(&self) -> f64 {
        self.state.borrow().viewport_width
    }

    fn listen(
        &self,
        target: &Target<NodeId>,
        kind: EventKind,
        handler: Handler<NodeId>,
    ) -> FakeGuard {
        let mut state = self.state.borrow_mut();
        let handle = state.handle();
        state.listeners.push((handle, target.clone(), kind, handler));
        drop(state);

        self.guard(handle, GuardKind::Listener)
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> FakeGuard {
        let mut state = self.state.borrow_mut();
        let handle = state.handle();
        let due = state.now + u64::from(millis);
        state.timers.push((handle, due, callback));
        drop(state);

        self.guard(handle, GuardKind::Timer)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FakeGuard {
        let mut state = self.state.borrow_mut();
        let handle = state.handle();
        state.frames.push((handle, callback));
        drop(state);

        self.guard(handle, GuardKind::Frame)
    }

    fn observe(
        &self,
        nodes: &[NodeId],
        options: &ObserveOptions,
        on_enter: Rc<dyn Fn(&NodeId)>,
    ) -> FakeGuard {
        let mut state = self.state.borrow_mut();
        let handle = state.handle();
        state.observers.push(ObserverEntry {
            handle,
            nodes: nodes.to_vec(),
            options: options.clone(),
            on_enter,
        });
        drop(state);

        self.guard(handle, GuardKind::Observer)
    }

    fn unobserve(&self, observer: &FakeGuard, node: &NodeId) {
        let mut state = self.state.borrow_mut();
        if let Some(entry) = state
            .observers
            .iter_mut()
            .find(|o| o.handle == observer.handle)
        {
            entry.nodes.retain(|n| n != node);
        }
    }
}

// school homepage fixture
//
// builds the markup the controllers expect, with every interesting node named so tests
// can poke at it directly
pub struct School {
    pub page: FakePage,

    pub header: NodeId,
    pub main_nav: NodeId,
    pub hamburger: NodeId,
    pub nav_menu: NodeId,

    pub home: NodeId,
    pub about: NodeId,
    pub about_dropdown: NodeId,
    pub about_menu: NodeId,
    pub welcome_item: NodeId,
    pub director_item: NodeId,
    pub principal_item: NodeId,
    pub facilities: NodeId,
    pub infrastructure: NodeId,
    pub gallery: NodeId,
    pub gallery_dropdown: NodeId,
    pub gallery_menu: NodeId,
    pub photo_gallery: NodeId,
    pub video_gallery: NodeId,
    pub admission: NodeId,
    pub contact: NodeId,

    pub hero: NodeId,
    pub apply: NodeId,
    pub phone: NodeId,

    pub welcome_section: NodeId,
    pub welcome_anchor: NodeId,
    pub director_section: NodeId,
    pub director_anchor: NodeId,
    pub principal_section: NodeId,
    pub principal_anchor: NodeId,
    pub facilities_section: NodeId,
    pub cards: Vec<NodeId>,
    pub why_choose: NodeId,
    pub footer: NodeId,
}

impl School {
    pub fn new() -> Self {
        let page = FakePage::new();
        let body = page.body_id();

        let header = page.add(body, "header.main-header");
        let main_nav = page.add(header, "nav.main-nav");
        let hamburger = page.add(main_nav, "div.hamburger-menu");
        let nav_menu = page.add(main_nav, "ul.nav-menu");

        let item = |label: &str| {
            let li = page.add(nav_menu, "li");
            page.add_text(li, "a", label)
        };
        let dropdown = |label: &str, entries: &[&str]| {
            let li = page.add(nav_menu, "li.dropdown");
            let trigger = page.add_text(li, "a", label);
            let menu = page.add(li, "ul.dropdown-menu");
            let links: Vec<NodeId> = entries
                .iter()
                .map(|entry| {
                    let li = page.add(menu, "li");
                    page.add_text(li, "a", entry)
                })
                .collect();
            (li, trigger, menu, links)
        };

        let home = item("Home");
        let (about_dropdown, about, about_menu, about_links) = dropdown(
            "About Us",
            &["Welcome", "Director's Message", "Principal's Message"],
        );
        let facilities = item("Facilities");
        let infrastructure = item("  Infrastructure ");
        let (gallery_dropdown, gallery, gallery_menu, gallery_links) =
            dropdown("Gallery", &["Photo Gallery", "Video Gallery"]);
        let admission = item("Admission");
        let contact = item("Contact Us");

        let hero = page.add(body, "section.hero-section");
        let apply = page.add_text(hero, "a#apply-btn.apply-btn", "Apply Now");
        let phone = page.add_text(hero, "button#phone", "Call Us");

        let welcome_section = page.add(body, "section.welcome-section");
        let welcome_anchor = page.add(welcome_section, "div#welcome");
        let director_section = page.add(body, "section.welcome-section");
        let director_anchor = page.add(director_section, "div#director");
        let principal_section = page.add(body, "section.welcome-section");
        let principal_anchor = page.add(principal_section, "div#principal");

        let facilities_section = page.add(body, "section.facilities-section");
        let cards = (0..4)
            .map(|_| page.add(facilities_section, "div.facility-card"))
            .collect();
        let why_choose = page.add(body, "section.why-choose-section");
        let footer = page.add(body, "footer.main-footer");

        School {
            header,
            main_nav,
            hamburger,
            nav_menu,
            home,
            about,
            about_dropdown,
            about_menu,
            welcome_item: about_links[0],
            director_item: about_links[1],
            principal_item: about_links[2],
            facilities,
            infrastructure,
            gallery,
            gallery_dropdown,
            gallery_menu,
            photo_gallery: gallery_links[0],
            video_gallery: gallery_links[1],
            admission,
            contact,
            hero,
            apply,
            phone,
            welcome_section,
            welcome_anchor,
            director_section,
            director_anchor,
            principal_section,
            principal_anchor,
            facilities_section,
            cards,
            why_choose,
            footer,
            page,
        }
    }

    pub fn nav_links(&self) -> Vec<NodeId> {
        self.page.query_all(".nav-menu a")
    }

    pub fn active_links(&self) -> Vec<NodeId> {
        self.nav_links()
            .into_iter()
            .filter(|l| self.page.has_class(l, "active"))
            .collect()
    }
}

impl Default for School {
    fn default() -> Self {
        School::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_descendants_and_lists() {
        let school = School::new();
        let page = &school.page;

        assert_eq!(page.query_all(".nav-menu a").len(), 12);
        assert_eq!(page.query_all(".dropdown-menu a").len(), 5);
        assert_eq!(page.query(".nav-menu .dropdown a"), Some(school.about));
        assert_eq!(
            page.query_all(".facilities-section, .why-choose-section").len(),
            2
        );
        assert_eq!(page.by_id("phone"), Some(school.phone));
        assert_eq!(page.query("footer"), Some(school.footer));
        assert_eq!(
            page.closest(&school.photo_gallery, ".dropdown"),
            Some(school.gallery_dropdown)
        );
        assert_eq!(page.closest(&school.footer, ".dropdown"), None);
    }

    #[test]
    fn timers_fire_in_due_order_and_cancel_on_drop() {
        let page = FakePage::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let log = log.clone();
            page.set_timeout(300, Box::new(move || log.borrow_mut().push("a")))
        };
        let _b = {
            let log = log.clone();
            page.set_timeout(100, Box::new(move || log.borrow_mut().push("b")))
        };
        let c = {
            let log = log.clone();
            page.set_timeout(200, Box::new(move || log.borrow_mut().push("c")))
        };
        drop(c);

        page.advance(250);
        assert_eq!(*log.borrow(), vec!["b"]);

        page.advance(100);
        assert_eq!(*log.borrow(), vec!["b", "a"]);
        assert_eq!(page.now(), 350);
        drop(a);
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn clicks_bubble_to_ancestors_and_document() {
        let school = School::new();
        let page = &school.page;
        let seen = Rc::new(RefCell::new(Vec::new()));

        let record = |label: &'static str| {
            let seen = seen.clone();
            Rc::new(move |_: &Event<NodeId>| seen.borrow_mut().push(label)) as Handler<NodeId>
        };

        let _l1 = page.listen(&Target::Node(school.home), EventKind::Click, record("link"));
        let _l2 = page.listen(&Target::Node(school.nav_menu), EventKind::Click, record("menu"));
        let _l3 = page.listen(&Target::Document, EventKind::Click, record("document"));
        let _l4 = page.listen(&Target::Node(school.home), EventKind::MouseEnter, record("hover"));

        page.click(school.home);
        assert_eq!(*seen.borrow(), vec!["link", "menu", "document"]);

        page.hover(school.home);
        page.hover(school.nav_menu);
        assert_eq!(seen.borrow().last(), Some(&"hover"));
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn removed_nodes_drop_out_of_queries() {
        let page = FakePage::new();
        let body = page.body_id();
        let node = page.add(body, "div.custom-alert-modal");

        assert_eq!(page.count(".custom-alert-modal"), 1);
        page.remove(&node);
        assert_eq!(page.count(".custom-alert-modal"), 0);
        assert!(!page.is_attached(node));
    }
}
