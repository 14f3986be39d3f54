use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use tracing::{error, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use behavior::dom::{Event, EventKind, Handler, ObserveOptions, Page, Rect, Target};

// browser page
//
// the real implementation of the behavior layer's Page trait.  everything that can fail
// on the js side (bad selectors, missing style declarations) degrades to "not found" or
// a silently skipped write, which is exactly what the controllers expect
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

        Ok(WebPage { window, document })
    }

    fn event_target<'a>(&'a self, target: &'a Target<Element>) -> &'a EventTarget {
        match target {
            Target::Node(node) => node.as_ref(),
            Target::Document => self.document.as_ref(),
            Target::Window => self.window.as_ref(),
        }
    }
}

// copy over just the fields the handlers look at
fn translate(raw: &web_sys::Event) -> Event<Element> {
    let target = raw.target().and_then(|t| t.dyn_into::<Element>().ok());
    let mut evt = Event::new(target);

    if let Some(mouse) = raw.dyn_ref::<MouseEvent>() {
        evt = evt.at(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
    }
    if let Some(keyboard) = raw.dyn_ref::<KeyboardEvent>() {
        evt = evt.with_key(keyboard.key());
    }
    evt
}

// animation frame request; dropping it cancels the frame if it has not run yet
pub struct Frame {
    window: Window,
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Frame {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

// intersection observer plus the closure it calls back into; dropping it disconnects
pub struct Observer {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

impl Page for WebPage {
    type Node = Element;
    type Listener = EventListener;
    type Timer = Timeout;
    type Frame = Frame;
    type Observer = Observer;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };

        (0..list.length())
            .filter_map(|idx| list.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_in(&self, node: &Element, selector: &str) -> Option<Element> {
        node.query_selector(selector).ok().flatten()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn style(&self, node: &Element, property: &str) -> String {
        node.dyn_ref::<HtmlElement>()
            .and_then(|html| html.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();

        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn rect(&self, node: &Element) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    // an unreadable width is treated as desktop
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::MAX)
    }

    fn listen(
        &self,
        target: &Target<Element>,
        kind: EventKind,
        handler: Handler<Element>,
    ) -> EventListener {
        // gloo listeners are passive unless asked otherwise, and passive listeners cannot
        // prevent the default action
        let options = if kind.cancelable() {
            EventListenerOptions::enable_prevent_default()
        } else {
            EventListenerOptions::default()
        };

        EventListener::new_with_options(
            self.event_target(target),
            kind.as_str(),
            options,
            move |raw| {
                let evt = translate(raw);
                handler(&evt);
                if evt.default_prevented() {
                    raw.prevent_default();
                }
            },
        )
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Frame {
        let closure = Closure::once(callback);

        let id = match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(err) => {
                error!("failed to request animation frame: {err:?}");
                None
            }
        };

        Frame {
            window: self.window.clone(),
            id,
            _callback: closure,
        }
    }

    fn observe(
        &self,
        nodes: &[Element],
        options: &ObserveOptions,
        on_enter: Rc<dyn Fn(&Element)>,
    ) -> Observer {
        let callback = {
            let on_enter = on_enter.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            on_enter(&entry.target());
                        }
                    }
                },
            )
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for node in nodes {
                    observer.observe(node);
                }
                Observer {
                    observer: Some(observer),
                    _callback: Some(callback),
                }
            }
            // without an observer nothing would ever be revealed, so show everything now
            Err(err) => {
                warn!("intersection observer unavailable ({err:?}), revealing immediately");
                for node in nodes {
                    on_enter(node);
                }
                Observer {
                    observer: None,
                    _callback: None,
                }
            }
        }
    }

    fn unobserve(&self, observer: &Observer, node: &Element) {
        if let Some(observer) = &observer.observer {
            observer.unobserve(node);
        }
    }
}
