use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::{debug, info};

use crate::{
    config::DropdownConfig,
    dom::{Bindings, Event, EventKind, Page, Target, is_narrow},
};

pub const DROPDOWN: &str = ".dropdown";
pub const DROPDOWN_MENU: &str = ".dropdown-menu";
pub const OPEN_CLASS: &str = "open";

const SHOWN: &[(&str, &str)] = &[
    ("opacity", "1"),
    ("visibility", "visible"),
    ("transform", "translateY(0)"),
    ("pointer-events", "auto"),
];

const HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("visibility", "hidden"),
    ("transform", "translateY(-10px)"),
    ("pointer-events", "none"),
];

// one flyout: the container, the link that opens it, and the menu itself.  the only
// program state is the pending delayed hide; open/closed lives on the menu's class
struct Dropdown<P: Page> {
    root: P::Node,
    trigger: Option<P::Node>,
    menu: Option<P::Node>,
    hide_timer: RefCell<Option<P::Timer>>,
}

// dropdown controller
//
// the set of dropdowns is discovered once; markup added later is not picked up.
// desktop vs mobile behavior is decided per event from the current viewport width
pub struct Dropdowns<P: Page> {
    page: P,
    breakpoint: f64,
    close_delay: u32,
    items: Vec<Dropdown<P>>,
    this: Weak<Dropdowns<P>>,
}

impl<P: Page> Dropdowns<P> {
    pub fn new(page: P, breakpoint: f64, config: &DropdownConfig) -> Rc<Self> {
        let items: Vec<Dropdown<P>> = page
            .query_all(DROPDOWN)
            .into_iter()
            .map(|root| Dropdown {
                trigger: page.query_in(&root, "a"),
                menu: page.query_in(&root, DROPDOWN_MENU),
                root,
                hide_timer: RefCell::new(None),
            })
            .collect();

        info!("found {} dropdowns", items.len());

        Rc::new_cyclic(|this| Dropdowns {
            page,
            breakpoint,
            close_delay: config.close_delay,
            items,
            this: this.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.items
            .get(idx)
            .and_then(|d| d.menu.as_ref())
            .is_some_and(|menu| self.page.has_class(menu, OPEN_CLASS))
    }

    pub fn open_count(&self) -> usize {
        (0..self.items.len()).filter(|idx| self.is_open(*idx)).count()
    }

    // index of the dropdown whose trigger link is `node`
    pub fn trigger_index(&self, node: &P::Node) -> Option<usize> {
        self.items
            .iter()
            .position(|d| d.trigger.as_ref() == Some(node))
    }

    pub fn show(&self, idx: usize) {
        let Some(dropdown) = self.items.get(idx) else {
            return;
        };
        dropdown.hide_timer.borrow_mut().take();

        if let Some(menu) = &dropdown.menu {
            self.page.add_class(menu, OPEN_CLASS);
            self.apply(menu, SHOWN);
        }
    }

    pub fn hide(&self, idx: usize) {
        let Some(dropdown) = self.items.get(idx) else {
            return;
        };
        dropdown.hide_timer.borrow_mut().take();

        if let Some(menu) = &dropdown.menu {
            self.page.remove_class(menu, OPEN_CLASS);
            self.apply(menu, HIDDEN);
        }
    }

    pub fn close_all(&self) {
        for idx in 0..self.items.len() {
            self.hide(idx);
        }
    }

    pub fn hover_enter(&self, idx: usize) {
        if is_narrow(&self.page, self.breakpoint) {
            return;
        }
        self.show(idx);
    }

    // re-entering before the delay runs out cancels the hide (see show)
    pub fn hover_leave(&self, idx: usize) {
        if is_narrow(&self.page, self.breakpoint) {
            return;
        }
        let Some(dropdown) = self.items.get(idx) else {
            return;
        };

        let this = self.this.clone();
        let timer = self.page.set_timeout(
            self.close_delay,
            Box::new(move || {
                if let Some(this) = this.upgrade() {
                    this.hide(idx);
                }
            }),
        );
        *dropdown.hide_timer.borrow_mut() = Some(timer);
    }

    // mobile tap on a trigger: toggle, closing every other dropdown when opening
    pub fn tap(&self, idx: usize, evt: &Event<P::Node>) {
        if !is_narrow(&self.page, self.breakpoint) {
            return;
        }
        evt.prevent_default();

        if self.is_open(idx) {
            self.hide(idx);
            return;
        }

        for other in (0..self.items.len()).filter(|other| *other != idx) {
            self.hide(other);
        }
        self.show(idx);
    }

    fn apply(&self, menu: &P::Node, styles: &[(&str, &str)]) {
        for (property, value) in styles {
            self.page.set_style(menu, property, value);
        }
    }

    pub fn bind(self: &Rc<Self>, bindings: &mut Bindings<P>) {
        for (idx, dropdown) in self.items.iter().enumerate() {
            let this = Rc::downgrade(self);
            bindings.on(
                Target::Node(dropdown.root.clone()),
                EventKind::MouseEnter,
                move |_| {
                    if let Some(this) = this.upgrade() {
                        this.hover_enter(idx);
                    }
                },
            );

            let this = Rc::downgrade(self);
            bindings.on(
                Target::Node(dropdown.root.clone()),
                EventKind::MouseLeave,
                move |_| {
                    if let Some(this) = this.upgrade() {
                        this.hover_leave(idx);
                    }
                },
            );

            match &dropdown.trigger {
                Some(trigger) => {
                    let this = Rc::downgrade(self);
                    bindings.on(Target::Node(trigger.clone()), EventKind::Click, move |evt| {
                        if let Some(this) = this.upgrade() {
                            this.tap(idx, evt);
                        }
                    });
                }
                None => debug!("dropdown {idx} has no trigger link"),
            }
        }

        let this = Rc::downgrade(self);
        bindings.on(Target::Document, EventKind::Click, move |evt| {
            let Some(this) = this.upgrade() else {
                return;
            };
            let inside = evt
                .target
                .as_ref()
                .and_then(|t| this.page.closest(t, DROPDOWN))
                .is_some();
            if !inside {
                this.close_all();
            }
        });

        let this = Rc::downgrade(self);
        bindings.on(Target::Document, EventKind::KeyDown, move |evt| {
            if evt.key.as_deref() != Some("Escape") {
                return;
            }
            if let Some(this) = this.upgrade() {
                this.close_all();
            }
        });
    }
}
