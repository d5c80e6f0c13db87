//! Hierarchical pointer-event dispatch.
//!
//! Drawable regions form a tree of [`EventNode`]s; insertion order of
//! children is painter's order (back to front). Dispatch walks children in
//! reverse insertion order, depth first, and stops at the first node whose
//! region claims the event — the visually topmost figure wins without any
//! global z-index bookkeeping.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use tracing::trace;

use crate::core::Coordinate;
use crate::figure::FigureTemplate;

/// Pointer/touch event kinds routed through the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    MouseDown,
    MouseUp,
    MouseMove,
    MouseClick,
    MouseDoubleClick,
    MouseRightClick,
    MouseEnter,
    MouseLeave,
    PressedMouseMove,
    TouchStart,
    TouchMove,
    TouchEnd,
    Tap,
    LongTap,
}

/// Pointer payload in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseTouchEvent {
    pub x: f64,
    pub y: f64,
}

impl MouseTouchEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

pub type EventCallback = Box<dyn FnMut(&MouseTouchEvent, Option<f64>) -> bool>;

/// Geometric claim of a node.
enum HitRegion {
    /// Composite node: hit when any descendant is hit.
    Descendants,
    /// Leaf node with a concrete geometric test.
    Test(Box<dyn Fn(Coordinate) -> bool>),
}

/// One drawable region in the dispatch tree.
///
/// A node exclusively owns its children; identity is the unit of callback
/// registration and composition.
pub struct EventNode {
    children: Vec<EventNode>,
    callbacks: HashMap<EventName, EventCallback>,
    region: HitRegion,
}

impl EventNode {
    /// Composite node whose hit area is the union of its children.
    #[must_use]
    pub fn group() -> Self {
        Self {
            children: Vec::new(),
            callbacks: HashMap::new(),
            region: HitRegion::Descendants,
        }
    }

    /// Leaf node with an explicit geometric hit test.
    #[must_use]
    pub fn with_region(test: impl Fn(Coordinate) -> bool + 'static) -> Self {
        Self {
            children: Vec::new(),
            callbacks: HashMap::new(),
            region: HitRegion::Test(Box::new(test)),
        }
    }

    /// Leaf node whose hit area is a registered figure evaluated over the
    /// given attrs/styles.
    #[must_use]
    pub fn figure_node(template: &FigureTemplate, attrs: Value, styles: Value) -> Self {
        let template = template.clone();
        Self::with_region(move |coordinate| template.check_event_on(coordinate, &attrs, &styles))
    }

    /// Registers `callback` for `name`, replacing any previous one.
    pub fn register_event(
        &mut self,
        name: EventName,
        callback: impl FnMut(&MouseTouchEvent, Option<f64>) -> bool + 'static,
    ) -> &mut Self {
        self.callbacks.insert(name, Box::new(callback));
        self
    }

    /// Appends a child on top of the existing ones (painter's order).
    pub fn add_child(&mut self, child: EventNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Releases all children; callback registrations stay untouched.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    #[must_use]
    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Whether the event falls on this node's region.
    ///
    /// Composite nodes inherit their children's geometry; leaves run their
    /// own test.
    #[must_use]
    pub fn check_event_on(&self, event: &MouseTouchEvent) -> bool {
        match &self.region {
            HitRegion::Descendants => self
                .children
                .iter()
                .any(|child| child.check_event_on(event)),
            HitRegion::Test(test) => test(event.coordinate()),
        }
    }

    fn on_event(&mut self, name: EventName, event: &MouseTouchEvent, extra: Option<f64>) -> bool {
        if !self.callbacks.contains_key(&name) || !self.check_event_on(event) {
            return false;
        }
        match self.callbacks.get_mut(&name) {
            Some(callback) => callback(event, extra),
            None => false,
        }
    }

    /// Routes `event` to the topmost matching region.
    ///
    /// Children are visited in reverse insertion order, depth first; the
    /// first consumer stops the walk. Falls back to this node's own callback
    /// when no child consumes the event.
    pub fn dispatch_event(
        &mut self,
        name: EventName,
        event: &MouseTouchEvent,
        extra: Option<f64>,
    ) -> bool {
        for child in self.children.iter_mut().rev() {
            if child.dispatch_event(name, event, extra) {
                trace!(?name, "event consumed by child node");
                return true;
            }
        }
        self.on_event(name, event, extra)
    }
}

impl Default for EventNode {
    fn default() -> Self {
        Self::group()
    }
}

impl fmt::Debug for EventNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventNode")
            .field("children", &self.children.len())
            .field("callbacks", &self.callbacks.len())
            .field(
                "region",
                &match self.region {
                    HitRegion::Descendants => "descendants",
                    HitRegion::Test(_) => "test",
                },
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{EventName, EventNode, MouseTouchEvent};

    #[test]
    fn leaf_region_gates_own_callback() {
        let mut node = EventNode::with_region(|coordinate| coordinate.x < 10.0);
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        node.register_event(EventName::MouseClick, move |_, _| {
            *counter.borrow_mut() += 1;
            true
        });

        assert!(node.dispatch_event(
            EventName::MouseClick,
            &MouseTouchEvent::new(5.0, 0.0),
            None
        ));
        assert!(!node.dispatch_event(
            EventName::MouseClick,
            &MouseTouchEvent::new(50.0, 0.0),
            None
        ));
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn register_event_replaces_previous_callback() {
        let mut node = EventNode::with_region(|_| true);
        let hits = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&hits);
        node.register_event(EventName::MouseClick, move |_, _| {
            first.borrow_mut().push("first");
            true
        });
        let second = Rc::clone(&hits);
        node.register_event(EventName::MouseClick, move |_, _| {
            second.borrow_mut().push("second");
            true
        });

        node.dispatch_event(EventName::MouseClick, &MouseTouchEvent::new(0.0, 0.0), None);
        assert_eq!(*hits.borrow(), vec!["second"]);
    }

    #[test]
    fn clear_keeps_callback_registrations() {
        let mut node = EventNode::with_region(|_| true);
        let fired = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&fired);
        node.register_event(EventName::MouseClick, move |_, _| {
            *flag.borrow_mut() = true;
            true
        });
        node.add_child(EventNode::group());
        node.clear();

        assert_eq!(node.children_len(), 0);
        assert!(node.dispatch_event(
            EventName::MouseClick,
            &MouseTouchEvent::new(0.0, 0.0),
            None
        ));
        assert!(*fired.borrow());
    }
}
