use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One externally owned "block" condition. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct BlockSignal(Rc<Cell<bool>>);

impl BlockSignal {
    pub fn set(&self, active: bool) {
        self.0.set(active);
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Default)]
struct Signals {
    movement: RefCell<Vec<BlockSignal>>,
    zoom: RefCell<Vec<BlockSignal>>,
    zoom_suppressed: Cell<bool>,
}

/// Blocking conditions shared between the rig and whoever may veto its movement or zoom.
///
/// Cloning is cheap; all clones observe the same state. The rig only ever reads.
#[derive(Debug, Clone, Default)]
pub struct BlockingContext {
    signals: Rc<Signals>,
}

impl BlockingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new condition that freezes rig movement while active.
    pub fn add_movement_signal(&self) -> BlockSignal {
        let signal = BlockSignal::default();
        self.signals.movement.borrow_mut().push(signal.clone());
        signal
    }

    /// Register a new condition that skips zoom updates while active.
    pub fn add_zoom_signal(&self) -> BlockSignal {
        let signal = BlockSignal::default();
        self.signals.zoom.borrow_mut().push(signal.clone());
        signal
    }

    /// Global switch that disables all zoom updates.
    pub fn set_zoom_suppressed(&self, suppressed: bool) {
        self.signals.zoom_suppressed.set(suppressed);
    }

    pub fn zoom_suppressed(&self) -> bool {
        self.signals.zoom_suppressed.get()
    }

    pub fn movement_blocked(&self) -> bool {
        self.signals.movement.borrow().iter().any(BlockSignal::is_active)
    }

    pub fn zoom_blocked(&self) -> bool {
        self.zoom_suppressed() || self.signals.zoom.borrow().iter().any(BlockSignal::is_active)
    }
}
