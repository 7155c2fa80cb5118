use crate::event::RedrawObserver;

/// The single "state changed, redraw now" notification.
///
/// Observers are called synchronously on every request. The dirty flag lets a
/// frame loop poll instead: it stays set until [`RedrawSignal::take`].
#[derive(Default)]
pub struct RedrawSignal {
    observers: Vec<Box<dyn RedrawObserver>>,
    dirty: bool,
    requests: u64,
}

impl std::fmt::Debug for RedrawSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawSignal")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .field("dirty", &self.dirty)
            .field("requests", &self.requests)
            .finish()
    }
}

impl RedrawSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer to every future request
    pub fn subscribe(&mut self, observer: impl RedrawObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn request(&mut self) {
        self.dirty = true;
        self.requests += 1;
        for observer in &mut self.observers {
            observer.redraw_requested();
        }
    }

    /// Returns whether a redraw was requested since the last call, and resets
    /// the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Total number of requests made so far
    pub fn request_count(&self) -> u64 {
        self.requests
    }
}
