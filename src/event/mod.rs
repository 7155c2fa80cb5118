mod bus;

pub use bus::RedrawSignal;

/// Something that wants to know when the canvas must be redrawn
pub trait RedrawObserver {
    fn redraw_requested(&mut self);
}

impl<F: FnMut()> RedrawObserver for F {
    fn redraw_requested(&mut self) {
        (self)()
    }
}
