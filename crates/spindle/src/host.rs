//! What the wheel needs from whoever embeds it.

use crate::layout::{CameraTransform, Projection, WheelLayout};
use std::ops::ControlFlow;

/// Deferred work the wheel asks its host to run later via [`crate::Wheel::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// One animation tick of the motion driver.
    Frame,
    /// End of the window in which a drag might still turn into a fling.
    EndSelectionSuppression,
}

pub trait Host {
    /// Monotonic time in milliseconds.
    fn now_ms(&self) -> u64;

    fn request_redraw(&mut self);

    fn schedule_next_frame(&mut self, task: Task);

    fn schedule_after(&mut self, delay_ms: u64, task: Task);

    /// Drops a pending `task`. Must be a no-op when nothing is pending.
    fn cancel_scheduled(&mut self, task: Task);

    fn selection_changed(&mut self, index: usize);

    fn unselected(&mut self);

    /// Reported when a tap lands on an item that should be activated.
    fn item_clicked(&mut self, _index: usize) {}

    /// Reported when an item is held down without moving.
    fn item_long_pressed(&mut self, _index: usize) {}

    /// Called after every animated delta. Returning `Break` ends the running
    /// animation within this tick and settles the wheel.
    fn frame_applied(&mut self, _layout: &WheelLayout) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Renders item content; called back-to-front by [`crate::Wheel::draw`].
pub trait ItemPainter {
    type Error;

    fn paint(
        &mut self,
        index: usize,
        projection: Projection,
        camera: &CameraTransform,
        selected: bool,
    ) -> Result<(), Self::Error>;
}
