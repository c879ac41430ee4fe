use crate::gui::app::AppMsg;
use gtk::prelude::*;
use gtk4 as gtk;
use spindle::{Host, Task};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Delay between animation frames, roughly 60 Hz.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Bridges the wheel to the GTK main loop. Scheduled tasks come back as
/// [`AppMsg::Run`] and are handed to `Wheel::run` by the component.
pub struct GtkHost {
    drawing_area: gtk::DrawingArea,
    input: relm4::Sender<AppMsg>,
    pending: Rc<RefCell<HashMap<Task, glib::SourceId>>>,
}

impl GtkHost {
    pub fn new(drawing_area: gtk::DrawingArea, input: relm4::Sender<AppMsg>) -> Self {
        Self {
            drawing_area,
            input,
            pending: Rc::default(),
        }
    }

    fn schedule(&mut self, delay_ms: u64, task: Task) {
        let pending = Rc::clone(&self.pending);
        let input = self.input.clone();
        let source = glib::timeout_add_local_once(Duration::from_millis(delay_ms), move || {
            // a fired source is gone; forget it before anyone tries to remove it
            pending.borrow_mut().remove(&task);
            input.emit(AppMsg::Run(task));
        });
        if let Some(stale) = self.pending.borrow_mut().insert(task, source) {
            stale.remove();
        }
    }
}

impl Host for GtkHost {
    fn now_ms(&self) -> u64 {
        u64::try_from(glib::monotonic_time() / 1000).unwrap_or_default()
    }

    fn request_redraw(&mut self) {
        self.drawing_area.queue_draw();
    }

    fn schedule_next_frame(&mut self, task: Task) {
        self.schedule(FRAME_INTERVAL_MS, task);
    }

    fn schedule_after(&mut self, delay_ms: u64, task: Task) {
        self.schedule(delay_ms, task);
    }

    fn cancel_scheduled(&mut self, task: Task) {
        if let Some(source) = self.pending.borrow_mut().remove(&task) {
            source.remove();
        }
    }

    fn selection_changed(&mut self, index: usize) {
        log::debug!("selection changed to {}", index);
        self.input.emit(AppMsg::Selected(Some(index)));
    }

    fn unselected(&mut self) {
        self.input.emit(AppMsg::Selected(None));
    }

    fn item_clicked(&mut self, index: usize) {
        self.input.emit(AppMsg::Activate(index));
    }

    fn item_long_pressed(&mut self, index: usize) {
        self.input.emit(AppMsg::LongPressed(index));
    }
}
