use crate::host::{Host, Task};
use crate::layout::WheelLayout;
use std::ops::ControlFlow;

/// Host with a hand-driven clock that records every call.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub now: u64,
    pub redraws: usize,
    pub frames_scheduled: usize,
    pub pending_frame: bool,
    pub delayed: Vec<(u64, Task)>,
    pub cancelled: Vec<Task>,
    pub selections: Vec<usize>,
    pub unselected: usize,
    pub clicks: Vec<usize>,
    pub long_presses: Vec<usize>,
    pub abort_after_frames: Option<usize>,
    pub frames_applied: usize,
}

impl FakeHost {
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Consumes the pending frame request, if any.
    pub fn take_frame(&mut self) -> bool {
        std::mem::replace(&mut self.pending_frame, false)
    }

    /// Removes and returns delayed tasks due by now.
    pub fn take_due(&mut self) -> Vec<Task> {
        let now = self.now;
        let (due, pending): (Vec<_>, Vec<_>) = self.delayed.drain(..).partition(|(at, _)| *at <= now);
        self.delayed = pending;
        due.into_iter().map(|(_, task)| task).collect()
    }
}

impl Host for FakeHost {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn schedule_next_frame(&mut self, _task: Task) {
        self.frames_scheduled += 1;
        self.pending_frame = true;
    }

    fn schedule_after(&mut self, delay_ms: u64, task: Task) {
        self.delayed.push((self.now + delay_ms, task));
    }

    fn cancel_scheduled(&mut self, task: Task) {
        self.cancelled.push(task);
        match task {
            Task::Frame => self.pending_frame = false,
            other => self.delayed.retain(|(_, t)| *t != other),
        }
    }

    fn selection_changed(&mut self, index: usize) {
        self.selections.push(index);
    }

    fn unselected(&mut self) {
        self.unselected += 1;
    }

    fn item_clicked(&mut self, index: usize) {
        self.clicks.push(index);
    }

    fn item_long_pressed(&mut self, index: usize) {
        self.long_presses.push(index);
    }

    fn frame_applied(&mut self, _layout: &WheelLayout) -> ControlFlow<()> {
        self.frames_applied += 1;
        match self.abort_after_frames {
            Some(limit) if self.frames_applied >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
