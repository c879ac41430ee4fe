//! Per-wheel controller. Owns the layout, the motion driver and the
//! selection, and moves between three phases:
//!
//! - `Idle`: nothing scheduled.
//! - `Animating`: a fling or programmatic rotation is being driven.
//! - `Settling`: the resolver is rotating the nearest item into the zero slot.
//!
//! A finished drive always ends in `settle`, which either commits the
//! selection (back to `Idle`) or starts a snap rotation (`Settling`).

use crate::angle;
use crate::config::WheelConfig;
use crate::driver::{MotionDriver, Tick};
use crate::error::WheelError;
use crate::host::{Host, ItemPainter, Task};
use crate::layout::{Point, Projection, Size, Viewport, WheelLayout};
use crate::selection;

/// How long after the first drag delta a gesture may still become a fling.
pub const SCROLL_TO_FLING_UNCERTAINTY_MS: u64 = 250;
/// Scroll samples move in whole degrees; snaps smaller than this land directly.
const MIN_ANIMATED_SNAP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Animating,
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug)]
pub struct Wheel {
    layout: WheelLayout,
    driver: MotionDriver,
    config: WheelConfig,
    phase: Phase,
    selected: Option<usize>,
    last_notified: Option<usize>,
    suppress_selection_changed: bool,
    first_drag: bool,
    down_index: Option<usize>,
    snapping: bool,
}

impl Wheel {
    pub fn new(config: WheelConfig) -> Self {
        let viewport = Viewport {
            gravity: config.gravity,
            padding: config.padding,
            ..Default::default()
        };
        Self {
            layout: WheelLayout::new(viewport),
            driver: MotionDriver::new(config.animation_duration_ms),
            config,
            phase: Phase::Idle,
            selected: None,
            last_notified: None,
            suppress_selection_changed: false,
            first_drag: false,
            down_index: None,
            snapping: false,
        }
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item_count(&self) -> usize {
        self.layout.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn current_angle_of(&self, index: usize) -> Option<f64> {
        self.layout.angle_of(index)
    }

    pub fn projection_of(&self, index: usize) -> Option<Projection> {
        self.layout.projection_of(index)
    }

    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.layout.item_at(point)
    }

    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.config.animation_duration_ms = duration_ms;
        self.driver.set_animation_duration(duration_ms);
    }

    pub fn set_callback_during_fling(&mut self, callback: bool) {
        self.config.callback_during_fling = callback;
    }

    pub fn set_callback_on_unselected_item_click(&mut self, callback: bool) {
        self.config.callback_on_unselected_item_click = callback;
    }

    pub fn set_config(&mut self, config: WheelConfig, host: &mut impl Host) {
        self.driver.set_animation_duration(config.animation_duration_ms);
        let viewport = Viewport {
            gravity: config.gravity,
            padding: config.padding,
            ..*self.layout.viewport()
        };
        self.config = config;
        self.layout.set_viewport(viewport);
        host.request_redraw();
    }

    pub fn resize(&mut self, width: f64, height: f64, item: Size, host: &mut impl Host) {
        let viewport = Viewport {
            width,
            height,
            item,
            ..*self.layout.viewport()
        };
        if viewport != *self.layout.viewport() {
            self.layout.set_viewport(viewport);
            host.request_redraw();
        }
    }

    /// Full layout pass after the item collection changed size. The current
    /// selection is kept when it still exists and clamped otherwise.
    pub fn set_item_count(&mut self, count: usize, host: &mut impl Host) {
        if count == self.layout.len() {
            return;
        }
        log::debug!("item count {} -> {count}", self.layout.len());

        if count == 0 {
            self.layout.rebuild(0, 0);
            self.selected = None;
            self.down_index = None;
            if self.last_notified.take().is_some() {
                host.unselected();
            }
            host.request_redraw();
            return;
        }

        let selected = self.selected.map_or(0, |s| s.min(count - 1));
        self.layout.rebuild(count, selected);
        self.down_index = self.down_index.filter(|&i| i < count);
        self.commit(selected, host);
    }

    /// Re-lays the ring around `index` without animating.
    pub fn select(&mut self, index: usize, host: &mut impl Host) -> Result<(), WheelError> {
        self.check_index(index)?;
        self.driver.stop(host);
        self.layout.rebuild(self.layout.len(), index);
        self.commit(index, host);
        Ok(())
    }

    /// Animates the shortest rotation that brings `index` to the zero slot.
    /// Returns `false` when the item is already there.
    pub fn scroll_to_index(&mut self, index: usize, host: &mut impl Host) -> Result<bool, WheelError> {
        self.check_index(index)?;
        Ok(self.rotate_into_place(index, host))
    }

    /// Brings the neighbour of the current selection to the zero slot.
    pub fn step(&mut self, direction: Direction, host: &mut impl Host) -> bool {
        let count = self.layout.len();
        let Some(current) = self.selected.filter(|&s| s < count) else {
            return false;
        };
        let next = match direction {
            Direction::Next => (current + 1) % count,
            Direction::Previous => (current + count - 1) % count,
        };
        self.rotate_into_place(next, host)
    }

    /// Cancels any running drive. With `snap_after` the nearest item is then
    /// rotated into place.
    pub fn stop(&mut self, snap_after: bool, host: &mut impl Host) {
        self.driver.stop(host);
        if snap_after {
            self.settle(host);
        } else {
            self.snapping = false;
            self.phase = Phase::Idle;
        }
    }

    /// Runs a task the host scheduled on the wheel's behalf.
    pub fn run(&mut self, task: Task, host: &mut impl Host) {
        match task {
            Task::Frame => match self.driver.tick(&mut self.layout, host) {
                Tick::Idle => {}
                Tick::Continue => self.report_passing(host),
                Tick::Finished => self.stop(true, host),
            },
            Task::EndSelectionSuppression => {
                self.suppress_selection_changed = false;
                self.notify_selection(host);
            }
        }
    }

    /// Finger down: halts the wheel in place and remembers the touched item.
    pub fn on_down(&mut self, point: Point, host: &mut impl Host) -> Option<usize> {
        self.stop(false, host);
        self.first_drag = true;
        self.down_index = self.layout.item_at(point);
        self.down_index
    }

    pub fn on_drag_delta(&mut self, delta: f64, host: &mut impl Host) {
        if self.config.callback_during_fling {
            self.suppress_selection_changed = false;
        } else if self.first_drag {
            // not yet known whether this drag ends in a fling
            self.suppress_selection_changed = true;
            host.schedule_after(SCROLL_TO_FLING_UNCERTAINTY_MS, Task::EndSelectionSuppression);
        }
        self.first_drag = false;

        if self.layout.is_empty() || delta == 0.0 {
            return;
        }
        self.layout.apply_delta(delta);
        host.request_redraw();
        self.report_passing(host);
    }

    pub fn on_fling(&mut self, velocity: f64, host: &mut impl Host) {
        if !self.config.callback_during_fling {
            host.cancel_scheduled(Task::EndSelectionSuppression);
            self.suppress_selection_changed = true;
        }
        self.start_fling(velocity, host);
    }

    /// Starts a decelerating rotation without touching notification state.
    pub fn start_fling(&mut self, velocity: f64, host: &mut impl Host) -> bool {
        if self.layout.is_empty() {
            return false;
        }
        self.snapping = false;
        let started = self.driver.start_by_velocity(velocity, host);
        if started {
            self.phase = Phase::Animating;
        }
        started
    }

    /// Finger up or gesture cancelled: settle unless a fling took over.
    pub fn on_up(&mut self, host: &mut impl Host) {
        if !self.driver.is_active() {
            self.settle(host);
        }
    }

    /// Tap on the item remembered by [`Wheel::on_down`].
    pub fn on_tap(&mut self, host: &mut impl Host) -> bool {
        let Some(index) = self.down_index.filter(|&i| i < self.layout.len()) else {
            return false;
        };
        if self.config.callback_on_unselected_item_click || self.selected == Some(index) {
            host.item_clicked(index);
        } else {
            self.rotate_into_place(index, host);
        }
        true
    }

    /// Long press on the item remembered by [`Wheel::on_down`]. Consumes the
    /// press, so the release that follows is not also a tap.
    pub fn on_long_press(&mut self, host: &mut impl Host) -> bool {
        let Some(index) = self.down_index.take().filter(|&i| i < self.layout.len()) else {
            return false;
        };
        host.item_long_pressed(index);
        true
    }

    /// Hands every item to `painter`, back-most first.
    pub fn draw<P: ItemPainter>(&self, painter: &mut P) -> Result<(), P::Error> {
        for index in self.layout.draw_order() {
            let (Some(projection), Some(camera)) = (
                self.layout.projection_of(index),
                self.layout.camera_transform(index),
            ) else {
                continue;
            };
            painter.paint(index, projection, &camera, self.selected == Some(index))?;
        }
        Ok(())
    }

    /// Starts the shortest rotation bringing `index` to the zero slot,
    /// unless it already rests there.
    fn rotate_into_place(&mut self, index: usize, host: &mut impl Host) -> bool {
        let Some(angle) = self.layout.angle_of(index) else {
            return false;
        };
        let resolution = selection::Resolution {
            index,
            rotation: angle::minimal_rotation(angle),
        };
        if resolution.is_in_place() {
            return false;
        }
        self.start_rotation(resolution.rotation, host)
    }

    fn start_rotation(&mut self, rotation: f64, host: &mut impl Host) -> bool {
        self.snapping = false;
        let started = self.driver.start_by_distance(rotation, host);
        if started {
            self.phase = Phase::Animating;
        }
        started
    }

    fn settle(&mut self, host: &mut impl Host) {
        let Some(resolution) = selection::resolve(&self.layout) else {
            self.phase = Phase::Idle;
            return;
        };

        // a finished snap leaves at most a rounding step behind
        let animate = !self.snapping && resolution.rotation.abs() >= MIN_ANIMATED_SNAP;
        if animate && self.driver.start_by_distance(resolution.rotation, host) {
            log::debug!(
                "settling item {} by {:.2}",
                resolution.index,
                resolution.rotation
            );
            self.snapping = true;
            self.phase = Phase::Settling;
            return;
        }

        if resolution.rotation != 0.0 {
            self.layout.apply_delta(resolution.rotation);
        }
        self.commit(resolution.index, host);
    }

    fn commit(&mut self, index: usize, host: &mut impl Host) {
        log::debug!("selected item {index}");
        self.selected = Some(index);
        if !self.driver.is_active() {
            self.phase = Phase::Idle;
        }
        self.snapping = false;
        // selection changes held back during a fling are reported now
        self.suppress_selection_changed = false;
        self.notify_selection(host);
        host.request_redraw();
    }

    fn notify_selection(&mut self, host: &mut impl Host) {
        if self.suppress_selection_changed {
            return;
        }
        if let Some(selected) = self.selected
            && self.last_notified != Some(selected)
        {
            self.last_notified = Some(selected);
            host.selection_changed(selected);
        }
    }

    fn report_passing(&mut self, host: &mut impl Host) {
        if !self.config.callback_during_fling || self.suppress_selection_changed {
            return;
        }
        if let Some(item) = selection::nearest_to_zero(self.layout.items())
            && self.last_notified != Some(item.index())
        {
            self.last_notified = Some(item.index());
            host.selection_changed(item.index());
        }
    }

    fn check_index(&self, index: usize) -> Result<(), WheelError> {
        let count = self.layout.len();
        if index < count {
            Ok(())
        } else {
            Err(WheelError::IndexOutOfRange { index, count })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CameraTransform;
    use crate::testing::FakeHost;

    const FRONT: Point = Point { x: 400.0, y: 260.0 };
    const LEFT: Point = Point { x: 160.0, y: 180.0 };

    fn wheel(count: usize) -> (Wheel, FakeHost) {
        let mut host = FakeHost::default();
        let mut wheel = Wheel::new(WheelConfig::default());
        wheel.resize(800.0, 400.0, Size::new(100.0, 120.0), &mut host);
        wheel.set_item_count(count, &mut host);
        (wheel, host)
    }

    /// Runs frames and due timers until nothing is scheduled.
    fn run_until_idle(wheel: &mut Wheel, host: &mut FakeHost) -> usize {
        let mut frames = 0;
        while host.take_frame() {
            frames += 1;
            assert!(frames < 1_000, "wheel never settled");
            host.advance(16);
            for task in host.take_due() {
                wheel.run(task, host);
            }
            wheel.run(Task::Frame, host);
        }
        frames
    }

    fn distance_from_zero(wheel: &Wheel, index: usize) -> f64 {
        angle::tie_break(wheel.current_angle_of(index).unwrap())
    }

    #[test]
    fn initial_layout_selects_first_item() {
        let (wheel, host) = wheel(5);
        assert_eq!(wheel.selected_index(), Some(0));
        assert_eq!(host.selections, vec![0]);
        let angles: Vec<f64> = (0..5).map(|i| wheel.current_angle_of(i).unwrap()).collect();
        assert_eq!(angles, vec![0.0, 72.0, 144.0, 216.0, 288.0]);
    }

    #[test]
    fn settle_on_aligned_ring_needs_no_rotation() {
        let (mut wheel, mut host) = wheel(5);
        wheel.stop(true, &mut host);
        assert_eq!(host.frames_scheduled, 0);
        assert_eq!(wheel.phase(), Phase::Idle);
        assert_eq!(wheel.selected_index(), Some(0));
        assert_eq!(host.selections, vec![0]);
    }

    #[test]
    fn release_after_small_drag_snaps_back() {
        let (mut wheel, mut host) = wheel(4);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(10.0, &mut host);
        assert_eq!(wheel.current_angle_of(0), Some(10.0));

        wheel.on_up(&mut host);
        assert_eq!(wheel.phase(), Phase::Settling);
        run_until_idle(&mut wheel, &mut host);

        assert_eq!(wheel.phase(), Phase::Idle);
        assert_eq!(wheel.current_angle_of(0), Some(0.0));
        assert_eq!(wheel.selected_index(), Some(0));
        assert_eq!(host.selections, vec![0]);
    }

    #[test]
    fn release_past_midpoint_selects_neighbour() {
        let (mut wheel, mut host) = wheel(4);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(-60.0, &mut host);
        wheel.on_up(&mut host);
        run_until_idle(&mut wheel, &mut host);

        assert_eq!(wheel.selected_index(), Some(1));
        assert_eq!(wheel.current_angle_of(1), Some(0.0));
        assert_eq!(host.selections, vec![0, 1]);
    }

    #[test]
    fn fling_settles_with_one_item_at_zero() {
        let (mut wheel, mut host) = wheel(6);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(-12.0, &mut host);
        wheel.on_fling(3_100.0, &mut host);
        wheel.on_up(&mut host);
        assert_eq!(wheel.phase(), Phase::Animating);
        run_until_idle(&mut wheel, &mut host);

        let selected = wheel.selected_index().unwrap();
        assert!(distance_from_zero(&wheel, selected) < selection::SNAP_RESOLUTION);
        let at_zero = (0..6)
            .filter(|&i| distance_from_zero(&wheel, i) < selection::SNAP_RESOLUTION)
            .count();
        assert_eq!(at_zero, 1);
        assert_eq!(host.selections.last(), Some(&selected));
    }

    #[test]
    fn suppressed_fling_reports_only_the_settled_item() {
        let (mut wheel, mut host) = wheel(4);
        wheel.set_callback_during_fling(false);

        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(-60.0, &mut host);
        assert_eq!(host.delayed, vec![(SCROLL_TO_FLING_UNCERTAINTY_MS, Task::EndSelectionSuppression)]);

        wheel.on_fling(1_200.0, &mut host);
        assert!(host.delayed.is_empty());
        run_until_idle(&mut wheel, &mut host);

        let selected = wheel.selected_index().unwrap();
        assert_eq!(host.selections, vec![0, selected]);
    }

    #[test]
    fn ticks_report_items_passing_zero() {
        let (mut wheel, mut host) = wheel(8);
        wheel.start_fling(-9_000.0, &mut host);
        run_until_idle(&mut wheel, &mut host);

        // several items crossed the zero slot on the way
        assert!(host.selections.len() > 3, "{:?}", host.selections);
        assert!(host.selections.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(host.selections.last(), wheel.selected_index().as_ref());
    }

    #[test]
    fn stop_in_place_then_snap_runs_resolver_once() {
        let (mut wheel, mut host) = wheel(4);
        assert_eq!(wheel.scroll_to_index(2, &mut host), Ok(true));
        for _ in 0..5 {
            assert!(host.take_frame());
            host.advance(16);
            wheel.run(Task::Frame, &mut host);
        }
        let angle = wheel.current_angle_of(0).unwrap();
        assert_ne!(angle, 0.0);

        wheel.stop(false, &mut host);
        assert_eq!(wheel.current_angle_of(0), Some(angle));
        assert_eq!(wheel.phase(), Phase::Idle);
        assert!(!host.pending_frame);

        let scheduled = host.frames_scheduled;
        wheel.stop(true, &mut host);
        assert_eq!(host.frames_scheduled, scheduled + 1);
        assert_eq!(wheel.phase(), Phase::Settling);

        run_until_idle(&mut wheel, &mut host);
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut wheel, mut host) = wheel(3);
        wheel.stop(false, &mut host);
        wheel.stop(false, &mut host);
        assert_eq!(wheel.phase(), Phase::Idle);
        assert_eq!(host.frames_scheduled, 0);
    }

    #[test]
    fn scroll_to_selected_item_is_noop() {
        let (mut wheel, mut host) = wheel(4);
        let redraws = host.redraws;
        assert_eq!(wheel.scroll_to_index(0, &mut host), Ok(false));
        assert_eq!(host.frames_scheduled, 0);
        assert_eq!(host.redraws, redraws);
    }

    #[test]
    fn scroll_to_stale_index_is_rejected() {
        let (mut wheel, mut host) = wheel(4);
        assert_eq!(
            wheel.scroll_to_index(9, &mut host),
            Err(WheelError::IndexOutOfRange { index: 9, count: 4 })
        );
        assert_eq!(
            wheel.select(4, &mut host),
            Err(WheelError::IndexOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn scroll_to_index_takes_the_short_way() {
        let (mut wheel, mut host) = wheel(4);
        wheel.scroll_to_index(3, &mut host).unwrap();
        for _ in 0..3 {
            host.take_frame();
            host.advance(16);
            wheel.run(Task::Frame, &mut host);
        }
        // item 3 starts at 270 and must climb toward 360, not fall toward 0
        assert!(wheel.current_angle_of(3).unwrap() > 270.0);

        run_until_idle(&mut wheel, &mut host);
        assert_eq!(wheel.selected_index(), Some(3));
        assert_eq!(wheel.current_angle_of(3), Some(0.0));
        assert_eq!(host.selections, vec![0, 3]);
    }

    #[test]
    fn step_wraps_around_the_ring() {
        let (mut wheel, mut host) = wheel(5);
        assert!(wheel.step(Direction::Previous, &mut host));
        run_until_idle(&mut wheel, &mut host);
        assert_eq!(wheel.selected_index(), Some(4));

        assert!(wheel.step(Direction::Next, &mut host));
        run_until_idle(&mut wheel, &mut host);
        assert_eq!(wheel.selected_index(), Some(0));
        assert!(distance_from_zero(&wheel, 0) < selection::SNAP_RESOLUTION);
    }

    #[test]
    fn select_relays_without_animation() {
        let (mut wheel, mut host) = wheel(5);
        wheel.select(3, &mut host).unwrap();
        assert_eq!(host.frames_scheduled, 0);
        assert_eq!(wheel.current_angle_of(3), Some(0.0));
        assert_eq!(wheel.current_angle_of(4), Some(72.0));
        assert_eq!(host.selections, vec![0, 3]);
    }

    #[test]
    fn shrinking_collection_clamps_selection() {
        let (mut wheel, mut host) = wheel(5);
        wheel.select(4, &mut host).unwrap();
        wheel.set_item_count(3, &mut host);
        assert_eq!(wheel.selected_index(), Some(2));
        assert_eq!(wheel.current_angle_of(2), Some(0.0));
        assert_eq!(wheel.current_angle_of(3), None);
        assert_eq!(host.selections, vec![0, 4, 2]);
    }

    #[test]
    fn emptied_collection_unselects_once() {
        let (mut wheel, mut host) = wheel(3);
        wheel.set_item_count(0, &mut host);
        wheel.set_item_count(0, &mut host);
        assert_eq!(host.unselected, 1);
        assert_eq!(wheel.selected_index(), None);

        assert!(!wheel.start_fling(500.0, &mut host));
        assert!(!wheel.step(Direction::Next, &mut host));
        wheel.on_drag_delta(30.0, &mut host);
        wheel.stop(true, &mut host);
        assert_eq!(wheel.phase(), Phase::Idle);

        wheel.set_item_count(2, &mut host);
        assert_eq!(wheel.selected_index(), Some(0));
        assert_eq!(host.selections, vec![0, 0]);
    }

    #[test]
    fn drive_survives_collection_change() {
        let (mut wheel, mut host) = wheel(6);
        wheel.start_fling(4_000.0, &mut host);
        host.take_frame();
        host.advance(16);
        wheel.run(Task::Frame, &mut host);

        wheel.set_item_count(2, &mut host);
        host.pending_frame = true;
        run_until_idle(&mut wheel, &mut host);

        let selected = wheel.selected_index().unwrap();
        assert!(selected < 2);
        assert!(distance_from_zero(&wheel, selected) < selection::SNAP_RESOLUTION);
    }

    #[test]
    fn snap_shorter_than_a_frame_still_lands_on_zero() {
        let (mut wheel, mut host) = wheel(4);
        // every snap finishes before its first sample can move
        wheel.set_animation_duration(10);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(10.0, &mut host);
        wheel.on_up(&mut host);

        let frames = run_until_idle(&mut wheel, &mut host);
        assert_eq!(frames, 1);
        assert_eq!(wheel.selected_index(), Some(0));
        assert_eq!(wheel.current_angle_of(0), Some(0.0));
        assert!(distance_from_zero(&wheel, 0) < selection::SNAP_RESOLUTION);
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    #[test]
    fn half_degree_residue_lands_without_animating() {
        let (mut wheel, mut host) = wheel(4);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(0.5, &mut host);
        wheel.on_up(&mut host);

        assert_eq!(host.frames_scheduled, 0);
        assert_eq!(wheel.current_angle_of(0), Some(0.0));
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    #[test]
    fn scroll_to_nearly_aligned_item_is_noop() {
        let (mut wheel, mut host) = wheel(7);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(0.3, &mut host);

        assert_eq!(wheel.scroll_to_index(0, &mut host), Ok(false));
        assert_eq!(host.frames_scheduled, 0);
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    #[test]
    fn settled_fractional_ring_needs_no_further_scroll() {
        let (mut wheel, mut host) = wheel(7);
        wheel.on_down(FRONT, &mut host);
        wheel.on_drag_delta(-48.0, &mut host);
        wheel.on_up(&mut host);
        run_until_idle(&mut wheel, &mut host);

        assert_eq!(wheel.selected_index(), Some(1));
        assert!(distance_from_zero(&wheel, 1) < 1e-9);

        let scheduled = host.frames_scheduled;
        assert_eq!(wheel.scroll_to_index(1, &mut host), Ok(false));
        assert_eq!(host.frames_scheduled, scheduled);
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    #[test]
    fn long_press_reports_item_and_swallows_the_tap() {
        let (mut wheel, mut host) = wheel(4);
        assert_eq!(wheel.on_down(LEFT, &mut host), Some(1));
        assert!(wheel.on_long_press(&mut host));
        assert_eq!(host.long_presses, vec![1]);

        assert!(!wheel.on_tap(&mut host));
        assert!(host.clicks.is_empty());
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    #[test]
    fn long_press_outside_items_does_nothing() {
        let (mut wheel, mut host) = wheel(4);
        wheel.on_down(Point::new(2.0, 2.0), &mut host);
        assert!(!wheel.on_long_press(&mut host));
        assert!(host.long_presses.is_empty());
    }

    #[test]
    fn tap_reports_click_or_scrolls() {
        let (mut wheel, mut host) = wheel(4);
        assert_eq!(wheel.on_down(LEFT, &mut host), Some(1));
        assert!(wheel.on_tap(&mut host));
        assert_eq!(host.clicks, vec![1]);

        wheel.set_callback_on_unselected_item_click(false);
        wheel.on_down(LEFT, &mut host);
        wheel.on_tap(&mut host);
        assert_eq!(host.clicks, vec![1]);
        assert_eq!(wheel.phase(), Phase::Animating);
        run_until_idle(&mut wheel, &mut host);
        assert_eq!(wheel.selected_index(), Some(1));

        assert_eq!(wheel.on_down(FRONT, &mut host), Some(1));
        wheel.on_tap(&mut host);
        assert_eq!(host.clicks, vec![1, 1]);
    }

    #[test]
    fn tap_outside_items_does_nothing() {
        let (mut wheel, mut host) = wheel(4);
        assert_eq!(wheel.on_down(Point::new(2.0, 2.0), &mut host), None);
        assert!(!wheel.on_tap(&mut host));
        assert!(host.clicks.is_empty());
    }

    #[derive(Default)]
    struct Recorder {
        painted: Vec<(usize, bool, f64)>,
    }

    impl ItemPainter for Recorder {
        type Error = ();

        fn paint(
            &mut self,
            index: usize,
            _projection: Projection,
            camera: &CameraTransform,
            selected: bool,
        ) -> Result<(), ()> {
            self.painted.push((index, selected, camera.scale()));
            Ok(())
        }
    }

    #[test]
    fn draw_paints_back_to_front() {
        let (wheel, _host) = wheel(4);
        let mut recorder = Recorder::default();
        wheel.draw(&mut recorder).unwrap();

        let order: Vec<usize> = recorder.painted.iter().map(|p| p.0).collect();
        assert_eq!(order.first(), Some(&2));
        assert_eq!(order.last(), Some(&0));
        assert_eq!(order.len(), 4);

        let (_, selected, scale) = recorder.painted[3];
        assert!(selected);
        assert_eq!(scale, 1.0);
        assert!(recorder.painted[..3].iter().all(|p| !p.1 && p.2 < 1.0));
    }
}
