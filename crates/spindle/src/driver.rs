use crate::host::{Host, Task};
use crate::layout::WheelLayout;
use crate::motion::AngleMotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No drive was running; the frame was stale.
    Idle,
    /// Another frame has been scheduled.
    Continue,
    /// The drive has quiesced and the wheel should settle.
    Finished,
}

/// Samples an [`AngleMotion`] once per frame and feeds the change since the
/// previous sample into the layout.
#[derive(Debug)]
pub struct MotionDriver {
    motion: AngleMotion,
    last_sampled_angle: f64,
    animation_duration_ms: u64,
    should_stop: bool,
    active: bool,
}

impl MotionDriver {
    pub fn new(animation_duration_ms: u64) -> Self {
        Self {
            motion: AngleMotion::new(),
            last_sampled_angle: 0.0,
            animation_duration_ms,
            should_stop: false,
            active: false,
        }
    }

    pub fn motion(&self) -> &AngleMotion {
        &self.motion
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn animation_duration_ms(&self) -> u64 {
        self.animation_duration_ms
    }

    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.animation_duration_ms = duration_ms;
    }

    pub fn start_by_velocity(&mut self, velocity: f64, host: &mut impl Host) -> bool {
        if velocity == 0.0 || !velocity.is_finite() {
            return false;
        }
        self.start_common(host);
        self.motion.start_fling(velocity, host.now_ms());
        log::debug!(
            "fling started at {velocity:.1}, settles in {}ms",
            self.motion.duration()
        );
        self.schedule(host);
        true
    }

    /// Rotates the items by `delta_angle` degrees over the animation duration.
    pub fn start_by_distance(&mut self, delta_angle: f64, host: &mut impl Host) -> bool {
        if delta_angle == 0.0 || !delta_angle.is_finite() {
            return false;
        }
        self.start_common(host);
        self.motion
            .start_scroll(0.0, -delta_angle, self.animation_duration_ms, host.now_ms());
        log::debug!("rotating by {delta_angle:.2} over {}ms", self.animation_duration_ms);
        self.schedule(host);
        true
    }

    /// Cancels pending frames and finishes the motion in place. Safe to call
    /// when idle; returns whether a drive was running.
    pub fn stop(&mut self, host: &mut impl Host) -> bool {
        host.cancel_scheduled(Task::Frame);
        self.motion.force_finish();
        self.last_sampled_angle = 0.0;
        std::mem::replace(&mut self.active, false)
    }

    pub fn tick(&mut self, layout: &mut WheelLayout, host: &mut impl Host) -> Tick {
        if !self.active {
            return Tick::Idle;
        }
        if layout.is_empty() {
            self.finish();
            return Tick::Finished;
        }

        self.should_stop = false;

        let sample = self.motion.sample(host.now_ms());
        // items move opposite to the sampled angle, matching the drag direction
        let delta = self.last_sampled_angle - sample.angle;
        layout.apply_delta(delta);
        host.request_redraw();
        log::trace!("tick: angle {:.1}, delta {delta:.1}", sample.angle);

        if host.frame_applied(layout).is_break() {
            self.should_stop = true;
        }

        if sample.more && !self.should_stop {
            self.last_sampled_angle = sample.angle;
            host.schedule_next_frame(Task::Frame);
            Tick::Continue
        } else {
            self.finish();
            Tick::Finished
        }
    }

    fn start_common(&mut self, host: &mut impl Host) {
        host.cancel_scheduled(Task::Frame);
        self.last_sampled_angle = 0.0;
    }

    fn schedule(&mut self, host: &mut impl Host) {
        self.active = true;
        host.schedule_next_frame(Task::Frame);
    }

    fn finish(&mut self) {
        self.last_sampled_angle = 0.0;
        self.active = false;
        self.motion.force_finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Size, Viewport};
    use crate::testing::FakeHost;

    fn layout(count: usize) -> WheelLayout {
        let mut layout = WheelLayout::new(Viewport {
            width: 600.0,
            height: 300.0,
            item: Size::new(80.0, 80.0),
            ..Default::default()
        });
        layout.rebuild(count, 0);
        layout
    }

    fn drive(driver: &mut MotionDriver, layout: &mut WheelLayout, host: &mut FakeHost) -> usize {
        let mut ticks = 0;
        while host.take_frame() {
            ticks += 1;
            host.advance(16);
            if driver.tick(layout, host) == Tick::Finished {
                break;
            }
        }
        ticks
    }

    #[test]
    fn degenerate_requests_are_ignored() {
        let mut host = FakeHost::default();
        let mut driver = MotionDriver::new(400);
        assert!(!driver.start_by_velocity(0.0, &mut host));
        assert!(!driver.start_by_distance(0.0, &mut host));
        assert!(!driver.start_by_distance(f64::NAN, &mut host));
        assert_eq!(host.frames_scheduled, 0);
        assert!(!driver.is_active());
    }

    #[test]
    fn distance_drive_rotates_items_by_the_distance() {
        let mut host = FakeHost::default();
        let mut layout = layout(4);
        let mut driver = MotionDriver::new(400);

        assert!(driver.start_by_distance(30.0, &mut host));
        let ticks = drive(&mut driver, &mut layout, &mut host);

        assert!(ticks > 10);
        assert!(!driver.is_active());
        // the final frame keeps the last computed sample, one rounding step short at most
        let moved = layout.angle_of(0).unwrap();
        assert!((29.0..=30.0).contains(&moved), "{moved}");
        assert_eq!(layout.angle_of(1).unwrap() - moved, 90.0);
    }

    #[test]
    fn negative_distance_wraps_below_zero() {
        let mut host = FakeHost::default();
        let mut layout = layout(2);
        let mut driver = MotionDriver::new(0);

        driver.start_by_distance(-15.0, &mut host);
        drive(&mut driver, &mut layout, &mut host);
        assert_eq!(layout.angle_of(0), Some(345.0));
        assert_eq!(layout.angle_of(1), Some(165.0));
    }

    #[test]
    fn fling_moves_against_the_sampled_angle() {
        let mut host = FakeHost::default();
        let mut layout = layout(3);
        let mut driver = MotionDriver::new(400);

        driver.start_by_velocity(2_400.0, &mut host);
        drive(&mut driver, &mut layout, &mut host);
        // 120 degrees of travel, applied as a negative rotation
        let angle = layout.angle_of(0).unwrap();
        assert!((239.0..=241.0).contains(&angle), "{angle}");
    }

    #[test]
    fn restart_cancels_the_pending_drive() {
        let mut host = FakeHost::default();
        let mut layout = layout(3);
        let mut driver = MotionDriver::new(400);

        driver.start_by_velocity(5_000.0, &mut host);
        host.take_frame();
        host.advance(100);
        driver.tick(&mut layout, &mut host);

        driver.start_by_distance(10.0, &mut host);
        assert_eq!(host.cancelled, vec![Task::Frame, Task::Frame]);
        assert_eq!(driver.motion().mode(), crate::motion::MotionMode::Scroll);
    }

    #[test]
    fn empty_layout_finishes_immediately() {
        let mut host = FakeHost::default();
        let mut layout = layout(0);
        let mut driver = MotionDriver::new(400);

        driver.start_by_velocity(1_000.0, &mut host);
        assert_eq!(driver.tick(&mut layout, &mut host), Tick::Finished);
        assert_eq!(host.redraws, 0);
        assert!(driver.motion().is_finished());
    }

    #[test]
    fn host_can_abort_within_a_tick() {
        let mut host = FakeHost {
            abort_after_frames: Some(2),
            ..Default::default()
        };
        let mut layout = layout(3);
        let mut driver = MotionDriver::new(400);

        driver.start_by_distance(90.0, &mut host);
        let ticks = drive(&mut driver, &mut layout, &mut host);
        assert_eq!(ticks, 2);
        assert!(!driver.is_active());
    }

    #[test]
    fn stale_frame_after_stop_is_idle() {
        let mut host = FakeHost::default();
        let mut layout = layout(3);
        let mut driver = MotionDriver::new(400);

        driver.start_by_distance(90.0, &mut host);
        assert!(driver.stop(&mut host));
        assert!(!driver.stop(&mut host));
        assert_eq!(driver.tick(&mut layout, &mut host), Tick::Idle);
        assert_eq!(layout.angle_of(0), Some(0.0));
    }
}
