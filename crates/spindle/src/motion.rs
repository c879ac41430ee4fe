//! Time-based angle sampler with two modes: a linear scroll toward a target
//! delta, and a fling that decelerates at a constant rate until it stops.
//!
//! The state sits behind a single lock. Start, stop and sample each take the
//! lock once, so an input handler may restart the motion while a frame
//! callback is sampling it.

use parking_lot::Mutex;

/// Degrees of total fling travel per unit of initial velocity.
pub const VELOCITY_COEFFICIENT: f64 = 0.05;
/// Fling deceleration, in degrees per second squared.
pub const DECELERATION: f64 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    #[default]
    Idle,
    Scroll,
    Fling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub angle: f64,
    pub more: bool,
}

#[derive(Debug, Clone)]
struct MotionState {
    mode: MotionMode,
    start_angle: f64,
    delta_angle: f64,
    velocity: f64,
    start_time: u64,
    duration: u64,
    current_angle: f64,
    finished: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            mode: MotionMode::Idle,
            start_angle: 0.0,
            delta_angle: 0.0,
            velocity: 0.0,
            start_time: 0,
            duration: 0,
            current_angle: 0.0,
            finished: true,
        }
    }
}

impl MotionState {
    fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.start_time)
    }

    fn fling_travel(&self, elapsed: u64) -> f64 {
        let t = elapsed as f64 / 1000.0;
        let total = self.duration as f64 / 1000.0;
        // initial speed chosen so the speed reaches zero exactly at `total`
        let initial_speed = DECELERATION * total;
        let t = t.min(total);
        initial_speed * t - DECELERATION * t * t / 2.0
    }
}

/// Time for a fling with the given initial velocity to come to rest.
pub fn fling_duration_ms(velocity: f64) -> u64 {
    (1000.0 * (2.0 * VELOCITY_COEFFICIENT * velocity.abs() / DECELERATION).sqrt()) as u64
}

#[derive(Debug, Default)]
pub struct AngleMotion {
    state: Mutex<MotionState>,
}

impl AngleMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_scroll(&self, from_angle: f64, delta_angle: f64, duration_ms: u64, now: u64) {
        let mut s = self.state.lock();
        s.mode = MotionMode::Scroll;
        s.finished = false;
        s.start_time = now;
        s.duration = duration_ms;
        s.start_angle = from_angle;
        s.delta_angle = delta_angle;
        s.velocity = 0.0;
        s.current_angle = from_angle;
    }

    pub fn start_fling(&self, velocity: f64, now: u64) {
        let mut s = self.state.lock();
        s.mode = MotionMode::Fling;
        s.finished = false;
        s.start_time = now;
        s.duration = fling_duration_ms(velocity);
        s.start_angle = 0.0;
        s.delta_angle = 0.0;
        s.velocity = velocity;
        s.current_angle = 0.0;
    }

    /// Advances the motion to `now`. Once the duration has elapsed the motion
    /// reports `more = false` and keeps the last computed angle.
    pub fn sample(&self, now: u64) -> Sample {
        let mut s = self.state.lock();
        if s.finished {
            return Sample {
                angle: s.current_angle,
                more: false,
            };
        }

        let elapsed = s.elapsed(now);
        if elapsed >= s.duration {
            s.finished = true;
            if s.mode == MotionMode::Scroll && s.duration == 0 {
                // zero-length scroll jumps straight to its target
                s.current_angle = s.start_angle + s.delta_angle;
            }
            return Sample {
                angle: s.current_angle,
                more: false,
            };
        }

        s.current_angle = match s.mode {
            MotionMode::Scroll => {
                let fraction = elapsed as f64 / s.duration as f64;
                s.start_angle + (s.delta_angle * fraction).round()
            }
            MotionMode::Fling => {
                s.start_angle + s.velocity.signum() * s.fling_travel(elapsed).round()
            }
            MotionMode::Idle => s.current_angle,
        };

        Sample {
            angle: s.current_angle,
            more: true,
        }
    }

    /// Stops in place; the current angle is not moved to the end value.
    pub fn force_finish(&self) {
        self.state.lock().finished = true;
    }

    pub fn extend_duration(&self, extend_ms: u64, now: u64) {
        let mut s = self.state.lock();
        s.duration = s.elapsed(now) + extend_ms;
        s.finished = false;
    }

    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }

    pub fn mode(&self) -> MotionMode {
        self.state.lock().mode
    }

    pub fn duration(&self) -> u64 {
        self.state.lock().duration
    }

    pub fn current_angle(&self) -> f64 {
        self.state.lock().current_angle
    }

    pub fn time_passed(&self, now: u64) -> u64 {
        self.state.lock().elapsed(now)
    }

    /// Signed angular speed in degrees per second at `now`.
    pub fn current_velocity(&self, now: u64) -> f64 {
        let s = self.state.lock();
        if s.finished {
            return 0.0;
        }
        let elapsed = s.elapsed(now);
        match s.mode {
            MotionMode::Scroll if s.duration > 0 => s.delta_angle * 1000.0 / s.duration as f64,
            MotionMode::Fling => {
                let total = s.duration as f64 / 1000.0;
                let t = (elapsed as f64 / 1000.0).min(total);
                s.velocity.signum() * DECELERATION * (total - t)
            }
            _ => 0.0,
        }
    }
}
