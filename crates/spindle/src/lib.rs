//! A rotating carousel of items laid out on a tilted ring.
//!
//! [`Wheel`] is driven entirely through a [`Host`]: the host feeds it input
//! and time, runs the [`Task`]s it schedules, and receives selection
//! callbacks. Rendering goes through an [`ItemPainter`].

pub mod angle;
pub mod config;
pub mod driver;
pub mod error;
pub mod host;
pub mod layout;
pub mod motion;
pub mod selection;
pub mod wheel;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Gravity, WheelConfig};
pub use error::WheelError;
pub use host::{Host, ItemPainter, Task};
pub use layout::{CameraTransform, Point, Projection, Size};
pub use wheel::{Direction, Phase, Wheel};
