use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WheelError {
    #[error("item {index} is out of range for a wheel of {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}
