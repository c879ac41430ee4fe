pub mod app;
pub mod cards;
pub mod host;
pub mod theme;
pub mod window;
