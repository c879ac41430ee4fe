#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Show,
    Hide,
    Next,
    Previous,
    ScrollTo(usize),
    Fling(f64),
    ConfigReload,
}
