use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

/// Docks the window as a strip along the bottom edge of the output.
pub fn init_layer_shell(window: &gtk::ApplicationWindow, height: i32) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("carousel"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_anchor(Edge::Top, false);
    window.set_keyboard_mode(KeyboardMode::OnDemand);
    set_height(window, height);
}

pub fn set_height(window: &gtk::ApplicationWindow, height: i32) {
    window.set_default_size(-1, height.max(1));
}
