use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{LinSrgb, Srgb, Srgba, WithAlpha};

const ACCENT: (f64, f64, f64) = (0.4, 0.4, 0.8);
const SURFACE: (f64, f64, f64) = (0.15, 0.15, 0.15);

const SELECTED_ALPHA: f64 = 0.95;
const SURFACE_ALPHA: f64 = 0.85;
/// Fraction of the surface alpha kept by a card at the back of the ring.
const BACK_FADE: f64 = 0.5;
const OUTLINE_ALPHA: f64 = 0.2;
const SELECTED_OUTLINE_ALPHA: f64 = 0.6;

/// Colours a card needs, resolved from the widget's theme on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPalette {
    accent: Srgb<f64>,
    surface: Srgb<f64>,
    ink: Srgb<f64>,
}

impl CardPalette {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self::resolve(|name| {
            context.lookup_color(name).map(|c| {
                Srgb::new(c.red() as f64, c.green() as f64, c.blue() as f64)
            })
        })
    }

    /// Builds the palette from named theme colours, falling back for any the
    /// theme does not define.
    pub fn resolve(lookup: impl Fn(&str) -> Option<Srgb<f64>>) -> Self {
        let accent = lookup("theme_selected_bg_color").unwrap_or_else(|| rgb(ACCENT));
        let surface = lookup("theme_bg_color").unwrap_or_else(|| rgb(SURFACE));
        let ink = lookup("theme_fg_color").unwrap_or_else(|| contrasting(surface));
        Self {
            accent,
            surface,
            ink,
        }
    }

    /// Card background. Unselected cards fade as they recede; `scale` is
    /// the camera scale, 1 at the front.
    pub fn fill(&self, selected: bool, scale: f64) -> Srgba<f64> {
        if selected {
            return self.accent.with_alpha(SELECTED_ALPHA);
        }
        let depth = scale.clamp(0.0, 1.0);
        let alpha = SURFACE_ALPHA * (BACK_FADE + (1.0 - BACK_FADE) * depth);
        self.surface.with_alpha(alpha)
    }

    pub fn outline(&self, selected: bool) -> Srgba<f64> {
        let alpha = if selected {
            SELECTED_OUTLINE_ALPHA
        } else {
            OUTLINE_ALPHA
        };
        self.ink.with_alpha(alpha)
    }

    pub fn text(&self) -> Srgba<f64> {
        self.ink.with_alpha(1.0)
    }
}

fn rgb((r, g, b): (f64, f64, f64)) -> Srgb<f64> {
    Srgb::new(r, g, b)
}

/// Black or white, whichever reads better on `background`.
fn contrasting(background: Srgb<f64>) -> Srgb<f64> {
    let lin: LinSrgb<f64> = background.into_linear();
    let luma = 0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue;
    if luma > 0.5 {
        Srgb::new(0.0, 0.0, 0.0)
    } else {
        Srgb::new(1.0, 1.0, 1.0)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(
        "
.carousel-window, .carousel-drawing-area {
    background: none;
    background-color: transparent;
}

.carousel-caption {
    font-weight: bold;
    margin-bottom: 12px;
}
",
    );

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
