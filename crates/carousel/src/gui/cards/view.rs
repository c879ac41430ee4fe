use super::model::Card;
use super::{CORNER_RADIUS, ICON_INACTIVE_ALPHA, ICON_SIZE, LABEL_SIZE};
use crate::gui::theme::CardPalette;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use spindle::{CameraTransform, ItemPainter, Point, Projection, Size};
use std::f64::consts::{FRAC_PI_2, PI};

/// Paints cards in the wheel's back-to-front order. Each card is drawn in
/// its own unit space, then placed by the item's camera transform.
pub struct CardPainter<'a> {
    cr: &'a Context,
    cards: &'a [Card],
    palette: &'a CardPalette,
    size: Size,
    top: f64,
}

impl<'a> CardPainter<'a> {
    pub fn new(
        cr: &'a Context,
        cards: &'a [Card],
        palette: &'a CardPalette,
        size: Size,
        top: f64,
    ) -> Self {
        Self {
            cr,
            cards,
            palette,
            size,
            top,
        }
    }

    fn draw_card(&self, card: &Card, selected: bool, scale: f64) -> Result<(), cairo::Error> {
        self.draw_background(selected, scale)?;
        if let Some(pixbuf) = &card.pixbuf {
            self.draw_icon(pixbuf, selected)?;
        }
        self.draw_label(card.label.as_str(), card.pixbuf.is_some())
    }

    fn draw_background(&self, selected: bool, scale: f64) -> Result<(), cairo::Error> {
        let (w, h) = (self.size.width, self.size.height);
        let r = CORNER_RADIUS.min(w / 2.0).min(h / 2.0);

        self.cr.new_sub_path();
        self.cr.arc(w - r, r, r, -FRAC_PI_2, 0.0);
        self.cr.arc(w - r, h - r, r, 0.0, FRAC_PI_2);
        self.cr.arc(r, h - r, r, FRAC_PI_2, PI);
        self.cr.arc(r, r, r, PI, 3.0 * FRAC_PI_2);
        self.cr.close_path();

        set_source(self.cr, self.palette.fill(selected, scale));
        self.cr.fill_preserve()?;
        set_source(self.cr, self.palette.outline(selected));
        self.cr.set_line_width(2.0);
        self.cr.stroke()
    }

    fn draw_icon(&self, pixbuf: &Pixbuf, selected: bool) -> Result<(), cairo::Error> {
        // icon takes the upper part of the card, the label sits below it
        let side = (self.size.width.min(self.size.height) * 0.6).max(1.0);
        let icon_scale = side / ICON_SIZE as f64;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );
        let (ix, iy) = (
            (self.size.width - iw) / 2.0,
            (self.size.height * 0.8 - ih) / 2.0,
        );

        self.cr.save()?;
        self.cr.translate(ix, iy);
        self.cr.scale(icon_scale, icon_scale);
        if selected {
            self.cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            self.cr.paint()?;
        } else {
            self.cr.push_group();
            self.cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            self.cr.paint()?;
            self.cr.pop_group_to_source()?;
            self.cr.paint_with_alpha(ICON_INACTIVE_ALPHA)?;
        }
        self.cr.restore()
    }

    fn draw_label(&self, text: &str, below_icon: bool) -> Result<(), cairo::Error> {
        set_source(self.cr, self.palette.text());
        self.cr
            .select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.cr.set_font_size(LABEL_SIZE);
        let ext = self.cr.text_extents(text)?;
        let baseline = if below_icon {
            self.size.height * 0.88
        } else {
            (self.size.height + ext.height()) / 2.0
        };
        self.cr
            .move_to((self.size.width - ext.width()) / 2.0 - ext.x_bearing(), baseline);
        self.cr.show_text(text)
    }
}

impl ItemPainter for CardPainter<'_> {
    type Error = cairo::Error;

    fn paint(
        &mut self,
        index: usize,
        _projection: Projection,
        camera: &CameraTransform,
        selected: bool,
    ) -> Result<(), cairo::Error> {
        let Some(card) = self.cards.get(index) else {
            return Ok(());
        };
        let origin = camera.map_point(Point::new(0.0, self.top));
        let scale = camera.scale();

        self.cr.save()?;
        self.cr.translate(origin.x, origin.y);
        self.cr.scale(scale, scale);
        let drawn = self.draw_card(card, selected, scale);
        self.cr.restore()?;
        drawn
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}
