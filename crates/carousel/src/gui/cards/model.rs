use super::ICON_SIZE;
use crate::config::{Config, ExecCommand, ItemConfig, Label};
use gdk_pixbuf::Pixbuf;
use spindle::{Host, Size, Wheel};
use std::path::Path;

#[derive(Clone)]
pub struct Card {
    pub label: Label,
    pub exec: Option<ExecCommand>,
    pub pixbuf: Option<Pixbuf>,
}

impl Card {
    pub fn from_config(cfg: &ItemConfig) -> Self {
        Self {
            label: cfg.label.clone(),
            exec: cfg.exec.clone(),
            pixbuf: cfg.icon.as_deref().and_then(Self::load_icon),
        }
    }

    fn load_icon(path: &Path) -> Option<Pixbuf> {
        Pixbuf::from_file_at_scale(path, ICON_SIZE, ICON_SIZE, true)
            .inspect_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }
}

/// Everything the component shares with the draw function.
pub struct CarouselState {
    pub wheel: Wheel,
    pub cards: Vec<Card>,
    pub item_size: Size,
}

impl CarouselState {
    pub fn new(config: &Config) -> Self {
        Self {
            wheel: Wheel::new(config.wheel.clone()),
            cards: Vec::new(),
            item_size: config.item_size.into(),
        }
    }

    /// Swaps in a (re)loaded config, keeping the selection when it survives.
    pub fn apply_config(&mut self, config: &Config, host: &mut impl Host) {
        self.cards = config.items.iter().map(Card::from_config).collect();
        self.item_size = config.item_size.into();
        self.wheel.set_config(config.wheel.clone(), host);
        let viewport = *self.wheel.layout().viewport();
        self.wheel
            .resize(viewport.width, viewport.height, self.item_size, host);
        self.wheel.set_item_count(self.cards.len(), host);
    }

    pub fn resize(&mut self, width: i32, height: i32, host: &mut impl Host) {
        self.wheel
            .resize(width as f64, height as f64, self.item_size, host);
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.wheel
            .selected_index()
            .and_then(|i| self.cards.get(i))
    }
}
