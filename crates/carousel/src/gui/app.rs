use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::cards::{self, Card, CardPainter, CarouselState};
use crate::gui::host::GtkHost;
use crate::gui::theme::{self, CardPalette};
use crate::gui::window;
use crate::sys::launch;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use spindle::{Direction, Point, Task};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<CarouselState>>,
    pub host: GtkHost,
    pub visible: bool,
    pub caption: String,
    pub root: gtk::ApplicationWindow,
    drag_offset: f64,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Step(Direction),
    ScrollTo(usize),
    Fling(f64),
    Press(Point),
    Drag(f64),
    Release(f64, f64),
    LongPress,
    Swipe(f64),
    Resize(i32, i32),
    Run(Task),
    Selected(Option<usize>),
    Activate(usize),
    LongPressed(usize),
    ActivateSelected,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Next => AppMsg::Step(Direction::Next),
            AppEvent::Previous => AppMsg::Step(Direction::Previous),
            AppEvent::ScrollTo(i) => AppMsg::ScrollTo(i),
            AppEvent::Fling(v) => AppMsg::Fling(v),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Carousel"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "carousel-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    let msg = match key {
                        gdk::Key::Escape => AppMsg::Hide,
                        gdk::Key::Left => AppMsg::Step(Direction::Previous),
                        gdk::Key::Right => AppMsg::Step(Direction::Next),
                        gdk::Key::Return | gdk::Key::KP_Enter => AppMsg::ActivateSelected,
                        _ => return glib::Propagation::Proceed,
                    };
                    sender.input(msg);
                    glib::Propagation::Stop
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[local_ref]
                drawing_area -> gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "carousel-drawing-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width, height));
                    },
                },

                gtk::Label {
                    add_css_class: "carousel-caption",
                    #[watch]
                    set_label: &model.caption,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root, config.height);

        let drawing_area = gtk::DrawingArea::default();
        let mut host = GtkHost::new(drawing_area.clone(), sender.input_sender().clone());
        let mut state = CarouselState::new(&config);
        state.apply_config(&config, &mut host);

        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            host,
            visible: false,
            caption: String::new(),
            root: root.clone(),
            drag_offset: 0.0,
        };

        let widgets = view_output!();

        attach_gestures(&drawing_area, &sender);

        let state_draw = model.state.clone();
        drawing_area.set_draw_func(move |area, cr, _, _| {
            let palette = CardPalette::from_context(&area.style_context());
            let state = state_draw.borrow();
            let top = state.wheel.layout().viewport().item_top();
            let mut painter = CardPainter::new(cr, &state.cards, &palette, state.item_size, top);
            if let Err(e) = state.wheel.draw(&mut painter) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(false);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let mut state = self.state.borrow_mut();
        let host = &mut self.host;

        match msg {
            AppMsg::Show => {
                self.visible = true;
                host.request_redraw();
            }
            AppMsg::Hide => {
                self.visible = false;
                state.wheel.stop(true, host);
            }
            AppMsg::Step(direction) => {
                state.wheel.step(direction, host);
            }
            AppMsg::ScrollTo(index) => {
                if let Err(e) = state.wheel.scroll_to_index(index, host) {
                    log::warn!("Cannot scroll: {}", e);
                }
            }
            AppMsg::Fling(velocity) => {
                state.wheel.start_fling(velocity, host);
            }
            AppMsg::Press(point) => {
                self.drag_offset = 0.0;
                state.wheel.on_down(point, host);
            }
            AppMsg::Drag(offset_x) => {
                let delta = offset_x - self.drag_offset;
                self.drag_offset = offset_x;
                let width = state.wheel.layout().viewport().width;
                state
                    .wheel
                    .on_drag_delta(cards::drag_to_degrees(delta, width), host);
            }
            AppMsg::Release(offset_x, offset_y) => {
                if offset_x.hypot(offset_y) < cards::TAP_SLOP {
                    state.wheel.on_tap(host);
                }
                state.wheel.on_up(host);
            }
            AppMsg::LongPress => {
                state.wheel.on_long_press(host);
            }
            AppMsg::Swipe(velocity_x) => {
                if velocity_x.abs() >= cards::MIN_FLING_VELOCITY {
                    state.wheel.on_fling(velocity_x, host);
                }
            }
            AppMsg::Resize(width, height) => state.resize(width, height, host),
            AppMsg::Run(task) => state.wheel.run(task, host),
            AppMsg::Selected(index) => {
                self.caption = index
                    .and_then(|i| state.cards.get(i))
                    .map(|card| card.label.to_string())
                    .unwrap_or_default();
            }
            AppMsg::Activate(index) => {
                if state.cards.get(index).is_some_and(activate) {
                    self.visible = false;
                }
            }
            AppMsg::LongPressed(index) => {
                if let Some(card) = state.cards.get(index) {
                    self.caption = describe(card);
                }
            }
            AppMsg::ActivateSelected => {
                if state.selected_card().is_some_and(activate) {
                    self.visible = false;
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    state.apply_config(&new_config, host);
                    window::set_height(&self.root, new_config.height);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

fn attach_gestures(area: &gtk::DrawingArea, sender: &ComponentSender<AppModel>) {
    let drag = gtk::GestureDrag::new();
    {
        let sender = sender.clone();
        drag.connect_drag_begin(move |_, x, y| sender.input(AppMsg::Press(Point::new(x, y))));
    }
    {
        let sender = sender.clone();
        drag.connect_drag_update(move |_, dx, _| sender.input(AppMsg::Drag(dx)));
    }
    {
        let sender = sender.clone();
        drag.connect_drag_end(move |_, dx, dy| sender.input(AppMsg::Release(dx, dy)));
    }

    let swipe = gtk::GestureSwipe::new();
    {
        let sender = sender.clone();
        swipe.connect_swipe(move |_, vx, _| sender.input(AppMsg::Swipe(vx)));
    }
    let hold = gtk::GestureLongPress::new();
    {
        let sender = sender.clone();
        hold.connect_pressed(move |_, _, _| sender.input(AppMsg::LongPress));
    }

    // all gestures must see the same pointer sequence
    swipe.group_with(&drag);
    hold.group_with(&drag);

    area.add_controller(drag);
    area.add_controller(swipe);
    area.add_controller(hold);
}

/// Caption shown while a card is held: its label and what it runs.
fn describe(card: &Card) -> String {
    match &card.exec {
        Some(exec) => format!("{}: {}", card.label, exec),
        None => card.label.to_string(),
    }
}

/// Launches the card's command. Returns whether anything was started.
fn activate(card: &Card) -> bool {
    let Some(exec) = &card.exec else {
        log::info!("'{}' has no command", card.label);
        return false;
    };
    match launch::spawn_shell(exec) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to launch '{}': {}", card.label, e);
            false
        }
    }
}
