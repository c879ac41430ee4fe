use carousel::config;
use carousel::gui::app::AppModel;
use carousel::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    let app = RelmApp::new("org.spindle.carousel");

    app.run::<AppModel>((config, rx));
}
