mod app;
mod logging;
mod model;
mod note_filter;
mod settings;
mod store;
mod tag_editor;

use app::*;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let settings = load_settings();
    match settings.log_filter() {
        Ok(level) => logging::init(level),
        Err(err) => log::warn!("{err}; keeping info"),
    }

    leptos::mount::mount_to_body(move || {
        view! { <App settings=settings /> }
    })
}
