mod api;
mod app;
mod components;
mod format;
mod monitoring;
mod pages;

use app::App;
use monitoring::Logger;

fn main() {
    Logger::init();
    dioxus::launch(App);
}
