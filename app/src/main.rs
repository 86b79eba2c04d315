//! Chemical Equipment Parameter Visualizer — web frontend entry point.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod api;
mod app;
mod components;
mod derived;
mod types;
mod utils;

use app::App;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}
