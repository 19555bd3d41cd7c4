#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod viewer;
use viewer::Viewer;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/viewer")]
        Viewer {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::APP_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
