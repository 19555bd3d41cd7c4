mod frame;
mod toolbar;

use dioxus::prelude::*;
use preview::{source::PreviewSource, state::PreviewState};

use crate::common::{self, style::VIEWER_STYLES};
use frame::PreviewFrame;
use toolbar::{AddressBar, DeviceButtons, ScreenSizeSelect, ZoomControls};

// Device preview page.  All toolbar widgets share one PreviewState signal
// and the frame re-renders from whatever they leave in it.
#[component]
pub fn Viewer() -> Element {
    let state = use_signal(|| {
        let mut state = PreviewState::new();
        // First paint shows the bundled page instead of a remote site.
        state.load_fallback();
        state
    });
    let loaded_at = use_signal(common::local_time_stamp);

    rsx! {
        style { "{VIEWER_STYLES}" }
        div {
            class: "viewer-page",
            h1 { "Device preview" }
            p {
                class: "viewer-intro",
                "Pick a frame, point it at an address, and see the page the way \
                 a visitor would."
            }
            div {
                class: "viewer-toolbar",
                DeviceButtons { state }
                AddressBar { state, loaded_at }
                ScreenSizeSelect { state }
                ZoomControls { state }
            }
            PreviewFrame { state }
            ViewerStatus { state, loaded_at }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ViewerStatusProps {
    state: Signal<PreviewState>,
    loaded_at: Signal<String>,
}

#[component]
fn ViewerStatus(props: ViewerStatusProps) -> Element {
    let state = props.state.read();
    let loaded_at = props.loaded_at;

    let shown = match state.source() {
        PreviewSource::Remote(address) => address.clone(),
        PreviewSource::Fallback => String::from("offline welcome page"),
    };
    let geometry = state.geometry();
    let zoom = state.zoom();

    rsx! {
        div {
            class: "viewer-status",
            span {
                class: "status-address",
                "{shown}"
            }
            span {
                "{geometry.width}×{geometry.height} at {zoom.percent()}%, loaded {loaded_at}"
            }
        }
    }
}
