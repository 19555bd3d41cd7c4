use dioxus::prelude::*;
use preview::{fallback::FALLBACK_DOCUMENT, source::PreviewSource, state::PreviewState};

#[derive(Clone, PartialEq, Props)]
pub struct PreviewFrameProps {
    state: Signal<PreviewState>,
}

// The device shell sized from PreviewState.  Remote sources render through
// the iframe src attribute, the fallback ships inline via srcdoc so it
// works without any network at all.
#[component]
pub fn PreviewFrame(props: PreviewFrameProps) -> Element {
    let state = props.state.read();

    let geometry = state.geometry();
    let shell_style = format!(
        "width: {}px; height: {}px; transform: scale({});",
        geometry.width, geometry.height, geometry.scale
    );

    let frame = match state.source() {
        PreviewSource::Remote(address) => rsx! {
            iframe {
                class: "preview-frame",
                title: "Site preview",
                src: "{address}",
            }
        },
        PreviewSource::Fallback => rsx! {
            iframe {
                class: "preview-frame",
                title: "Site preview",
                srcdoc: FALLBACK_DOCUMENT,
            }
        },
    };

    rsx! {
        div {
            class: "frame-stage",
            div {
                class: "frame-shell",
                style: "{shell_style}",
                {frame}
            }
        }
    }
}
