use dioxus::prelude::*;
use preview::{
    device::{DeviceKind, Dimensions},
    source::DEFAULT_ADDRESS,
    state::PreviewState,
};
use tracing::{debug, warn};

use crate::common;

// Presets offered by the screen size selector, smallest first.  Entries
// use the WxH form that Dimensions::parse understands.
pub const SCREEN_SIZES: [&str; 8] = [
    "320x568", "375x667", "390x844", "414x896", "768x1024", "1024x768", "1280x800", "1920x1080",
];

fn size_label(value: &str) -> String {
    match Dimensions::parse(value) {
        Some(dimensions) => dimensions.to_string(),
        None => value.to_owned(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct DeviceButtonsProps {
    state: Signal<PreviewState>,
}

#[component]
pub fn DeviceButtons(props: DeviceButtonsProps) -> Element {
    let mut state = props.state;
    let selected = state.read().device();

    rsx! {
        div {
            class: "toolbar-group",
            span { class: "toolbar-label", "Device" }
            div {
                class: "device-buttons",
                for device in DeviceKind::ALL {
                    button {
                        key: "{device.label()}",
                        class: if device == selected { "device-btn active" } else { "device-btn" },
                        onclick: move |_| {
                            debug!("selecting {} frame", device.label());
                            state.write().select_device(device);
                        },
                        "{device.label()}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AddressBarProps {
    state: Signal<PreviewState>,
    loaded_at: Signal<String>,
}

#[component]
pub fn AddressBar(props: AddressBarProps) -> Element {
    let mut state = props.state;
    let mut loaded_at = props.loaded_at;

    rsx! {
        div {
            class: "toolbar-group grow",
            span { class: "toolbar-label", "Address" }
            form {
                class: "address-form",
                onsubmit: move |event| {
                    let entered = match event.values().get("address") {
                        Some(value) => value.as_value(),
                        None => String::new(),
                    };

                    // a rejected address gets the same quiet recovery as any
                    // other undisplayable content: log it, show the offline
                    // document
                    let outcome = state.write().load(&entered);
                    if let Err(error) = outcome {
                        warn!("rejected address {entered:?}: {error}");
                        state.write().load_fallback();
                    }

                    loaded_at.set(common::local_time_stamp());
                },
                input {
                    class: "text-input",
                    r#type: "text",
                    name: "address",
                    placeholder: "{DEFAULT_ADDRESS}",
                    autocomplete: "off",
                    spellcheck: "false",
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Load"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ScreenSizeSelectProps {
    state: Signal<PreviewState>,
}

#[component]
pub fn ScreenSizeSelect(props: ScreenSizeSelectProps) -> Element {
    let mut state = props.state;

    rsx! {
        div {
            class: "toolbar-group",
            span { class: "toolbar-label", "Screen size" }
            select {
                class: "select-input",
                onchange: move |event| {
                    let value = event.value();
                    debug!("screen size override set to {value:?}");
                    state.write().set_screen_override(&value);
                },
                option { value: "", "Device default" }
                for size in SCREEN_SIZES {
                    option {
                        key: "{size}",
                        value: "{size}",
                        "{size_label(size)}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ZoomControlsProps {
    state: Signal<PreviewState>,
}

#[component]
pub fn ZoomControls(props: ZoomControlsProps) -> Element {
    let mut state = props.state;
    let zoom = state.read().zoom();

    rsx! {
        div {
            class: "toolbar-group",
            span { class: "toolbar-label", "Zoom" }
            div {
                class: "zoom-controls",
                button {
                    class: "zoom-btn",
                    disabled: zoom.is_min(),
                    aria_label: "Zoom out",
                    onclick: move |_| state.write().zoom_out(),
                    "−"
                }
                span {
                    class: "zoom-level",
                    "{zoom.percent()}%"
                }
                button {
                    class: "zoom-btn",
                    disabled: zoom.is_max(),
                    aria_label: "Zoom in",
                    onclick: move |_| state.write().zoom_in(),
                    "+"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_size_parses() {
        for entry in SCREEN_SIZES {
            assert!(
                Dimensions::parse(entry).is_some(),
                "unparseable preset {entry:?}"
            );
        }
    }

    #[test]
    fn labels_render_with_the_display_form() {
        assert_eq!(size_label("375x667"), "375×667");
        assert_eq!(size_label("garbage"), "garbage");
    }
}
