use dioxus::prelude::*;

use crate::common::fragments::HtmlFragment;

#[derive(Clone, PartialEq, Props)]
pub struct SidebarProps {
    show_signal: Signal<bool>,
}

// Slide-out panel anchored to the right edge.  Its link list ships as a
// static fragment so the markup can be edited without touching the app.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut show_signal = props.show_signal;

    if !show_signal() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "sidebar-overlay",
            onclick: move |_| show_signal.set(false),
        }
        aside {
            class: "sidebar",
            div {
                class: "sidebar-header",
                h2 { "Mobile Viewer" }
                button {
                    class: "sidebar-close",
                    aria_label: "Close sidebar",
                    onclick: move |_| show_signal.set(false),
                    "×"
                }
            }
            div {
                class: "sidebar-body",
                HtmlFragment { path: "/assets/fragments/sidebar.html" }
            }
        }
    }
}
