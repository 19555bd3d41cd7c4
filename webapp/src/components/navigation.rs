use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{
    common::theme,
    components::{notifications::ToastStack, sidebar::Sidebar},
    Route,
};

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    target: Route,
    text: &'static str,
    menu_signal: Signal<bool>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let current: Route = use_route();
    let mut menu_signal = props.menu_signal;

    let class = if current == props.target { "active" } else { "" };

    rsx! {
        li {
            Link {
                class: "{class}",
                to: props.target.clone(),
                onclick: move |_| menu_signal.set(false),
                "{props.text}"
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme_signal = use_signal(theme::load);

    // runs on mount with the stored preference, then after every toggle
    use_effect(move || theme::apply(theme_signal()));

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle color theme",
            onclick: move |_| {
                let next = theme_signal().toggled();
                debug!("switching theme to {next:?}");
                theme_signal.set(next);
            },
            "{theme_signal().icon()}"
        }
    }
}

// Layout root for every routed page.  Renders the fixed header, the
// slide-out sidebar, the toast stack, and the page body via Outlet.
#[component]
pub fn NavBar() -> Element {
    let mut menu_signal = use_signal(|| false);
    let mut show_sidebar = use_signal(|| false);

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header-inner",
                Link {
                    class: "logo",
                    to: Route::Home {},
                    "Mobile Viewer"
                }
                ul {
                    class: if menu_signal() { "nav-links open" } else { "nav-links" },
                    NavLink {
                        target: Route::Home {},
                        text: "Home",
                        menu_signal,
                    }
                    NavLink {
                        target: Route::Viewer {},
                        text: "Viewer",
                        menu_signal,
                    }
                }
                div {
                    class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: "sidebar-toggle",
                        aria_label: "Open sidebar",
                        onclick: move |_| show_sidebar.set(true),
                        "☰"
                    }
                    button {
                        class: if menu_signal() { "menu-toggle active" } else { "menu-toggle" },
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| {
                            let open = !menu_signal();
                            menu_signal.set(open);
                        },
                        span { class: "menu-bar" }
                        span { class: "menu-bar" }
                        span { class: "menu-bar" }
                    }
                }
            }
        }
        Sidebar {
            show_signal: show_sidebar,
        }
        ToastStack {}
        Outlet::<Route> {}
    }
}
