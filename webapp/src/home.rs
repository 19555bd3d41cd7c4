use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use crate::{
    common::{effects, fragments::HtmlFragment, style::HOME_STYLES},
    components::notifications::{NotificationLevel, notify},
    Route,
};

// Stands in for the signup round trip until there is a real backend.
const SIGNUP_DELAY_MS: u32 = 500;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📱",
        "Device profiles",
        "Switch between phone, tablet, and desktop frames with one click.",
    ),
    (
        "🔍",
        "Stepped zoom",
        "Scale the frame from 50% to 200% without losing layout fidelity.",
    ),
    (
        "🎨",
        "Theme aware",
        "Light and dark palettes follow you across visits.",
    ),
    (
        "⚡",
        "Instant switching",
        "Frame changes animate smoothly instead of reloading the page.",
    ),
    (
        "🧭",
        "Any address",
        "Point the frame at your staging site, or fall back to the built-in page.",
    ),
    (
        "📐",
        "Exact sizes",
        "Pick a precise screen resolution when the preset frames are not enough.",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("12k+", "developers on board"),
    ("40+", "screen resolutions"),
    ("3", "device families"),
    ("99.9%", "uptime this year"),
];

#[component]
pub fn Home() -> Element {
    // Cards start hidden and animate in as they scroll into view.
    use_effect(|| effects::reveal_cards());

    rsx! {
        style { "{HOME_STYLES}" }
        section {
            class: "hero",
            h1 { "Preview your site on every device" }
            p {
                "Mobile Viewer wraps any page in a realistic device frame so you \
                 can check layouts before your users do."
            }
            div {
                class: "hero-actions",
                Link {
                    class: "btn btn-primary",
                    to: Route::Viewer {},
                    "Open the viewer"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: |_| effects::scroll_to("features"),
                    "See features"
                }
            }
        }
        section {
            class: "section",
            div {
                class: "stats-grid",
                for (value, label) in STATS {
                    div {
                        key: "{label}",
                        class: "stat-card card",
                        div { class: "stat-value", "{value}" }
                        div { class: "stat-label", "{label}" }
                    }
                }
            }
        }
        section {
            class: "section",
            id: "features",
            h2 { class: "section-title", "Everything a layout check needs" }
            p {
                class: "section-subtitle",
                "No emulators, no browser extensions, no guesswork."
            }
            div {
                class: "features-grid",
                for (icon, title, blurb) in FEATURES {
                    div {
                        key: "{title}",
                        class: "feature-card card",
                        div { class: "feature-icon", "{icon}" }
                        h3 { "{title}" }
                        p { "{blurb}" }
                    }
                }
            }
        }
        Pricing {}
        NewsletterSignup {}
        footer {
            class: "site-footer",
            HtmlFragment { path: "/assets/fragments/footer.html" }
        }
    }
}

#[component]
fn Pricing() -> Element {
    rsx! {
        section {
            class: "section",
            id: "pricing",
            h2 { class: "section-title", "Simple pricing" }
            p {
                class: "section-subtitle",
                "Start free, upgrade when the whole team wants in."
            }
            div {
                class: "pricing-grid",
                div {
                    class: "pricing-card card",
                    div { class: "pricing-tier", "Starter" }
                    div { class: "pricing-price", "$0" span { "/month" } }
                    ul {
                        li { "All device profiles" }
                        li { "Built-in preview page" }
                        li { "Community support" }
                    }
                    button { class: "btn btn-secondary", "Get started" }
                }
                div {
                    class: "pricing-card card featured",
                    div { class: "pricing-tier", "Pro" }
                    div { class: "pricing-price", "$12" span { "/month" } }
                    ul {
                        li { "Everything in Starter" }
                        li { "Custom screen resolutions" }
                        li { "Unlimited saved addresses" }
                        li { "Email support" }
                    }
                    button { class: "btn btn-primary", "Start free trial" }
                }
                div {
                    class: "pricing-card card",
                    div { class: "pricing-tier", "Team" }
                    div { class: "pricing-price", "$49" span { "/month" } }
                    ul {
                        li { "Everything in Pro" }
                        li { "Shared device presets" }
                        li { "Priority support" }
                    }
                    button { class: "btn btn-secondary", "Contact sales" }
                }
            }
        }
    }
}

#[component]
fn NewsletterSignup() -> Element {
    let mut email_signal = use_signal(String::new);

    rsx! {
        section {
            class: "newsletter",
            div {
                class: "section",
                h2 { class: "section-title", "Stay in the loop" }
                p {
                    class: "section-subtitle",
                    "Release notes and new device profiles, about once a month."
                }
                form {
                    class: "newsletter-form",
                    onsubmit: move |_| {
                        let address = email_signal().trim().to_owned();
                        if address.is_empty() {
                            return;
                        }

                        debug!("newsletter signup for {address}");
                        email_signal.set(String::new());

                        let task = Timeout::new(SIGNUP_DELAY_MS, move || {
                            notify(
                                format!("Thank you! Check your inbox at {address}"),
                                NotificationLevel::Success,
                            );
                        });
                        task.forget();
                    },
                    input {
                        class: "text-input",
                        r#type: "email",
                        name: "email",
                        placeholder: "you@example.com",
                        value: "{email_signal}",
                        oninput: move |event| email_signal.set(event.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        "Subscribe"
                    }
                }
            }
        }
    }
}
