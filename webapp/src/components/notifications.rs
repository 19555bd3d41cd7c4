use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

// how long a toast stays on screen before it dismisses itself
const DISMISS_MS: u32 = 3_000;

pub static NOTIFICATIONS: GlobalSignal<Vec<Notification>> = Signal::global(|| Vec::new());

// Notification
//
// one entry in the global toast stack.  ids are monotonic so that repeated
// identical messages stack instead of collapsing, and so the dismiss timer
// can find its own toast no matter what was pushed since.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    id: u64,
    message: String,
    level: NotificationLevel,
}

// only Success fires today
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

impl NotificationLevel {
    fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast toast-success",
            NotificationLevel::Error => "toast toast-error",
            NotificationLevel::Info => "toast toast-info",
        }
    }
}

// push a toast onto the global stack and schedule its removal; callable from
// any event handler or timer callback
pub fn notify(message: impl Into<String>, level: NotificationLevel) {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);

    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    NOTIFICATIONS.with_mut(|v| {
        v.push(Notification {
            id,
            message: message.into(),
            level,
        })
    });

    let task = Timeout::new(DISMISS_MS, move || {
        NOTIFICATIONS.with_mut(|v| v.retain(|toast| toast.id != id));
    });
    task.forget();
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = NOTIFICATIONS.read();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.level.css_class(),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_level_maps_to_its_own_class() {
        assert_eq!(
            NotificationLevel::Success.css_class(),
            "toast toast-success"
        );
        assert_eq!(NotificationLevel::Error.css_class(), "toast toast-error");
        assert_eq!(NotificationLevel::Info.css_class(), "toast toast-info");
    }
}
