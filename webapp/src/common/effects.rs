use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

// cosmetic scroll behavior
//
// reveal_cards() wires an IntersectionObserver that fades cards in the first
// time they scroll into view; scroll_to() smooth-scrolls to an in-page
// section.  both skip silently when the page lacks the elements in question.

const REVEAL_SELECTOR: &str = ".feature-card, .pricing-card, .stat-card";
const REVEAL_ANIMATION: &str = "fade-in-up 0.6s ease-out forwards";
const REVEAL_THRESHOLD: f64 = 0.1;

pub fn reveal_cards() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };

                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = element.style().set_property("animation", REVEAL_ANIMATION);
                }

                // each card animates once
                observer.unobserve(&target);
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("intersection observer unavailable: {err:?}");
            return;
        }
    };

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };

        // start hidden; the animation reveals it
        let _ = element.style().set_property("opacity", "0");
        observer.observe(&element);
    }

    // the observer and its callback live for the rest of the page
    callback.forget();
}

pub fn scroll_to(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let Some(target) = document.get_element_by_id(id) else {
        warn!("no scroll target #{id}");
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
