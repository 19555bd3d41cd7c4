use anyhow::anyhow;
use dioxus::prelude::*;
use gloo_net::http::Request;
use tracing::warn;

// shared page fragments
//
// small static snippets (the footer, the sidebar link list) live under
// assets/fragments and are fetched when the component mounts.  a missing
// fragment is a degraded page, not an error: the component logs to the
// console and renders nothing.

pub async fn fetch_fragment(path: &str) -> anyhow::Result<String> {
    let response = Request::get(path).send().await?;

    if !response.ok() {
        return Err(anyhow!(
            "failed to load {}: status {}",
            path,
            response.status()
        ));
    }

    Ok(response.text().await?)
}

#[derive(Clone, PartialEq, Props)]
pub struct HtmlFragmentProps {
    path: &'static str,
}

#[component]
pub fn HtmlFragment(props: HtmlFragmentProps) -> Element {
    let path = props.path;

    let fragment = use_resource(move || async move { fetch_fragment(path).await });

    match &*fragment.read() {
        Some(Ok(html)) => rsx! {
            div { class: "fragment", dangerous_inner_html: "{html}" }
        },
        Some(Err(err)) => {
            warn!("fragment {path} unavailable: {err}");
            rsx! {}
        }
        None => rsx! {},
    }
}
