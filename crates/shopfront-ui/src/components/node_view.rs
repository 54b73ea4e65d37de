//! Node View Component
//!
//! Renders one document element and, recursively, its children.
//! Clicks stop propagating in the webview and are dispatched once to the
//! page, which does its own bubbling over the document tree.

use dioxus::prelude::*;
use shopfront_core::dom::NodeId;

use crate::runtime::{dom_id, use_page_runtime};

/// Snapshot of what a node renders, taken so the host signal is not held during rsx
struct NodeSnapshot {
    tag: String,
    dom_id: String,
    class: String,
    style: String,
    text: String,
    inner_html: Option<String>,
    value: String,
    placeholder: String,
    children: Vec<NodeId>,
}

/// Render a document node
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for child in children {
///         NodeView { key: "{child.index()}", node: child }
///     }
/// }
/// ```
#[component]
pub fn NodeView(node: NodeId) -> Element {
    let runtime = use_page_runtime();

    let snapshot = {
        let host = runtime.host();
        let host = host.read();
        let doc = host.document();
        let Some(element) = doc.element(node) else {
            return rsx! {};
        };
        NodeSnapshot {
            tag: element.tag.clone(),
            dom_id: dom_id(node, element),
            class: element.classes.join(" "),
            style: element.style_attribute(),
            text: element.text.clone(),
            inner_html: element.inner_html.clone(),
            value: element.value.clone(),
            placeholder: element.placeholder.clone().unwrap_or_default(),
            children: doc.children(node).to_vec(),
        }
    };
    let NodeSnapshot {
        tag,
        dom_id,
        class,
        style,
        text,
        inner_html,
        value,
        placeholder,
        children,
    } = snapshot;

    let onclick = move |e: MouseEvent| {
        e.stop_propagation();
        runtime.click(node);
    };

    if tag == "input" {
        return rsx! {
            input {
                id: "{dom_id}",
                class: "{class}",
                style: "{style}",
                r#type: "search",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| runtime.set_value(node, e.value()),
                onfocus: move |_| runtime.focus_changed(node, true),
                onblur: move |_| runtime.focus_changed(node, false),
                onclick: onclick,
            }
        };
    }

    let content = rsx! {
        if !text.is_empty() {
            "{text}"
        }
        if let Some(html) = inner_html {
            div { dangerous_inner_html: "{html}" }
        }
        for child in children {
            NodeView { key: "{child.index()}", node: child }
        }
    };

    match tag.as_str() {
        "button" => rsx! {
            button { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "h1" => rsx! {
            h1 { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "h2" => rsx! {
            h2 { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "h3" => rsx! {
            h3 { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "p" => rsx! {
            p { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "span" => rsx! {
            span { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "header" => rsx! {
            header { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "footer" => rsx! {
            footer { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        "section" => rsx! {
            section { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
        _ => rsx! {
            div { id: "{dom_id}", class: "{class}", style: "{style}", onclick: onclick, {content} }
        },
    }
}
