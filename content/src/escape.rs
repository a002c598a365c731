//! Escaping of `<code>` element content in HTML fragments.
//!
//! Reference descriptions embed code samples such as
//! `<code>createCanvas(<b>w</b>, h)</code>` where the inner markup is meant
//! to be shown literally. The fragment is parsed with html5ever, the inner
//! markup of every `<code>` element is turned into text, and the fragment is
//! serialized again, which leaves that markup entity-escaped.

use crate::error::ContentError;
use crate::Result;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{NodeOrText, TreeSink};
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use tracing::debug;

/// Escape the inner markup of every `<code>` element of an HTML fragment.
///
/// Only `<code>` contents change; the rest of the fragment keeps its
/// structure. Escaping is not idempotent: running the result through this
/// function again escapes the entities a second time.
///
/// ```rust
/// use content::escape::escape_code_tags_content;
///
/// let html = escape_code_tags_content("<code><b>x</b></code>").unwrap();
/// assert_eq!(html, "<code>&lt;b&gt;x&lt;/b&gt;</code>");
/// ```
pub fn escape_code_tags_content(html: &str) -> Result<String> {
    let mut dom = parse_fragment(html);
    let body = find_element(&dom.document, "body").ok_or_else(|| {
        ContentError::TransformationError("parsed fragment has no body element".to_string())
    })?;
    inline_template_contents(&mut dom, &body);

    let mut code_elements = Vec::new();
    collect_elements(&body, "code", &mut code_elements);
    debug!("Escaping {} code elements", code_elements.len());

    for code in &code_elements {
        let inner_html = serialize_children(code)?;
        code.children.borrow_mut().clear();
        if !inner_html.is_empty() {
            dom.append(code, NodeOrText::AppendText(StrTendril::from(inner_html)));
        }
    }

    serialize_children(&body)
}

/// Escape text for literal display in HTML (`& < > " ' ` are replaced)
pub fn escape_html_entities(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '`' => escaped.push_str("&#x60;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Parse a fragment by placing it in the body of a minimal document
fn parse_fragment(html: &str) -> RcDom {
    let wrapped = format!(
        "<!DOCTYPE html><html><head></head><body>{}</body></html>",
        html
    );
    parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .one(wrapped.as_bytes())
}

/// Move the contents of every `<template>` under the element itself.
///
/// The tree builder keeps template contents in a separate fragment that is
/// neither walked nor serialized as children.
fn inline_template_contents(dom: &mut RcDom, handle: &Handle) {
    let children: Vec<Handle> = handle.children.borrow().iter().cloned().collect();
    for child in &children {
        inline_template_contents(dom, child);
    }

    if let NodeData::Element {
        template_contents, ..
    } = &handle.data
    {
        let contents = template_contents.borrow_mut().take();
        if let Some(fragment) = contents {
            inline_template_contents(dom, &fragment);
            dom.reparent_children(&fragment, handle);
        }
    }
}

fn is_element(handle: &Handle, name: &str) -> bool {
    matches!(&handle.data, NodeData::Element { name: qname, .. } if &*qname.local == name)
}

/// First element with the given local name, in document order
fn find_element(handle: &Handle, name: &str) -> Option<Handle> {
    if is_element(handle, name) {
        return Some(handle.clone());
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, name))
}

/// Every descendant element with the given local name, in document order
fn collect_elements(handle: &Handle, name: &str, found: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if is_element(child, name) {
            found.push(child.clone());
        }
        collect_elements(child, name, found);
    }
}

fn serialize_children(handle: &Handle) -> Result<String> {
    let mut bytes = Vec::new();
    let serializable: SerializableHandle = handle.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    serialize(&mut bytes, &serializable, opts)
        .map_err(|e| ContentError::TransformationError(format!("HTML serialization failed: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| ContentError::TransformationError(format!("HTML serialization failed: {}", e)))
}
