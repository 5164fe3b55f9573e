//! HTML reduction before transformation
//!
//! Pages are cut down to their structural content: noise elements are dropped
//! with their subtrees, every remaining element loses its attributes, and only
//! the inner markup of `<body>` is kept. Smaller input means cheaper and less
//! distracted transformer calls.
//!
//! The document tree is edited in place and serialized by html5ever, so
//! raw-text elements keep their exact contents and a second pass over the
//! output yields the same markup.

use scraper::{Html, Node, Selector};

/// Elements removed together with everything inside them
pub const DENYLIST: &[&str] = &[
    "script", "style", "nav", "footer", "svg", "iframe", "form", "noscript", "header",
];

/// Elements whose first newline is eaten by the parser
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Reduces raw HTML to attribute-free body markup
///
/// Returns an empty string when the document has no `<body>`.
///
/// # Example
///
/// ```
/// use agent_pages::transform::normalize;
///
/// let html = r#"<html><body><nav>menu</nav><div class="x"><h1 id="t">Hi</h1></div></body></html>"#;
/// assert_eq!(normalize(html), "<div><h1>Hi</h1></div>");
/// ```
pub fn normalize(html: &str) -> String {
    let mut document = Html::parse_document(html);
    strip_noise(&mut document);

    let body = match Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
    {
        Some(body) => body,
        None => return String::new(),
    };

    body.inner_html().trim().to_string()
}

/// Returns true if the element is dropped with its subtree
fn is_denied(name: &str) -> bool {
    DENYLIST.contains(&name)
}

/// Detaches denylisted subtrees and comments, and clears every attribute
fn strip_noise(document: &mut Html) {
    let mut detached = Vec::new();
    let mut stripped = Vec::new();
    let mut reopened = Vec::new();

    for node in document.tree.nodes() {
        match node.value() {
            Node::Element(element) if is_denied(element.name()) => detached.push(node.id()),
            Node::Element(element) => {
                stripped.push(node.id());

                if LEADING_NEWLINE_ELEMENTS.contains(&element.name()) {
                    if let Some(first) = node.first_child() {
                        if first.value().as_text().is_some_and(|t| t.starts_with('\n')) {
                            reopened.push(first.id());
                        }
                    }
                }
            }
            // Comments and processing instructions carry no content
            Node::Comment(_) | Node::ProcessingInstruction(_) => detached.push(node.id()),
            _ => {}
        }
    }

    for id in stripped {
        if let Some(mut node) = document.tree.get_mut(id) {
            if let Node::Element(element) = node.value() {
                element.attrs.clear();
            }
        }
    }

    // The serializer does not write back the newline the parser dropped
    for id in reopened {
        if let Some(mut node) = document.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                text.text = format!("\n{}", &*text.text).into();
            }
        }
    }

    for id in detached {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}
