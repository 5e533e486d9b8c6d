//! Fragment sanitization
//!
//! The feed summarizer's output is embedded into the page without escaping,
//! so it is parsed and rebuilt from plain table markup before it gets there.

use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Html, Node};
use url::Url;

/// How far the summarizer's HTML is trusted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FragmentPolicy {
    /// Inline the fragment exactly as returned
    Trusted,
    /// Strip active content before inlining
    #[default]
    Sanitized,
}

impl FragmentPolicy {
    /// Parse a config value; anything unrecognised stays sanitized
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "trusted" => FragmentPolicy::Trusted,
            "sanitized" => FragmentPolicy::Sanitized,
            other => {
                tracing::warn!("Unknown fragment policy '{}', using sanitized", other);
                FragmentPolicy::Sanitized
            }
        }
    }

    pub fn apply(self, fragment: &str) -> String {
        match self {
            FragmentPolicy::Trusted => fragment.to_string(),
            FragmentPolicy::Sanitized => sanitize_fragment(fragment),
        }
    }
}

/// Elements copied to the output; anything else is unwrapped
const ALLOWED_ELEMENTS: &[&str] = &[
    "a", "b", "br", "code", "em", "i", "p", "small", "span", "strong", "td", "th", "tr",
];

/// Elements dropped together with everything inside them
const DROPPED_ELEMENTS: &[&str] = &[
    "embed", "iframe", "math", "noembed", "noframes", "noscript", "object", "script", "style",
    "svg", "template", "textarea", "title", "xmp",
];

const VOID_ELEMENTS: &[&str] = &["br"];

const GENERIC_ATTRIBUTES: &[&str] = &["align", "class", "title", "valign"];
const CELL_ATTRIBUTES: &[&str] = &["colspan", "nowrap", "rowspan", "width"];
const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Rebuild an HTML fragment of table rows from an allow-list of elements
/// and attributes.
///
/// The fragment is parsed as the body of a table, which is where it gets
/// inlined. Scripts, styles and embedded content are dropped along with
/// their content. Event handlers are not on the attribute allow-list. Links
/// survive only when relative or with an http, https or mailto scheme,
/// checked after character references are decoded. Rows written with
/// double-quoted attributes and `<br />` come back byte-identical.
pub fn sanitize_fragment(fragment: &str) -> String {
    let document = Html::parse_fragment(&format!("<table><tbody>{}</tbody></table>", fragment));

    let mut out = String::with_capacity(fragment.len());
    write_children(document.root_element(), &mut out);
    out
}

fn write_children(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => {
                let text: &str = &text.text;
                out.push_str(&encode_text(text));
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(element, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_ELEMENTS.contains(&name) {
        return;
    }
    if !ALLOWED_ELEMENTS.contains(&name) {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    for (attr, value) in element.value().attrs() {
        if allowed_attribute(name, attr, value) {
            out.push_str(&format!(" {}=\"{}\"", attr, encode_double_quoted_attribute(value)));
        }
    }

    if VOID_ELEMENTS.contains(&name) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn allowed_attribute(element: &str, attr: &str, value: &str) -> bool {
    match (element, attr) {
        ("a", "href") => safe_link(value),
        ("td" | "th", attr) if CELL_ATTRIBUTES.contains(&attr) => true,
        (_, attr) => GENERIC_ATTRIBUTES.contains(&attr),
    }
}

/// Relative links are fine; absolute ones need a known scheme
fn safe_link(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => LINK_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
