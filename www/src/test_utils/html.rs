//! HTML assertions
//!
//! Tag-balance checks for rendered pages.

use regex::Regex;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Panic unless every non-void element is closed in order and the document
/// has exactly one root, `<html>`
pub fn assert_well_formed(html: &str) {
    let tag = Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*?(/?)>").unwrap();
    let mut stack: Vec<String> = Vec::new();
    let mut roots = 0;

    for caps in tag.captures_iter(html) {
        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();
        let self_closing = !caps[3].is_empty();

        if closing {
            let open = stack
                .pop()
                .unwrap_or_else(|| panic!("</{}> closes nothing", name));
            assert_eq!(open, name, "</{}> closes <{}>", name, open);
        } else if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
            if stack.is_empty() {
                roots += 1;
                assert_eq!(name, "html", "root element is <{}>", name);
            }
            stack.push(name);
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    assert_eq!(roots, 1, "expected a single <html> root");
}

/// Contents of the "Latest Stable Version" table body
pub fn stable_table_body(page: &str) -> &str {
    let open = "<table id=\"latest-stable\" width=\"100%\">\n<tbody>";
    let start = page.find(open).expect("latest-stable table present") + open.len();
    let end = start + page[start..].find("</tbody>").expect("tbody closed");
    &page[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_balanced_document() {
        assert_well_formed("<html><head><meta charset=\"x\" /></head><body><br /><p>a</p></body></html>");
    }

    #[test]
    #[should_panic(expected = "closes")]
    fn rejects_crossed_tags() {
        assert_well_formed("<html><body><a><span></a></span></body></html>");
    }

    #[test]
    #[should_panic(expected = "unclosed")]
    fn rejects_dangling_tags() {
        assert_well_formed("<html><body><table><tbody>");
    }

    #[test]
    #[should_panic(expected = "single <html> root")]
    fn rejects_two_roots() {
        assert_well_formed("<html></html><html></html>");
    }
}
