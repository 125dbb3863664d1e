//! Response sanitization
//!
//! Two stages, applied in order to every successful provider response:
//!
//! 1. [`strip_fences`] removes markdown code-fence wrappers the model
//!    sometimes adds despite instructions (` ```xml `, ` ```svg `, bare
//!    ` ``` `).
//! 2. [`sanitize_svg`] rebuilds the markup from an allow-list of geometric
//!    elements and presentation attributes. Anything else (`script`,
//!    `foreignObject`, event handlers, hyperlinks, prose around the root)
//!    is stripped. A payload without an `<svg>` element is rejected outright.
//!
//! The output is the only markup that ever reaches a display surface.

/// Elements that may appear in a badge. Everything else is dropped together
/// with its subtree.
const ALLOWED_ELEMENTS: &[&str] = &[
    "svg", "g", "path", "circle", "ellipse", "rect", "line", "polyline", "polygon", "title",
    "desc",
];

/// Attributes that survive filtering. Exact match; `on*` handlers, `href`,
/// `style` and friends are absent on purpose.
const ALLOWED_ATTRIBUTES: &[&str] = &[
    "xmlns",
    "viewBox",
    "width",
    "height",
    "d",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "points",
    "fill",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-dasharray",
    "fill-rule",
    "opacity",
    "transform",
];

/// Error types for sanitization
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("payload contains no <svg> element")]
    NotSvg,
}

/// Remove markdown fence markers and surrounding whitespace.
///
/// Identity (modulo trim) on fence-free input. Mirrors the cleanup the model
/// instructions already ask for, as a backstop for when they are ignored.
pub fn strip_fences(raw: &str) -> String {
    raw.replace("```xml", "")
        .replace("```svg", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Rebuild `input` keeping only allow-listed elements and attributes.
///
/// Disallowed elements are dropped with their entire subtree; text content
/// survives only inside kept elements, so prose around the badge vanishes.
/// Returns [`SanitizeError::NotSvg`] when no `<svg>` element is present.
pub fn sanitize_svg(input: &str) -> Result<String, SanitizeError> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut saw_svg = false;
    // Depth of kept elements we are inside (text is only emitted when > 0).
    let mut emit_depth = 0usize;
    // Depth inside a dropped element's subtree (everything is skipped while > 0).
    let mut drop_depth = 0usize;

    while cursor < input.len() {
        let rest = &input[cursor..];
        if !rest.starts_with('<') {
            let text_end = rest.find('<').map_or(input.len(), |n| cursor + n);
            if drop_depth == 0 && emit_depth > 0 {
                out.push_str(&input[cursor..text_end]);
            }
            cursor = text_end;
            continue;
        }

        if rest.starts_with("<!--") {
            cursor = rest.find("-->").map_or(input.len(), |n| cursor + n + 3);
            continue;
        }
        if rest.starts_with("<?") || rest.starts_with("<!") {
            cursor = rest.find('>').map_or(input.len(), |n| cursor + n + 1);
            continue;
        }

        // `>` inside a quoted attribute value does not close the tag.
        let Some(tag_len) = find_tag_end(rest) else {
            break; // truncated tag, drop the remainder
        };
        let tag = &rest[1..tag_len];
        cursor += tag_len + 1;

        if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            if drop_depth > 0 {
                drop_depth -= 1;
            } else if emit_depth > 0 && element_allowed(name) {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                emit_depth -= 1;
            }
            continue;
        }

        let self_closing = tag.trim_end().ends_with('/');
        let body = tag.trim_end().trim_end_matches('/');
        let name_end = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());
        let (name, attrs) = body.split_at(name_end);

        if drop_depth > 0 {
            if !self_closing {
                drop_depth += 1;
            }
            continue;
        }

        if element_allowed(name) {
            if name == "svg" {
                saw_svg = true;
            }
            out.push('<');
            out.push_str(name);
            write_filtered_attributes(attrs, &mut out);
            if self_closing {
                out.push_str(" />");
            } else {
                out.push('>');
                emit_depth += 1;
            }
        } else if !self_closing {
            drop_depth += 1;
        }
    }

    if !saw_svg {
        return Err(SanitizeError::NotSvg);
    }
    Ok(out.trim().to_string())
}

fn element_allowed(name: &str) -> bool {
    ALLOWED_ELEMENTS.contains(&name)
}

fn attribute_allowed(name: &str) -> bool {
    ALLOWED_ATTRIBUTES.contains(&name)
}

/// Length up to (excluding) the closing `>` of the tag starting at `rest[0]`,
/// honoring quoted attribute values. `None` if the tag never closes.
fn find_tag_end(rest: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, c) in rest.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return Some(idx),
            (None, _) => {}
        }
    }
    None
}

/// Parse the attribute section of a start tag, appending allow-listed
/// attributes to `out` as ` name="value"`.
fn write_filtered_attributes(raw: &str, out: &mut String) {
    let mut rest = raw.trim();
    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        let mut value: Option<&str> = None;
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            if let Some(quote) = after_eq.chars().next().filter(|c| *c == '"' || *c == '\'') {
                let inner = &after_eq[1..];
                match inner.find(quote) {
                    Some(close) => {
                        value = Some(&inner[..close]);
                        rest = &inner[close + 1..];
                    }
                    None => {
                        value = Some(inner);
                        rest = "";
                    }
                }
            } else {
                let value_end = after_eq
                    .find(|c: char| c.is_whitespace())
                    .unwrap_or(after_eq.len());
                value = Some(&after_eq[..value_end]);
                rest = &after_eq[value_end..];
            }
        }
        rest = rest.trim_start();

        if name.is_empty() {
            // Stray `=` or malformed token; skip one character (at its
            // UTF-8 width) so the scan always advances.
            let width = rest.chars().next().map_or(0, char::len_utf8);
            rest = rest[width..].trim_start();
            continue;
        }

        if attribute_allowed(name) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&value.unwrap_or_default().replace('"', "&quot;"));
            out.push('"');
        }
    }
}
