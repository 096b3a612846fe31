//! Output sanitization for free-text fields
//!
//! Whitelist filter over a small tag scanner:
//! - whitelisted tags are re-emitted in canonical form with only their
//!   whitelisted attributes (`<IMG SRC=x onerror=..>` → `<img src="x">`)
//! - any other tag is escaped as text (`<script>` → `&lt;script&gt;`)
//! - comments are dropped, stray `<` / `>` are escaped
//!
//! Output only contains `<` at the start of a canonical whitelisted tag, so
//! running the filter again yields the same string.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

const CELL: &[&str] = &["width", "rowspan", "colspan", "align", "valign"];
const COL: &[&str] = &["align", "valign", "span", "width"];

/// Tags allowed through, with the attributes each may keep.
const ALLOWED: &[(&str, &[&str])] = &[
    ("a", &["target", "href", "title"]),
    ("abbr", &["title"]),
    ("address", &[]),
    ("area", &["shape", "coords", "href", "alt"]),
    ("article", &[]),
    ("aside", &[]),
    ("b", &[]),
    ("bdi", &["dir"]),
    ("bdo", &["dir"]),
    ("big", &[]),
    ("blockquote", &["cite"]),
    ("br", &[]),
    ("caption", &[]),
    ("center", &[]),
    ("cite", &[]),
    ("code", &[]),
    ("col", COL),
    ("colgroup", COL),
    ("dd", &[]),
    ("del", &["datetime"]),
    ("details", &["open"]),
    ("div", &[]),
    ("dl", &[]),
    ("dt", &[]),
    ("em", &[]),
    ("figcaption", &[]),
    ("figure", &[]),
    ("font", &["color", "size", "face"]),
    ("footer", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("header", &[]),
    ("hr", &[]),
    ("i", &[]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("ins", &["datetime"]),
    ("li", &[]),
    ("mark", &[]),
    ("nav", &[]),
    ("ol", &[]),
    ("p", &[]),
    ("pre", &[]),
    ("s", &[]),
    ("section", &[]),
    ("small", &[]),
    ("span", &[]),
    ("strike", &[]),
    ("strong", &[]),
    ("sub", &[]),
    ("summary", &[]),
    ("sup", &[]),
    ("table", &["width", "border", "align", "valign"]),
    ("tbody", &["align", "valign"]),
    ("td", CELL),
    ("tfoot", &["align", "valign"]),
    ("th", CELL),
    ("thead", &["align", "valign"]),
    ("tr", &["rowspan", "align", "valign"]),
    ("tt", &[]),
    ("u", &[]),
    ("ul", &[]),
];

static ALLOWED_TAGS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| ALLOWED.iter().copied().collect());

/// Attributes whose value is navigated to or fetched by the browser
const URL_ATTRS: &[&str] = &["href", "src", "cite"];

/// Relative references and the few schemes we let through
static SAFE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://|mailto:|ftp://|[/#?.])").expect("invalid url regex")
});

/// Remove active markup from `input`, keeping benign formatting tags.
///
/// # Example
/// ```
/// use bookmarks_server::sanitize::sanitize;
///
/// assert_eq!(sanitize("<b>ok</b>"), "<b>ok</b>");
/// assert_eq!(sanitize("<script>x</script>"), "&lt;script&gt;x&lt;/script&gt;");
/// ```
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(&['<', '>'][..]) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('>') {
            out.push_str("&gt;");
            rest = &tail[1..];
            continue;
        }

        if let Some(len) = comment_len(tail) {
            rest = &tail[len..];
            continue;
        }

        match Tag::parse(tail) {
            Some(tag) => {
                match ALLOWED_TAGS.get(tag.name.as_str()) {
                    Some(allowed) => tag.write_canonical(allowed, &mut out),
                    None => out.push_str(&escape_text(&tail[..tag.len])),
                }
                rest = &tail[tag.len..];
            }
            None => {
                out.push_str("&lt;");
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Length of a complete `<!-- ... -->` comment at the start of `s`.
fn comment_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix("<!--")?;
    body.find("-->").map(|end| 4 + end + 3)
}

/// A parsed start or end tag
#[derive(Debug)]
struct Tag<'a> {
    name: String,
    closing: bool,
    self_closing: bool,
    attrs: Vec<(String, Option<&'a str>)>,
    /// Bytes consumed from the input, including `<` and `>`
    len: usize,
}

impl<'a> Tag<'a> {
    /// Parse a tag at the start of `s` (which begins with `<`).
    ///
    /// Returns `None` when the text is not a tag: no name after `<`, or no
    /// closing `>` / quote before the end of input.
    fn parse(s: &'a str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut i = 1;

        let closing = bytes.get(i) == Some(&b'/');
        if closing {
            i += 1;
        }

        let name_start = i;
        if !bytes.get(i)?.is_ascii_alphabetic() {
            return None;
        }
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        let name = s[name_start..i].to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match *bytes.get(i)? {
                b'>' => {
                    i += 1;
                    break;
                }
                b'/' => {
                    i += 1;
                    if bytes.get(i) == Some(&b'>') {
                        self_closing = true;
                        i += 1;
                        break;
                    }
                    continue;
                }
                _ => {}
            }

            let attr_start = i;
            while i < bytes.len() && !is_attr_name_end(bytes[i]) {
                i += 1;
            }
            if i == attr_start {
                // lone '='
                i += 1;
                continue;
            }
            let attr_name = s[attr_start..i].to_ascii_lowercase();

            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if bytes.get(j) != Some(&b'=') {
                attrs.push((attr_name, None));
                continue;
            }
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }

            let value = match *bytes.get(j)? {
                quote @ (b'"' | b'\'') => {
                    let end = j + 1 + s[j + 1..].find(quote as char)?;
                    i = end + 1;
                    &s[j + 1..end]
                }
                _ => {
                    let start = j;
                    while j < bytes.len() && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
                        j += 1;
                    }
                    i = j;
                    &s[start..j]
                }
            };
            attrs.push((attr_name, Some(value)));
        }

        Some(Self {
            name,
            closing,
            self_closing,
            attrs,
            len: i,
        })
    }

    fn write_canonical(&self, allowed: &[&str], out: &mut String) {
        if self.closing {
            out.push_str("</");
            out.push_str(&self.name);
            out.push('>');
            return;
        }

        out.push('<');
        out.push_str(&self.name);

        let mut written: Vec<&str> = Vec::new();
        for (name, value) in &self.attrs {
            if !allowed.contains(&name.as_str()) || written.contains(&name.as_str()) {
                continue;
            }
            match value {
                Some(raw) => {
                    let value = decode_attr(raw);
                    if URL_ATTRS.contains(&name.as_str()) && !is_safe_url(&value) {
                        continue;
                    }
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(&value));
                    out.push('"');
                }
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
            written.push(name);
        }

        if self.self_closing {
            out.push_str(" /");
        }
        out.push('>');
    }
}

fn is_attr_name_end(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/')
}

fn is_safe_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    SAFE_URL_RE.is_match(&compact) || !(compact.contains(':') || compact.contains('&'))
}

fn escape_text(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn decode_attr(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}
