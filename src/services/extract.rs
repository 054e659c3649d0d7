// src/services/extract.rs

//! Bulletin extraction from a fetched day page.
//!
//! The ticker publishes each bulletin as a single `<pre>` block of literal
//! text with embedded hyperlinks that are themselves plain-text image URLs.
//! Extraction serializes the block's children structurally (never by slicing
//! a serializer's string output), rewriting every hyperlink into an inline
//! image along the way, and separately matches the block's visible text
//! against the fixed banner pattern to recover the title and publish date.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Entry, Heading};
use crate::utils::central_offset;

/// Inline style applied to rewritten images so each gets its own space.
const IMG_STYLE: &str = "display: block; margin-right: auto; margin-left: auto; width: 100%;";

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Extractor output for one page.
#[derive(Debug, Clone)]
pub struct Extracted {
    /// HTML fragment of the bulletin body with hyperlinks rewritten to images
    pub content: String,

    /// Title and date, absent when the banner pattern did not match
    pub heading: Option<Heading>,
}

impl Extracted {
    /// Merge extractor output with the page URL it came from.
    pub fn assemble(self, source_url: impl Into<String>) -> Entry {
        Entry {
            heading: self.heading,
            content: self.content,
            source_url: source_url.into(),
        }
    }
}

/// Extract the bulletin from a raw day-page body.
///
/// Fails only when the page has no `<pre>` content block. A block whose text
/// does not match the banner pattern still yields the rewritten HTML
/// fragment, just without a heading.
pub fn extract_bulletin(html: &str) -> Result<Extracted> {
    let document = Html::parse_document(html);
    let pre_selector = Selector::parse("pre").expect("static selector");

    let block = document
        .select(&pre_selector)
        .next()
        .ok_or_else(|| AppError::extract("no <pre> bulletin block in page"))?;

    let mut content = String::new();
    serialize_children(block, &mut content);

    let heading = parse_heading(&visible_text(block));

    Ok(Extracted { content, heading })
}

/// Serialize an element's children, not its own wrapping tags.
fn serialize_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            serialize_element(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            push_escaped_text(text, out);
        }
    }
}

fn serialize_element(element: ElementRef<'_>, out: &mut String) {
    let value = element.value();

    // Hyperlinks become inline images: src from the link target, alt from the
    // link's visible text.
    if value.name() == "a" {
        let href = value.attr("href").unwrap_or_default();
        let alt: String = element.text().collect();
        out.push_str("<img src=\"");
        push_escaped_attr(href, out);
        out.push_str("\" alt=\"");
        push_escaped_attr(&alt, out);
        out.push_str("\" style=\"");
        out.push_str(IMG_STYLE);
        out.push_str("\">");
        return;
    }

    out.push('<');
    out.push_str(value.name());
    for (name, attr_value) in value.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        push_escaped_attr(attr_value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&value.name()) {
        return;
    }

    serialize_children(element, out);
    out.push_str("</");
    out.push_str(value.name());
    out.push('>');
}

/// Visible text of the block, newline-joined, preserving line structure.
///
/// Anchor text is excluded: hyperlinks are rewritten to images, which carry
/// no visible text.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_text(element, &mut parts);
    parts.join("\n")
}

fn collect_text(element: ElementRef<'_>, parts: &mut Vec<String>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if child_element.value().name() != "a" {
                collect_text(child_element, parts);
            }
        } else if let Some(text) = child.value().as_text() {
            parts.push(text.to_string());
        }
    }
}

static HEADING_RE: OnceLock<Regex> = OnceLock::new();

fn heading_regex() -> &'static Regex {
    HEADING_RE.get_or_init(|| {
        Regex::new(
            r"MESONET TICKER \.\.\. MESONET TICKER \.\.\. MESONET TICKER \.\.\. MESONET TICKER \.\.\.\n(?P<date>\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4})[^\n]*\n(?P<title>[^\n]*)\n",
        )
        .expect("static heading pattern")
    })
}

/// Match the banner/date/title layout and stamp the date with fixed UTC-6.
///
/// One atomic match produces both fields; a mismatch (or an impossible date
/// like February 30) yields no heading at all.
fn parse_heading(text: &str) -> Option<Heading> {
    let captures = heading_regex().captures(text)?;

    let title = captures.name("title")?.as_str().trim().to_string();
    let date_text = normalize_whitespace(captures.name("date")?.as_str());
    let date = NaiveDate::parse_from_str(&date_text, "%B %d, %Y").ok()?;

    let published = date
        .and_time(NaiveTime::MIN)
        .and_local_timezone(central_offset())
        .single()?;

    Some(Heading { title, published })
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_escaped_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
