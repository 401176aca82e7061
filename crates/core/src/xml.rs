//! Minimal XML document model for stats API responses.
//!
//! The stats API answers every query with a small XML document whose
//! payload lives almost entirely in element attributes. [`parse_document`]
//! turns the raw text into an owned [`XmlElement`] tree, and the query
//! helpers cover the handful of lookups the bot needs (`.//name`,
//! `./a/b`, direct children).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::XmlError;

/// A parsed XML element with its attributes, trimmed text and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Value of the attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First descendant named `name` in document order.
    ///
    /// The element itself is never matched, so `root.find("x")` behaves
    /// like the XPath `.//x` evaluated from `root`.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Direct children named `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Follow a path of direct-child names (`./a/b`), taking the first
    /// match at each step.
    pub fn child_path(&self, path: &[&str]) -> Option<&XmlElement> {
        path.iter().try_fold(self, |current, segment| {
            current.children.iter().find(|child| child.name == *segment)
        })
    }
}

/// Parse an XML document and return its root element.
///
/// Comments, declarations, doctypes and processing instructions are
/// skipped. Text and CDATA pieces are concatenated as they appear (text
/// unescaped, CDATA verbatim) and the result is trimmed once, when the
/// element closes.
pub fn parse_document(input: &str) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_str(input);
    // End tags are matched against the open stack below.
    reader.config_mut().check_end_names = false;

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::TrailingContent);
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(end) => {
                let found = std::str::from_utf8(end.name().as_ref())?.to_string();
                let mut element = match stack.pop() {
                    Some(element) => element,
                    None => {
                        return Err(XmlError::Syntax(format!(
                            "unexpected closing tag </{found}>"
                        )))
                    }
                };
                if element.name != found {
                    return Err(XmlError::MismatchedTag {
                        expected: element.name,
                        found,
                    });
                }
                element.text = element.text.trim().to_string();
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                push_text(&mut stack, root.is_some(), &text)?;
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                let text = std::str::from_utf8(&bytes)?;
                push_text(&mut stack, root.is_some(), text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed(open.name));
    }
    root.ok_or(XmlError::NoRoot)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        ..XmlElement::default()
    })
}

/// Hand a finished element to its parent, or make it the document root.
fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => return Err(XmlError::TrailingContent),
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], have_root: bool, text: &str) -> Result<(), XmlError> {
    if text.is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(current) => current.text.push_str(text),
        // Whitespace around the root element.
        None if text.trim().is_empty() => {}
        None if have_root => return Err(XmlError::TrailingContent),
        None => {
            return Err(XmlError::Syntax(
                "text before document element".to_string(),
            ))
        }
    }
    Ok(())
}
