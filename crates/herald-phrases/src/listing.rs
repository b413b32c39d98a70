//! Bucket listing parsing and key-to-phrase extraction.
//!
//! The listing endpoint returns an S3-style XML document. Every top-level
//! `<Contents>` entry carries a `<Key>` with the object key; the phrase is
//! the key with the configured leading prefix and any known image
//! extension stripped. Entries that do not match this shape are skipped
//! rather than failing the whole listing, so a partial or oddly shaped
//! document degrades to fewer (or zero) phrases instead of an error.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Result;

/// Trailing extensions removed from object keys.
const STRIP_SUFFIXES: [&str; 2] = [".jpg", ".png"];

/// Extract phrases from a bucket listing body.
///
/// Returns an error only when the body cannot be parsed as XML at all; a
/// well-formed document with no `<Contents>` entries yields an empty
/// collection.
pub fn extract_phrases(body: &str, key_prefix: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut phrases = Vec::new();
    let mut in_contents = false;
    let mut in_key = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"Contents" => in_contents = true,
                b"Key" if in_contents => in_key = true,
                _ => {}
            },
            Event::Text(e) if in_key => {
                // A key that fails to unescape is kept raw rather than
                // failing the listing; object keys are rarely escaped.
                let raw = e
                    .unescape()
                    .unwrap_or_else(|_| String::from_utf8_lossy(e.as_ref()));
                if let Some(phrase) = phrase_from_key(&raw, key_prefix) {
                    phrases.push(phrase);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"Key" => in_key = false,
                b"Contents" => in_contents = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(phrases)
}

/// Turn an object key into a phrase.
///
/// Strips `key_prefix` when present and at most one trailing extension
/// from [`STRIP_SUFFIXES`]. Keys that strip down to nothing (such as the
/// directory marker object named exactly like the prefix) yield `None`.
fn phrase_from_key(key: &str, key_prefix: &str) -> Option<String> {
    let mut phrase = key.strip_prefix(key_prefix).unwrap_or(key);

    for suffix in STRIP_SUFFIXES {
        if let Some(stripped) = phrase.strip_suffix(suffix) {
            phrase = stripped;
            break;
        }
    }

    if phrase.is_empty() {
        None
    } else {
        Some(phrase.to_owned())
    }
}
