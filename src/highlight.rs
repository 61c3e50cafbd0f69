//! Highlighted text segmentation
//!
//! Splits a label into matched / unmatched runs for every non-overlapping,
//! case-insensitive occurrence of the highlight text. The highlight is taken
//! literally (no pattern syntax), so user input like `a+b` or `(` is safe.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// A run of text that either matched the highlight or didn't
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub value: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(value: &'a str) -> Self {
        Self { value, matched: false }
    }

    fn hit(value: &'a str) -> Self {
        Self { value, matched: true }
    }
}

/// Build the case-insensitive literal matcher for a highlight.
///
/// Returns `None` when there is nothing to match or the matcher can't be built.
fn matcher(highlight: &str) -> Option<Regex> {
    if highlight.is_empty() {
        return None;
    }

    match RegexBuilder::new(&regex::escape(highlight))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!(highlight, error = %e, "highlight pattern rejected");
            None
        }
    }
}

/// Segment `text` by occurrences of `highlight`.
///
/// Never fails: a missing, empty or unusable highlight yields one unmatched
/// segment equal to `text`. Concatenating the segments always gives back
/// `text` and no segment is empty, so empty text yields no segments at all.
pub fn render<'a>(text: &'a str, highlight: Option<&str>) -> Vec<Segment<'a>> {
    let Some(re) = highlight.and_then(matcher) else {
        return passthrough(text);
    };

    let mut segments = Vec::new();
    let mut last = 0;

    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        segments.push(Segment::hit(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

fn passthrough(text: &str) -> Vec<Segment<'_>> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::plain(text)]
    }
}
