//! Parsing of group arguments such as `0-12` or `3,7,11,20-29`.

use anyhow::{Result, anyhow, bail};
use winnow::ModalResult;
use winnow::ascii::digit1;
use winnow::combinator::{eof, opt, preceded, separated, terminated};
use winnow::prelude::*;

/// A single element id, or an inclusive range of them.
fn span(input: &mut &str) -> ModalResult<(usize, Option<usize>)> {
    fn element(input: &mut &str) -> ModalResult<usize> {
        digit1.parse_to().parse_next(input)
    }

    (element, opt(preceded('-', element))).parse_next(input)
}

/// Expand a comma separated list of ids and ranges into element ids, in the
/// order given. Range and overlap checks are left to the codec.
pub(crate) fn parse_group(text: &str) -> Result<Vec<usize>> {
    let mut input = text.trim();
    let spans: Vec<(usize, Option<usize>)> = terminated(separated(1.., span, ','), eof)
        .parse_next(&mut input)
        .map_err(|_| anyhow!("invalid group {text:?}: expected ids or ranges like 0-12,20"))?;

    let mut elements = Vec::new();
    for (start, end) in spans {
        let end = end.unwrap_or(start);
        if end < start {
            bail!("invalid group {text:?}: range {start}-{end} is descending");
        }
        elements.extend(start..=end);
    }
    Ok(elements)
}
