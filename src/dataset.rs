//! Whitespace-tokenized-integer line format shared by the corpus file and
//! the query stream. Out of the algorithmic core per the spec, but required
//! for a runnable crate.

use std::io::BufRead;

use log::warn;

use crate::ordset::OrdSet;

/// Parses one line of whitespace-separated non-negative decimal integers
/// into an [`OrdSet`]. Returns `None` if the line has no parseable tokens
/// after trimming, or if any token fails to parse as a `u32` — the caller is
/// expected to log and skip rather than treat this as fatal.
///
/// Tokens are inserted keep-sorted (`OrdSet::insert`) rather than assumed
/// pre-sorted, since malformed or hand-written input isn't guaranteed to be
/// ascending even though well-formed corpora are.
pub fn parse_line(line: &str) -> Option<OrdSet> {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek()?;

    let mut set = OrdSet::new();
    for tok in tokens {
        let el: u32 = tok.parse().ok()?;
        set.insert(el);
    }
    set.open();
    Some(set)
}

/// Streams `r` line by line, applying [`parse_line`] and silently dropping
/// (after a `warn!`-level log) any line that fails to parse.
pub fn read_sets<R: BufRead>(r: R) -> impl Iterator<Item = OrdSet> {
    r.lines().enumerate().filter_map(|(i, line)| {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("line {}: read error: {e}", i + 1);
                return None;
            }
        };
        match parse_line(&line) {
            Some(set) => Some(set),
            None => {
                if !line.trim().is_empty() {
                    warn!("line {}: malformed, skipping", i + 1);
                }
                None
            }
        }
    })
}
