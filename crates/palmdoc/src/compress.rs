use crate::buffer::Output;
use crate::error::Result;
use crate::matcher::MatchFinder;
use crate::token::{self, MATCH_MARGIN, MAX_RUN};

#[derive(Debug, Default)]
struct Stats {
    literals: usize,
    runs: usize,
    space_pairs: usize,
    back_references: usize,
}

/// Compresses `data` into a PalmDOC stream.
///
/// The parse is greedy: at each position the longest available
/// back-reference wins, then a space pair, a plain literal or a binary run.
/// The output is deterministic and always decodes back to `data`.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Output::with_capacity(data.len())?;
    let mut finder = MatchFinder::new(data);
    let mut stats = Stats::default();
    let mut i = 0;

    while i < data.len() {
        if i >= MATCH_MARGIN && data.len() - i >= MATCH_MARGIN {
            if let Some(m) = finder.find(i) {
                tracing::trace!(position = i, distance = m.distance, length = m.length, "back-reference");
                out.extend(&token::pack_back_reference(m.distance, m.length))?;
                stats.back_references += 1;
                i += m.length;
                continue;
            }
        }

        let c = data[i];
        match data.get(i + 1) {
            Some(&next) if c == b' ' && token::is_pair_tail(next) => {
                out.push(token::space_pair(next))?;
                stats.space_pairs += 1;
                i += 2;
            }
            _ if token::is_literal(c) => {
                out.push(c)?;
                stats.literals += 1;
                i += 1;
            }
            _ => {
                let run = data[i..]
                    .iter()
                    .take(MAX_RUN)
                    .take_while(|&&b| !token::is_literal(b))
                    .count();
                out.push(run as u8)?;
                out.extend(&data[i..i + run])?;
                stats.runs += 1;
                i += run;
            }
        }
    }

    tracing::debug!(
        input = data.len(),
        output = out.len(),
        literals = stats.literals,
        runs = stats.runs,
        space_pairs = stats.space_pairs,
        back_references = stats.back_references,
        "compressed palmdoc stream"
    );
    Ok(out.into_inner())
}
