//! Back-reference search for the encoder.
//!
//! Positions are chained by a hash of their first three bytes, nearest
//! first. A candidate at `j` can cover at most `pos - j` bytes because the
//! encoder never emits a copy that overlaps the bytes being encoded, so the
//! usable length of a candidate is `min(common prefix, pos - j, MAX_MATCH)`.
//! The longest usable length wins and ties go to the nearest candidate.
//! This picks the same match as scanning backwards for each chunk length
//! from `MAX_MATCH` down to `MIN_MATCH`, without rescanning the window.

use crate::token::{MAX_DISTANCE, MAX_MATCH, MIN_MATCH};

const HASH_BITS: u32 = 12;
const HASH_SIZE: usize = 1 << HASH_BITS;
const WINDOW: usize = MAX_DISTANCE + 1;
const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match {
    pub distance: usize,
    pub length: usize,
}

pub(crate) struct MatchFinder<'a> {
    data: &'a [u8],
    /// Most recent position for each hash.
    head: Vec<usize>,
    /// Previous position with the same hash, indexed by `pos % WINDOW`.
    prev: Vec<usize>,
    inserted: usize,
}

fn hash3(bytes: &[u8]) -> usize {
    let key = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]);
    (key.wrapping_mul(0x9E37_79B1) >> (32 - HASH_BITS)) as usize
}

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl<'a> MatchFinder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            head: vec![NIL; HASH_SIZE],
            prev: vec![NIL; WINDOW],
            inserted: 0,
        }
    }

    fn insert_until(&mut self, pos: usize) {
        let last = pos.min(self.data.len().saturating_sub(MIN_MATCH - 1));
        while self.inserted < last {
            let j = self.inserted;
            let h = hash3(&self.data[j..]);
            self.prev[j % WINDOW] = self.head[h];
            self.head[h] = j;
            self.inserted += 1;
        }
    }

    /// Finds the back-reference to emit at `pos`, if any. Every position
    /// before `pos` is indexed first, including those skipped over by
    /// earlier matches.
    pub fn find(&mut self, pos: usize) -> Option<Match> {
        self.insert_until(pos);

        let remaining = self.data.len().checked_sub(pos)?;
        if remaining < MIN_MATCH {
            return None;
        }
        let window = &self.data[pos..pos + remaining.min(MAX_MATCH)];
        let min_pos = pos.saturating_sub(MAX_DISTANCE);

        let mut best: Option<Match> = None;
        let mut candidate = self.head[hash3(window)];
        while candidate != NIL && candidate >= min_pos && candidate < pos {
            let usable = common_prefix(&self.data[candidate..], window).min(pos - candidate);
            if usable >= MIN_MATCH && best.is_none_or(|m| usable > m.length) {
                best = Some(Match {
                    distance: pos - candidate,
                    length: usable,
                });
                if usable == window.len() {
                    break;
                }
            }

            let next = self.prev[candidate % WINDOW];
            if next >= candidate {
                break;
            }
            candidate = next;
        }

        best
    }
}
