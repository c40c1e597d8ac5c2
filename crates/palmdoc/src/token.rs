//! The PalmDOC token grammar.
//!
//! Every token is identified by its first byte:
//!
//! | first byte      | token                                            |
//! |-----------------|--------------------------------------------------|
//! | `0x00`, `0x09..=0x7F` | the byte itself                            |
//! | `0x01..=0x08`   | `n` raw bytes follow                             |
//! | `0x80..=0xBF`   | two-byte back-reference (11-bit distance, 3-bit length) |
//! | `0xC0..=0xFF`   | a space followed by `byte ^ 0x80`                |

/// Shortest back-reference the format can express.
pub const MIN_MATCH: usize = 3;
/// Longest back-reference the format can express.
pub const MAX_MATCH: usize = 10;
/// Furthest a back-reference can reach into the decoded output.
pub const MAX_DISTANCE: usize = 0x7FF;
/// Longest binary run.
pub const MAX_RUN: usize = 8;
/// Bytes required on both sides of the cursor before the encoder looks for a match.
pub const MATCH_MARGIN: usize = 10;

const BACK_REFERENCE_TAG: u16 = 0x8000;
const SPACE_PAIR_FLIP: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal,
    /// Raw run carrying its byte count.
    Run(u8),
    SpacePair,
    BackReference,
}

impl TokenKind {
    pub fn of(first: u8) -> Self {
        match first {
            0x01..=0x08 => TokenKind::Run(first),
            0x00 | 0x09..=0x7F => TokenKind::Literal,
            0x80..=0xBF => TokenKind::BackReference,
            0xC0..=0xFF => TokenKind::SpacePair,
        }
    }
}

/// Bytes that stand for themselves in the compressed stream.
pub fn is_literal(byte: u8) -> bool {
    byte == 0 || (0x09..=0x7F).contains(&byte)
}

/// Bytes that can follow a space inside a space-pair token.
pub fn is_pair_tail(byte: u8) -> bool {
    (0x40..=0x7F).contains(&byte)
}

pub fn space_pair(tail: u8) -> u8 {
    debug_assert!(is_pair_tail(tail));
    tail ^ SPACE_PAIR_FLIP
}

pub fn space_pair_tail(token: u8) -> u8 {
    token ^ SPACE_PAIR_FLIP
}

pub fn pack_back_reference(distance: usize, length: usize) -> [u8; 2] {
    debug_assert!((1..=MAX_DISTANCE).contains(&distance));
    debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
    let value = BACK_REFERENCE_TAG | ((distance as u16) << 3) | (length - MIN_MATCH) as u16;
    value.to_be_bytes()
}

/// Splits a big-endian back-reference into `(distance, length)`.
pub fn unpack_back_reference(value: u16) -> (usize, usize) {
    let distance = ((value & 0x3FFF) >> 3) as usize;
    let length = (value & 0x7) as usize + MIN_MATCH;
    (distance, length)
}
