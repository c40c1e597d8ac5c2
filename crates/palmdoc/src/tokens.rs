use crate::buffer::ByteReader;
use crate::error::{Corruption, Error, Result};
use crate::token::{self, TokenKind};

/// One decoded unit of a compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(u8),
    Run(&'a [u8]),
    /// A space followed by this byte.
    SpacePair(u8),
    BackReference { distance: usize, length: usize },
}

impl Token<'_> {
    /// Number of bytes this token expands to.
    pub fn decoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Run(bytes) => bytes.len(),
            Token::SpacePair(_) => 2,
            Token::BackReference { length, .. } => *length,
        }
    }
}

/// Iterator over the tokens of a compressed stream, yielding each token
/// together with the input offset of its first byte.
///
/// Back-reference distances are not checked against the decoded length
/// here; that needs the output and happens in [`crate::decompress`].
/// After the first error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    data: &'a [u8],
    rest: &'a [u8],
}

pub fn tokens(data: &[u8]) -> Tokens<'_> {
    Tokens { data, rest: data }
}

impl<'a> Tokens<'a> {
    fn offset(&self) -> usize {
        self.data.len() - self.rest.len()
    }

    fn fail(&mut self, offset: usize, kind: Corruption) -> Error {
        self.rest = &[];
        Error::corrupt(offset, kind)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<(usize, Token<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset();
        let first = self.rest.read_u8()?;

        let token = match TokenKind::of(first) {
            TokenKind::Literal => Token::Literal(first),
            TokenKind::Run(count) => {
                let needed = count as usize;
                match self.rest.read_slice(needed) {
                    Some(bytes) => Token::Run(bytes),
                    None => {
                        let remaining = self.rest.len();
                        let kind = Corruption::TruncatedRun { needed, remaining };
                        return Some(Err(self.fail(offset, kind)));
                    }
                }
            }
            TokenKind::SpacePair => Token::SpacePair(token::space_pair_tail(first)),
            TokenKind::BackReference => match self.rest.read_u8() {
                Some(second) => {
                    let value = u16::from_be_bytes([first, second]);
                    let (distance, length) = token::unpack_back_reference(value);
                    Token::BackReference { distance, length }
                }
                None => return Some(Err(self.fail(offset, Corruption::TruncatedBackReference))),
            },
        };

        Some(Ok((offset, token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let stream = [b'a', 0x02, 0x90, 0xFF, 0xC2, 0x80, 0x15, 0x00];
        let parsed: Vec<_> = tokens(&stream).collect::<Result<_>>().unwrap();

        assert_eq!(
            parsed,
            vec![
                (0, Token::Literal(b'a')),
                (1, Token::Run(&[0x90, 0xFF][..])),
                (4, Token::SpacePair(b'B')),
                (5, Token::BackReference { distance: 2, length: 8 }),
                (7, Token::Literal(0x00)),
            ]
        );
        let decoded: usize = parsed.iter().map(|(_, t)| t.decoded_len()).sum();
        assert_eq!(decoded, 1 + 2 + 2 + 8 + 1);
    }

    #[test]
    fn test_tokens_truncated_run() {
        let stream = [b'a', 0x04, 0x90, 0x91];
        let mut iter = tokens(&stream);

        assert_eq!(iter.next(), Some(Ok((0, Token::Literal(b'a')))));
        assert_eq!(
            iter.next(),
            Some(Err(Error::corrupt(1, Corruption::TruncatedRun { needed: 4, remaining: 2 })))
        );
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_tokens_truncated_back_reference() {
        let stream = [b'a', 0x80];
        let result: Result<Vec<_>> = tokens(&stream).collect();
        assert_eq!(result, Err(Error::corrupt(1, Corruption::TruncatedBackReference)));
    }

    #[test]
    fn test_tokens_empty() {
        assert_eq!(tokens(&[]).next(), None);
    }
}
