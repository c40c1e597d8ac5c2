use crate::error::{Corruption, Error, Result};

/// Cursor-style reads over a borrowed byte slice. Each read advances the
/// slice past the bytes it returns and yields `None` when too few remain.
pub(crate) trait ByteReader<'a> {
    fn read_u8(&mut self) -> Option<u8>;
    fn read_slice(&mut self, len: usize) -> Option<&'a [u8]>;
}

impl<'a> ByteReader<'a> for &'a [u8] {
    fn read_u8(&mut self) -> Option<u8> {
        let (&first, rest) = self.split_first()?;
        *self = rest;
        Some(first)
    }

    fn read_slice(&mut self, len: usize) -> Option<&'a [u8]> {
        let (head, rest) = self.split_at_checked(len)?;
        *self = rest;
        Some(head)
    }
}

/// Growable output buffer. Every append reserves through
/// [`Vec::try_reserve`] so allocation failure surfaces as an error.
#[derive(Debug, Default)]
pub(crate) struct Output {
    buf: Vec<u8>,
}

impl Output {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve(capacity)?;
        Ok(Self { buf })
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.buf.try_reserve(1)?;
        self.buf.push(byte);
        Ok(())
    }

    pub fn extend(&mut self, bytes: &[u8]) -> Result<()> {
        self.buf.try_reserve(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends `length` bytes copied one at a time from `distance` bytes
    /// back, so a copy longer than its distance repeats the pattern.
    /// `offset` locates the back-reference token for error reporting.
    pub fn copy_back(&mut self, offset: usize, distance: usize, length: usize) -> Result<()> {
        if distance == 0 {
            return Err(Error::corrupt(offset, Corruption::ZeroDistance));
        }
        if distance > self.buf.len() {
            let kind = Corruption::DistanceOutOfRange {
                distance,
                available: self.buf.len(),
            };
            return Err(Error::corrupt(offset, kind));
        }

        self.buf.try_reserve(length)?;
        let mut src = self.buf.len() - distance;
        for _ in 0..length {
            let byte = self.buf[src];
            self.buf.push(byte);
            src += 1;
        }
        Ok(())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
