use crate::error::{Error, Result};

/// The compression code stored in the first field of a PalmDOC header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    None,
    PalmDoc,
    /// HUFF/CDIC ("DH"). Recognised, but records cannot be coded here.
    HuffCdic,
}

impl CompressionType {
    pub fn code(self) -> u16 {
        match self {
            CompressionType::None => 1,
            CompressionType::PalmDoc => 2,
            CompressionType::HuffCdic => u16::from_be_bytes(*b"DH"),
        }
    }

    pub fn compress(self, record: &[u8]) -> Result<Vec<u8>> {
        match self {
            CompressionType::None => copy(record),
            CompressionType::PalmDoc => crate::compress(record),
            CompressionType::HuffCdic => Err(Error::UnsupportedCompression(self.code())),
        }
    }

    pub fn decompress(self, record: &[u8]) -> Result<Vec<u8>> {
        match self {
            CompressionType::None => copy(record),
            CompressionType::PalmDoc => crate::decompress(record),
            CompressionType::HuffCdic => Err(Error::UnsupportedCompression(self.code())),
        }
    }
}

impl TryFrom<u16> for CompressionType {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        match code {
            1 => Ok(CompressionType::None),
            2 => Ok(CompressionType::PalmDoc),
            0x4448 => Ok(CompressionType::HuffCdic),
            _ => Err(Error::UnsupportedCompression(code)),
        }
    }
}

fn copy(record: &[u8]) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(record.len())?;
    data.extend_from_slice(record);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_codes() {
        for kind in [CompressionType::None, CompressionType::PalmDoc, CompressionType::HuffCdic] {
            assert_eq!(CompressionType::try_from(kind.code()).unwrap(), kind);
        }
        assert_eq!(CompressionType::HuffCdic.code(), 17480);
        assert_eq!(CompressionType::try_from(0), Err(Error::UnsupportedCompression(0)));
        assert_eq!(CompressionType::try_from(3), Err(Error::UnsupportedCompression(3)));
    }

    #[test]
    fn test_record_dispatch() {
        let record = b"<html><body><p>Call me Ishmael.</p></body></html>";

        let stored = CompressionType::None.compress(record).unwrap();
        assert_eq!(stored, record);
        assert_eq!(CompressionType::None.decompress(&stored).unwrap(), record);

        let packed = CompressionType::PalmDoc.compress(record).unwrap();
        assert_eq!(packed, crate::compress(record).unwrap());
        assert_eq!(CompressionType::PalmDoc.decompress(&packed).unwrap(), record);
    }

    #[test]
    fn test_huff_cdic_is_unsupported() {
        assert_eq!(
            CompressionType::HuffCdic.decompress(b"anything"),
            Err(Error::UnsupportedCompression(17480))
        );
        assert!(CompressionType::HuffCdic.compress(b"anything").is_err());
    }
}
