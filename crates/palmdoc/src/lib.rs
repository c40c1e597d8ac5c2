//! PalmDOC compression, the LZ77 variant used for the text records of
//! PalmDOC and MOBI e-books.
//!
//! ```
//! let text = b"It was the best of times, it was the worst of times";
//! let packed = palmdoc::compress(text)?;
//! assert_eq!(palmdoc::decompress(&packed)?, text);
//! # Ok::<(), palmdoc::Error>(())
//! ```

mod buffer;
pub mod compress;
pub mod compression;
pub mod decompress;
pub mod error;
mod matcher;
pub mod token;
pub mod tokens;

pub use compress::compress;
pub use compression::CompressionType;
pub use decompress::decompress;
pub use error::{Corruption, Error, Result};
pub use token::TokenKind;
pub use tokens::{Token, Tokens, tokens};
