// Text encoding at the byte boundary.
//
// The codec works on code points. Callers that hold raw bytes declare the
// encoding of those bytes with a `Charset` value and pass it explicitly;
// there is no process-wide default to mutate.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

use crate::error::Error;

/// A text encoding usable in both directions.
///
/// Wraps an [`encoding_rs::Encoding`] whose encoder produces the same
/// encoding its decoder reads. UTF-16 and the `replacement` encoding do not
/// satisfy this and are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// UTF-8, the default.
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Resolve a WHATWG encoding label such as `utf-8`, `shift_jis`, `gbk`.
    pub fn for_label(label: &str) -> Result<Self, Error> {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| Error::UnsupportedCharset(label.to_owned()))?;
        Self::from_encoding(encoding)
    }

    /// Wrap an encoding, rejecting those that cannot be encoded back into.
    pub fn from_encoding(encoding: &'static Encoding) -> Result<Self, Error> {
        if encoding.output_encoding() != encoding {
            return Err(Error::UnsupportedCharset(encoding.name().to_owned()));
        }
        Ok(Self(encoding))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.0
    }

    /// Decode bytes into text. Malformed sequences are an error, never
    /// replaced. A byte order mark is treated as content.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, Error> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or(Error::MalformedInput {
                charset: self.name(),
            })
    }

    /// Encode text into bytes. Characters outside the charset are an error.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, Error> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            return Err(Error::Unmappable {
                charset: self.name(),
            });
        }
        Ok(bytes)
    }

    /// Decode bytes straight into Unicode scalar values.
    pub fn code_points(&self, bytes: &[u8]) -> Result<Vec<char>, Error> {
        Ok(self.decode(bytes)?.chars().collect())
    }

    /// Encode Unicode scalar values into bytes.
    pub fn from_code_points(&self, chars: &[char]) -> Result<Vec<u8>, Error> {
        let text: String = chars.iter().collect();
        Ok(self.encode(&text)?.into_owned())
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
