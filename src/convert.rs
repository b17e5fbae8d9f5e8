// Byte-level conversion with an explicit charset.
//
// `Converter` closes over a `Charset` and `ToAsciiOptions` and applies the
// domain/URL wrapper to raw bytes. It is `Copy`, holds no mutable state, and
// can be shared freely between threads; two converters with different
// charsets never interfere.

use crate::charset::Charset;
use crate::error::Error;
use crate::idna::{self, ToAsciiOptions};

/// Domain converter bound to a charset.
///
/// # Example
/// ```
/// use idnconv::{Charset, Converter};
///
/// let sjis = Converter::new(Charset::for_label("shift_jis").unwrap());
/// let bytes = sjis.to_unicode(b"xn--wgv71a.jp").unwrap();
/// assert_eq!(Charset::for_label("shift_jis").unwrap().decode(&bytes).unwrap(), "日本.jp");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    charset: Charset,
    options: ToAsciiOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            options: ToAsciiOptions::default(),
        }
    }

    /// Replace the Unicode to ASCII options.
    pub fn with_options(mut self, options: ToAsciiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn options(&self) -> &ToAsciiOptions {
        &self.options
    }

    /// Decode `domain` with the charset and convert it to ASCII.
    pub fn to_ascii(&self, domain: &[u8]) -> Result<String, Error> {
        let text = self.charset.decode(domain)?;
        idna::domain_to_ascii_with(&text, &self.options)
    }

    /// Convert an ACE domain to Unicode and encode it with the charset.
    ///
    /// The input is decoded with the charset first, so any ASCII-compatible
    /// charset accepts plain ACE bytes.
    pub fn to_unicode(&self, domain: &[u8]) -> Result<Vec<u8>, Error> {
        let text = self.charset.decode(domain)?;
        let unicode = idna::domain_to_unicode(&text)?;
        Ok(self.charset.encode(&unicode)?.into_owned())
    }

    /// Single-label counterpart of [`Converter::to_ascii`].
    pub fn label_to_ascii(&self, label: &[u8]) -> Result<String, Error> {
        let text = self.charset.decode(label)?;
        idna::label_to_ascii_with(&text, &self.options)
    }

    /// Single-label counterpart of [`Converter::to_unicode`].
    pub fn label_to_unicode(&self, label: &[u8]) -> Result<Vec<u8>, Error> {
        let text = self.charset.decode(label)?;
        let unicode = idna::label_to_unicode(&text)?;
        Ok(self.charset.encode(&unicode)?.into_owned())
    }

    /// Convert the host of a URL given in the charset to ASCII.
    pub fn url_to_ascii(&self, url: &[u8]) -> Result<String, Error> {
        let text = self.charset.decode(url)?;
        idna::url_to_ascii_with(&text, &self.options)
    }

    /// Convert the host of a URL to Unicode, encoded with the charset.
    pub fn url_to_unicode(&self, url: &[u8]) -> Result<Vec<u8>, Error> {
        let text = self.charset.decode(url)?;
        let unicode = idna::url_to_unicode(&text)?;
        Ok(self.charset.encode(&unicode)?.into_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
