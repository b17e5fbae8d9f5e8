//! Idnconv: Punycode (RFC 3492) and IDN domain conversion in Rust.
//!
//! The crate provides:
//! - A pure-Rust Punycode codec working on code points (`punycode`)
//! - Label, domain and URL-host conversion with the `xn--` prefix (`idna`)
//! - Explicit charset handling for byte input and output (`charset`, `convert`)
//! - An optional CLI (`cli` feature)
//!
//! All conversions are pure functions of their arguments. Nothing is cached
//! or shared between calls, so every entry point is safe to call from many
//! threads at once.
//!
//! # Quick Start
//!
//! ```
//! use idnconv::{domain_to_ascii, domain_to_unicode};
//!
//! let ace = domain_to_ascii("café.bücher.com").unwrap();
//! assert_eq!(ace, "xn--caf-dma.xn--bcher-kva.com");
//! assert_eq!(domain_to_unicode(&ace).unwrap(), "café.bücher.com");
//! ```

pub mod charset;
pub mod convert;
pub mod error;
pub mod idna;
pub mod punycode;

#[cfg(feature = "cli")]
pub mod cli;

pub use charset::Charset;
pub use convert::Converter;
pub use error::Error;
pub use idna::{
    ACE_PREFIX, ToAsciiOptions, domain_to_ascii, domain_to_ascii_with, domain_to_unicode,
    label_to_ascii, label_to_unicode, url_to_ascii, url_to_unicode,
};
pub use punycode::PunycodeError;
