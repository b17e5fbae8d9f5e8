// Label and domain conversion on top of the Punycode codec.
//
// A domain is split on '.', every label is converted on its own, and the
// results are joined back with '.'. Labels never influence each other: the
// codec state is created per label. The first failing label aborts the
// whole domain.

use std::borrow::Cow;
use std::ops::Range;

use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::punycode;

/// ACE prefix marking a Punycode-encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// Separator between domain labels.
pub const LABEL_SEPARATOR: char = '.';

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the Unicode to ASCII direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToAsciiOptions {
    /// Lower-case each label before encoding.
    pub lowercase: bool,
}

impl Default for ToAsciiOptions {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Whether `label` starts with `xn--`, in any letter case.
///
/// This does not check that the rest of the label decodes.
pub fn has_ace_prefix(label: &str) -> bool {
    label.len() >= ACE_PREFIX.len()
        && label.as_bytes()[..ACE_PREFIX.len()].eq_ignore_ascii_case(ACE_PREFIX.as_bytes())
}

/// Convert one label to its ASCII form with default options.
pub fn label_to_ascii(label: &str) -> Result<String, Error> {
    label_to_ascii_with(label, &ToAsciiOptions::default())
}

/// Convert one label to its ASCII form.
///
/// Labels made only of ASCII are returned as is (after optional
/// lower-casing), even when they already look like `xn--` labels. Any other
/// label is Punycode-encoded and prefixed with `xn--`.
pub fn label_to_ascii_with(label: &str, opts: &ToAsciiOptions) -> Result<String, Error> {
    let folded: Cow<'_, str> = if opts.lowercase {
        Cow::Owned(label.to_lowercase())
    } else {
        Cow::Borrowed(label)
    };

    if folded.is_ascii() {
        debug!("label {label:?} is ASCII, passing through");
        return Ok(folded.into_owned());
    }

    let chars: Vec<char> = folded.chars().collect();
    let mut out = String::with_capacity(ACE_PREFIX.len() + folded.len());
    out.push_str(ACE_PREFIX);
    punycode::encode_into(&chars, &mut out).map_err(|e| Error::label(label, e))?;

    trace!("label {label:?} -> {out:?}");
    Ok(out)
}

/// Convert one label to its Unicode form.
///
/// Labels without the `xn--` prefix are returned unchanged.
pub fn label_to_unicode(label: &str) -> Result<String, Error> {
    if !has_ace_prefix(label) {
        debug!("label {label:?} has no ACE prefix, passing through");
        return Ok(label.to_owned());
    }

    let decoded = punycode::decode_to_string(&label[ACE_PREFIX.len()..])
        .map_err(|e| Error::label(label, e))?;

    trace!("label {label:?} -> {decoded:?}");
    Ok(decoded)
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Convert a domain to its ASCII-compatible form.
///
/// ```
/// assert_eq!(idnconv::domain_to_ascii("bücher.de").unwrap(), "xn--bcher-kva.de");
/// ```
pub fn domain_to_ascii(domain: &str) -> Result<String, Error> {
    domain_to_ascii_with(domain, &ToAsciiOptions::default())
}

/// Convert a domain to its ASCII-compatible form with explicit options.
pub fn domain_to_ascii_with(domain: &str, opts: &ToAsciiOptions) -> Result<String, Error> {
    map_labels(domain, |label| label_to_ascii_with(label, opts))
}

/// Convert a domain to its Unicode form.
///
/// ```
/// assert_eq!(idnconv::domain_to_unicode("xn--bcher-kva.de").unwrap(), "bücher.de");
/// ```
pub fn domain_to_unicode(domain: &str) -> Result<String, Error> {
    map_labels(domain, label_to_unicode)
}

fn map_labels<F>(domain: &str, mut convert: F) -> Result<String, Error>
where
    F: FnMut(&str) -> Result<String, Error>,
{
    let mut out = String::with_capacity(domain.len() + 8);
    for (idx, label) in domain.split(LABEL_SEPARATOR).enumerate() {
        if idx > 0 {
            out.push(LABEL_SEPARATOR);
        }
        out.push_str(&convert(label)?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

/// Convert the host of an absolute URL to its ASCII-compatible form.
///
/// Only the host is rewritten; scheme, userinfo, port, path, query and
/// fragment are copied unchanged. Input that does not start with
/// `scheme://`, or that has an empty host or an IPv6 literal host, is
/// returned unchanged.
pub fn url_to_ascii(url: &str) -> Result<String, Error> {
    url_to_ascii_with(url, &ToAsciiOptions::default())
}

/// [`url_to_ascii`] with explicit options.
pub fn url_to_ascii_with(url: &str, opts: &ToAsciiOptions) -> Result<String, Error> {
    map_url_host(url, |host| domain_to_ascii_with(host, opts))
}

/// Convert the host of an absolute URL to its Unicode form.
pub fn url_to_unicode(url: &str) -> Result<String, Error> {
    map_url_host(url, domain_to_unicode)
}

fn map_url_host<F>(url: &str, convert: F) -> Result<String, Error>
where
    F: FnOnce(&str) -> Result<String, Error>,
{
    let Some(range) = host_range(url) else {
        debug!("no host found in {url:?}, leaving it unchanged");
        return Ok(url.to_owned());
    };
    let host = convert(&url[range.clone()])?;

    let mut out = String::with_capacity(url.len() - range.len() + host.len());
    out.push_str(&url[..range.start]);
    out.push_str(&host);
    out.push_str(&url[range.end..]);
    Ok(out)
}

/// Byte range of the host in `scheme://[userinfo@]host[:port]...`.
fn host_range(url: &str) -> Option<Range<usize>> {
    let scheme_len = url.find("://")?;
    if !is_scheme(&url[..scheme_len]) {
        return None;
    }
    let authority_start = scheme_len + 3;
    let rest = &url[authority_start..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_len];

    let host_start = authority.rfind('@').map_or(0, |at| at + 1);
    let host = &authority[host_start..];
    if host.starts_with('[') {
        return None;
    }
    let host_len = host.find(':').unwrap_or(host.len());
    if host_len == 0 {
        return None;
    }

    let start = authority_start + host_start;
    Some(start..start + host_len)
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` (RFC 3986, Section 3.1).
fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Convert many domains to ASCII. Each result is independent of the others.
pub fn domains_to_ascii<S: AsRef<str>>(
    domains: &[S],
    opts: &ToAsciiOptions,
) -> Vec<Result<String, Error>> {
    domains
        .iter()
        .map(|d| domain_to_ascii_with(d.as_ref(), opts))
        .collect()
}

/// Convert many domains to Unicode. Each result is independent of the others.
pub fn domains_to_unicode<S: AsRef<str>>(domains: &[S]) -> Vec<Result<String, Error>> {
    domains
        .iter()
        .map(|d| domain_to_unicode(d.as_ref()))
        .collect()
}

/// [`domains_to_ascii`] spread over the rayon thread pool.
///
/// Results are returned in input order.
#[cfg(feature = "parallel")]
pub fn domains_to_ascii_parallel<S: AsRef<str> + Sync>(
    domains: &[S],
    opts: &ToAsciiOptions,
) -> Vec<Result<String, Error>> {
    domains
        .par_iter()
        .map(|d| domain_to_ascii_with(d.as_ref(), opts))
        .collect()
}

/// [`domains_to_unicode`] spread over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn domains_to_unicode_parallel<S: AsRef<str> + Sync>(
    domains: &[S],
) -> Vec<Result<String, Error>> {
    domains
        .par_iter()
        .map(|d| domain_to_unicode(d.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
