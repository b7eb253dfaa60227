//! Domain extraction from bookmark URLs.

use url::{ParseError, Url};

/// Extracts the bare host name from a URL string.
///
/// Handles:
/// - Absolute URLs (e.g., `https://www.github.com/foo`) - the host, lowercased,
///   without port or credentials
/// - URLs without a host (e.g., `mailto:someone@example.com`) - the path
/// - Schemeless input (e.g., `example.com/page`) - everything before the first
///   `?` or `#`; a leading `//` is read as an authority
/// - Authorities the `url` crate rejects for a bad port or a forbidden host
///   character (e.g., `https://github.com:abc/`) - the authority text, split
///   syntactically, without credentials or port
///
/// Internationalized hosts are returned in Unicode (`bücher.de`, not
/// `xn--bcher-kva.de`). A single leading `www.` is stripped.
///
/// Never fails: any other parse error yields an empty string, which scores
/// nothing in the domain pass.
///
/// # Examples
///
/// ```
/// use bookmark_classifier::utils::extract_domain::extract_domain;
///
/// assert_eq!(extract_domain("https://www.github.com/rust-lang"), "github.com");
/// assert_eq!(extract_domain("example.com/page"), "example.com/page");
/// assert_eq!(extract_domain("http://[::1"), "");
/// ```
pub fn extract_domain(input: &str) -> String {
    let domain = match Url::parse(input) {
        Ok(url) => match url.host_str() {
            Some(host) => unicode_host(host),
            None => url.path().to_string(),
        },
        Err(ParseError::RelativeUrlWithoutBase) => schemeless_domain(input).to_string(),
        Err(ParseError::InvalidPort | ParseError::InvalidDomainCharacter) => {
            authority_host(input).to_lowercase()
        }
        Err(e) => {
            tracing::debug!(url = input, error = %e, "Unparseable URL, using empty domain");
            return String::new();
        }
    };

    match domain.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => domain,
    }
}

/// Domain portion of input that carries no scheme.
fn schemeless_domain(input: &str) -> &str {
    let end = input.find(|c: char| c == '?' || c == '#').unwrap_or(input.len());
    let path = &input[..end];

    match path.strip_prefix("//") {
        Some(authority) => authority.split('/').next().unwrap_or(authority),
        None => path,
    }
}

/// Decodes punycode labels; hosts that fail to decode are kept as given.
fn unicode_host(host: &str) -> String {
    if !host.contains("xn--") {
        return host.to_string();
    }

    match idna::domain_to_unicode(host) {
        (unicode, Ok(())) => unicode,
        (_, Err(e)) => {
            tracing::debug!(host, error = ?e, "Punycode host kept as is");
            host.to_string()
        }
    }
}

/// Host part of the authority after `://`, split on syntax alone.
fn authority_host(input: &str) -> &str {
    let rest = input.split_once("://").map_or(input, |(_, rest)| rest);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];

    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);

    match host_port.rsplit_once(':') {
        Some((host, _)) if !host.starts_with('[') || host.ends_with(']') => host,
        _ => host_port,
    }
}
