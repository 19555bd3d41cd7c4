use thiserror::Error;

// content source resolution
//
// the frame either navigates to a remote address or renders the bundled
// offline document.  user input goes through resolve_address() before it ever
// reaches the frame, so the failure path is a value the caller can act on
// rather than a caught exception somewhere in the glue.

// never actually navigated to on a fresh page (the address box starts empty),
// but it is the documented initial value of the controller
pub const DEFAULT_ADDRESS: &str = "https://google.com";

const SCHEME_HTTP: &str = "http://";
const SCHEME_HTTPS: &str = "https://";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewSource {
    Remote(String),
    Fallback,
}

impl PreviewSource {
    pub fn address(&self) -> Option<&str> {
        match self {
            PreviewSource::Remote(address) => Some(address),
            PreviewSource::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PreviewSource::Fallback)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address contains whitespace")]
    Whitespace,
    #[error("address contains a control character")]
    ControlCharacter,
    #[error("address has no host")]
    MissingHost,
}

// trims the input, maps an empty entry to the offline document, defaults the
// scheme to https, and rejects text that cannot be an address at all.  the
// checks are syntactic only; whether the target allows itself to be embedded
// is up to the frame.
pub fn resolve_address(raw: &str) -> Result<PreviewSource, AddressError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(PreviewSource::Fallback);
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(AddressError::Whitespace);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(AddressError::ControlCharacter);
    }

    let address = if trimmed.starts_with(SCHEME_HTTP) || trimmed.starts_with(SCHEME_HTTPS) {
        trimmed.to_owned()
    } else {
        format!("{SCHEME_HTTPS}{trimmed}")
    };

    let host = address
        .strip_prefix(SCHEME_HTTPS)
        .or_else(|| address.strip_prefix(SCHEME_HTTP))
        .unwrap_or(&address);

    if host.is_empty() {
        return Err(AddressError::MissingHost);
    }

    Ok(PreviewSource::Remote(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(address: &str) -> Result<PreviewSource, AddressError> {
        Ok(PreviewSource::Remote(address.to_owned()))
    }

    #[test]
    fn empty_entries_resolve_to_the_offline_document() {
        assert_eq!(resolve_address(""), Ok(PreviewSource::Fallback));
        assert_eq!(resolve_address("   "), Ok(PreviewSource::Fallback));
        assert_eq!(resolve_address("\t\n"), Ok(PreviewSource::Fallback));
    }

    #[test]
    fn bare_hosts_get_the_secure_scheme() {
        assert_eq!(resolve_address("example.com"), remote("https://example.com"));
        assert_eq!(
            resolve_address("example.com/docs?q=1"),
            remote("https://example.com/docs?q=1")
        );
    }

    #[test]
    fn explicit_schemes_are_preserved() {
        assert_eq!(
            resolve_address("http://example.com"),
            remote("http://example.com")
        );
        assert_eq!(
            resolve_address("https://example.com"),
            remote("https://example.com")
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            resolve_address("  example.com  "),
            remote("https://example.com")
        );
    }

    #[test]
    fn interior_whitespace_is_rejected() {
        assert_eq!(
            resolve_address("bad url with spaces"),
            Err(AddressError::Whitespace)
        );
        assert_eq!(
            resolve_address("https://bad host.com"),
            Err(AddressError::Whitespace)
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        assert_eq!(
            resolve_address("example.com\u{7}"),
            Err(AddressError::ControlCharacter)
        );
    }

    #[test]
    fn a_scheme_alone_is_rejected() {
        assert_eq!(resolve_address("http://"), Err(AddressError::MissingHost));
        assert_eq!(resolve_address("https://"), Err(AddressError::MissingHost));
    }

    #[test]
    fn resolved_addresses_are_never_empty() {
        for raw in ["", "  ", "example.com", "http://example.com"] {
            if let Ok(PreviewSource::Remote(address)) = resolve_address(raw) {
                assert!(!address.is_empty());
            }
        }
    }
}
