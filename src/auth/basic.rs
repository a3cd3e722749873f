//! HTTP Basic authorization header encoding.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};

const BASIC_PREFIX: &str = "Basic ";

/// Builds the `Authorization` header value for `client_secret_basic` authentication.
///
/// The value is `Basic ` followed by the standard, padded base64 encoding of
/// `client_id:client_secret`. Inputs are not validated here; callers check for
/// empty credentials before dispatching a request.
pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
	let payload = STANDARD.encode(format!("{client_id}:{client_secret}"));

	format!("{BASIC_PREFIX}{payload}")
}

/// Recovers the `(client_id, client_secret)` pair from a Basic header value.
///
/// The payload is split on the first colon, so secrets containing colons survive.
/// Returns `None` when the prefix, base64, UTF-8, or separator is missing.
pub fn parse_basic_authorization(header: &str) -> Option<(String, String)> {
	let payload = header.strip_prefix(BASIC_PREFIX)?;
	let decoded = String::from_utf8(STANDARD.decode(payload.trim()).ok()?).ok()?;
	let (client_id, client_secret) = decoded.split_once(':')?;

	Some((client_id.to_owned(), client_secret.to_owned()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn basic_header_matches_known_vector() {
		assert_eq!(basic_authorization("A", "B"), "Basic QTpC");
		assert_eq!(
			basic_authorization("Aladdin", "open sesame"),
			"Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
		);
	}

	#[test]
	fn parse_recovers_pair_split_on_first_colon() {
		for (id, secret) in [("B", "C"), ("client", "se:cr:et"), ("ümlaut", "päss")] {
			let header = basic_authorization(id, secret);

			assert_eq!(parse_basic_authorization(&header), Some((id.to_owned(), secret.to_owned())));
		}
	}

	#[test]
	fn parse_rejects_malformed_headers() {
		assert_eq!(parse_basic_authorization("Bearer QTpC"), None);
		assert_eq!(parse_basic_authorization("Basic !!!"), None);
		// "QUI=" decodes to "AB", which has no separator.
		assert_eq!(parse_basic_authorization("Basic QUI="), None);
	}
}
