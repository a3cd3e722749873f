// self
use crate::_prelude::*;

/// Server-to-server grant types understood by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Zoom's account-scoped grant; sends `account_id` alongside the client credentials.
	#[default]
	AccountCredentials,
	/// RFC 6749 client credentials grant.
	ClientCredentials,
}
impl GrantType {
	/// Returns the `grant_type` form value for the grant.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::AccountCredentials => "account_credentials",
			GrantType::ClientCredentials => "client_credentials",
		}
	}

	/// Returns `true` if the grant carries the account identifier.
	pub fn requires_account(self) -> bool {
		matches!(self, GrantType::AccountCredentials)
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
