//! Typed endpoint helpers layered over [`ApiClient`](crate::client::ApiClient).
//!
//! Helpers build the request path (plus any query string) first, because the full path is
//! what the token's `uri` claim must carry. Path parameters are restricted to URL-safe
//! characters so the signed path and the path on the wire can never diverge.

pub mod asset;
pub mod transaction;
pub mod types;
pub mod vault;

pub use types::*;

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{_prelude::*, error::ConfigError};

/// Filters for the paged vault-account listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VaultAccountsFilter {
	/// Only vaults whose name starts with this prefix.
	pub name_prefix: Option<String>,
	/// Only vaults whose name ends with this suffix.
	pub name_suffix: Option<String>,
	/// Only vaults holding at least this amount of `asset_id`.
	pub min_amount_threshold: Option<String>,
	/// Only vaults holding this asset.
	pub asset_id: Option<String>,
	/// Sort direction.
	pub order_by: Option<SortOrder>,
	/// Cursor of the page before which to list.
	pub before: Option<String>,
	/// Cursor of the page after which to list.
	pub after: Option<String>,
	/// Page size.
	pub limit: Option<u32>,
}
impl VaultAccountsFilter {
	/// Encodes the filter as a query string (without the leading `?`).
	pub fn to_query(&self) -> String {
		let mut query = Serializer::new(String::new());

		append(&mut query, "namePrefix", self.name_prefix.as_deref());
		append(&mut query, "nameSuffix", self.name_suffix.as_deref());
		append(&mut query, "minAmountThreshold", self.min_amount_threshold.as_deref());
		append(&mut query, "assetId", self.asset_id.as_deref());
		append(&mut query, "orderBy", self.order_by.map(SortOrder::as_str));
		append(&mut query, "before", self.before.as_deref());
		append(&mut query, "after", self.after.as_deref());
		append(&mut query, "limit", self.limit.map(|limit| limit.to_string()).as_deref());

		query.finish()
	}
}

/// Filters for the asset-wallets listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetWalletsFilter {
	/// Only rows whose total exceeds this amount.
	pub total_amount_larger_than: Option<String>,
	/// Only rows for this asset.
	pub asset_id: Option<String>,
	/// Sort direction.
	pub order_by: Option<SortOrder>,
	/// Cursor of the page before which to list.
	pub before: Option<String>,
	/// Cursor of the page after which to list.
	pub after: Option<String>,
	/// Page size.
	pub limit: Option<u32>,
}
impl AssetWalletsFilter {
	/// Encodes the filter as a query string (without the leading `?`).
	pub fn to_query(&self) -> String {
		let mut query = Serializer::new(String::new());

		append(&mut query, "totalAmountLargerThan", self.total_amount_larger_than.as_deref());
		append(&mut query, "assetId", self.asset_id.as_deref());
		append(&mut query, "orderBy", self.order_by.map(SortOrder::as_str));
		append(&mut query, "before", self.before.as_deref());
		append(&mut query, "after", self.after.as_deref());
		append(&mut query, "limit", self.limit.map(|limit| limit.to_string()).as_deref());

		query.finish()
	}
}

fn append(query: &mut Serializer<'_, String>, key: &str, value: Option<&str>) {
	if let Some(value) = value {
		query.append_pair(key, value);
	}
}

pub(crate) fn with_query(path: &str, query: String) -> String {
	if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

/// Validates a path parameter: non-empty and limited to RFC 3986 unreserved characters.
pub(crate) fn segment<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
	let url_safe = value.bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~".contains(&b));

	if value.is_empty() || !url_safe {
		return Err(ConfigError::InvalidPathParam { name, value: value.to_owned() });
	}

	Ok(value)
}
