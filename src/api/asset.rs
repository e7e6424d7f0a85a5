//! Supported-asset catalogue.

// self
use crate::{_prelude::*, api::AssetType, client::ApiClient, http::ApiHttpClient};

impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists every asset the workspace can hold.
	pub async fn supported_assets(&self) -> Result<Vec<AssetType>> {
		self.fetch("supported_assets", "/v1/supported_assets").await
	}
}

#[cfg(test)]
mod tests {
	// self
	use crate::_preludet::*;

	#[tokio::test]
	async fn supported_assets_decode_token_metadata() {
		let transport = RecordingHttpClient::respond(
			200,
			r#"[{"id":"BTC","name":"Bitcoin","type":"BASE_ASSET","contractAddress":"","nativeAsset":"BTC","decimals":8},{"id":"USDC","name":"USD Coin","type":"ERC20","contractAddress":"0xa0b8","nativeAsset":"ETH"}]"#,
		);
		let client = recording_client(transport.clone());
		let assets = client.supported_assets().await.expect("Catalogue should load.");

		assert_eq!(assets.len(), 2);
		assert_eq!(assets[0].decimals, Some(8));
		assert_eq!(assets[1].kind, "ERC20");
		assert_eq!(assets[1].decimals, None);
		assert_eq!(transport.recorded()[0].path, "/v1/supported_assets");
	}
}
