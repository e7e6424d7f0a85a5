//! Lists the first page of vault accounts using credentials from the environment.
//!
//! Requires `FIREBLOCKS_API_KEY` plus `FIREBLOCKS_SECRET_KEY_PATH` (or `FIREBLOCKS_SECRET_KEY`).
//! Set `FIREBLOCKS_API_URL` to target the sandbox.

// crates.io
use color_eyre::Result;
// self
use fireblocks_auth::{
	api::{SortOrder, VaultAccountsFilter},
	client::ReqwestApiClient,
	config::ClientConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = ReqwestApiClient::new(ClientConfig::from_env()?)?;
	let filter =
		VaultAccountsFilter { order_by: Some(SortOrder::Asc), limit: Some(20), ..Default::default() };
	let page = client.vault_accounts_paged(&filter).await?;

	for vault in &page.accounts {
		println!("{} {} ({} assets).", vault.id, vault.name, vault.assets.len());
	}
	if let Some(after) = page.paging.and_then(|paging| paging.after) {
		println!("Next page cursor: {after}.");
	}

	Ok(())
}
