//! Vault account endpoints.

// self
use crate::{
	_prelude::*,
	api::{
		AssetWalletsFilter, AssetWalletsPage, CreateVaultAccountRequest, DepositAddress,
		RequestOptions, UnspentInput, VaultAccount, VaultAccountsFilter, VaultAccountsPage,
		VaultAsset, segment, with_query,
	},
	client::ApiClient,
	http::ApiHttpClient,
};

impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists vault accounts one page at a time.
	pub async fn vault_accounts_paged(
		&self,
		filter: &VaultAccountsFilter,
	) -> Result<VaultAccountsPage> {
		let path = with_query("/v1/vault/accounts_paged", filter.to_query());

		self.fetch("vault_accounts_paged", &path).await
	}

	/// Fetches one vault account.
	pub async fn vault_account(&self, vault_id: &str) -> Result<VaultAccount> {
		let path = format!("/v1/vault/accounts/{}", segment("vault_id", vault_id)?);

		self.fetch("vault_account", &path).await
	}

	/// Creates a vault account.
	pub async fn create_vault_account(
		&self,
		request: &CreateVaultAccountRequest,
	) -> Result<VaultAccount> {
		self.send("create_vault_account", "/v1/vault/accounts", request).await
	}

	/// Fetches the balance of one asset inside a vault.
	pub async fn vault_asset(&self, vault_id: &str, asset_id: &str) -> Result<VaultAsset> {
		let path = format!(
			"/v1/vault/accounts/{}/{}",
			segment("vault_id", vault_id)?,
			segment("asset_id", asset_id)?
		);

		self.fetch("vault_asset", &path).await
	}

	/// Asks the service to re-read an asset balance from the chain.
	pub async fn refresh_vault_asset_balance(
		&self,
		vault_id: &str,
		asset_id: &str,
		options: &RequestOptions,
	) -> Result<VaultAsset> {
		let path = format!(
			"/v1/vault/accounts/{}/{}/balance",
			segment("vault_id", vault_id)?,
			segment("asset_id", asset_id)?
		);

		self.send("refresh_vault_asset_balance", &path, options).await
	}

	/// Lists deposit addresses of a vault asset.
	pub async fn deposit_addresses(
		&self,
		vault_id: &str,
		asset_id: &str,
	) -> Result<Vec<DepositAddress>> {
		let path = format!(
			"/v1/vault/accounts/{}/{}/addresses",
			segment("vault_id", vault_id)?,
			segment("asset_id", asset_id)?
		);

		self.fetch("deposit_addresses", &path).await
	}

	/// Lists unspent outputs of a UTXO-based vault asset.
	pub async fn unspent_inputs(&self, vault_id: &str, asset_id: &str) -> Result<Vec<UnspentInput>> {
		let path = format!(
			"/v1/vault/accounts/{}/{}/unspent_inputs",
			segment("vault_id", vault_id)?,
			segment("asset_id", asset_id)?
		);

		self.fetch("unspent_inputs", &path).await
	}

	/// Lists per-vault asset balances across the workspace.
	pub async fn asset_wallets(&self, filter: &AssetWalletsFilter) -> Result<AssetWalletsPage> {
		let path = with_query("/v1/vault/asset_wallets", filter.to_query());

		self.fetch("asset_wallets", &path).await
	}
}
