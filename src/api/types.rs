//! Request and response models using the service's camelCase wire names.

// self
use crate::_prelude::*;

/// Cursor pair returned by paginated endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
	/// Cursor for the previous page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub before: Option<String>,
	/// Cursor for the next page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub after: Option<String>,
}

/// Sort direction accepted by paginated endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
	/// Ascending.
	Asc,
	/// Descending.
	Desc,
}
impl SortOrder {
	/// Returns the query-string label.
	pub const fn as_str(self) -> &'static str {
		match self {
			SortOrder::Asc => "ASC",
			SortOrder::Desc => "DESC",
		}
	}
}

/// Vault account with its asset balances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccount {
	/// Vault identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Whether the vault is hidden in the console.
	#[serde(rename = "hiddenOnUI", default)]
	pub hidden_on_ui: bool,
	/// Caller-supplied reference.
	#[serde(default)]
	pub customer_ref_id: Option<String>,
	/// Whether the gas station auto-fuels this vault.
	#[serde(default)]
	pub auto_fuel: bool,
	/// Per-asset balances.
	#[serde(default)]
	pub assets: Vec<VaultAsset>,
}

/// One page of vault accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccountsPage {
	/// Vaults on this page.
	pub accounts: Vec<VaultAccount>,
	/// Cursors for adjacent pages.
	#[serde(default)]
	pub paging: Option<Paging>,
	/// Ready-made URL of the previous page.
	#[serde(default)]
	pub previous_url: Option<String>,
	/// Ready-made URL of the next page.
	#[serde(default)]
	pub next_url: Option<String>,
}

/// Body of a vault creation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVaultAccountRequest {
	/// Display name.
	pub name: String,
	/// Hide the vault in the console.
	#[serde(rename = "hiddenOnUI")]
	pub hidden_on_ui: bool,
	/// Caller-supplied reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_ref_id: Option<String>,
	/// Let the gas station auto-fuel this vault.
	pub auto_fuel: bool,
}
impl CreateVaultAccountRequest {
	/// Creates a visible vault request without auto-fuel.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), hidden_on_ui: false, customer_ref_id: None, auto_fuel: false }
	}
}

/// Balance of one asset inside a vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAsset {
	/// Asset identifier.
	pub id: String,
	/// Total balance.
	pub total: String,
	/// Deprecated alias of `total`.
	#[serde(default)]
	pub balance: Option<String>,
	/// Balance available for transfers.
	#[serde(default)]
	pub available: Option<String>,
	/// Balance awaiting confirmation.
	#[serde(default)]
	pub pending: Option<String>,
	/// Frozen balance.
	#[serde(default)]
	pub frozen: Option<String>,
	/// Balance locked by pending transactions.
	#[serde(default)]
	pub locked_amount: Option<String>,
	/// Staked balance.
	#[serde(default)]
	pub staked: Option<String>,
	/// Block height of the last balance update.
	#[serde(default)]
	pub block_height: Option<String>,
	/// Block hash of the last balance update.
	#[serde(default)]
	pub block_hash: Option<String>,
}

/// Asset supported by the workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetType {
	/// Asset identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Asset kind (`BASE_ASSET`, `ERC20`, ...).
	#[serde(rename = "type")]
	pub kind: String,
	/// Token contract address, empty for base assets.
	#[serde(default)]
	pub contract_address: String,
	/// Native asset of the chain.
	#[serde(default)]
	pub native_asset: String,
	/// Decimal places, when known.
	#[serde(default)]
	pub decimals: Option<i64>,
}

/// Vault/asset balance row returned by the asset-wallets listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetWallet {
	/// Vault identifier.
	pub vault_id: String,
	/// Asset identifier.
	pub asset_id: String,
	/// Total balance.
	pub total: String,
	/// Balance available for transfers.
	pub available: String,
	/// Balance awaiting confirmation.
	pub pending: String,
	/// Staked balance.
	pub staked: String,
	/// Frozen balance.
	pub frozen: String,
	/// Balance locked by pending transactions.
	pub locked_amount: String,
	/// Block height of the last balance update.
	#[serde(default)]
	pub block_height: Option<String>,
	/// Block hash of the last balance update.
	#[serde(default)]
	pub block_hash: Option<String>,
	/// Creation time in milliseconds since the epoch.
	#[serde(default)]
	pub creation_time: Option<String>,
}

/// One page of asset wallets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetWalletsPage {
	/// Rows on this page.
	pub asset_wallets: Vec<AssetWallet>,
	/// Cursors for adjacent pages.
	#[serde(default)]
	pub paging: Option<Paging>,
}

/// Deposit address of a vault asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddress {
	/// Asset identifier.
	pub asset_id: String,
	/// On-chain address.
	pub address: String,
	/// Memo/destination tag, for chains that use one.
	#[serde(default)]
	pub tag: Option<String>,
	/// Free-form description.
	#[serde(default)]
	pub description: Option<String>,
	/// Address kind (`Permanent`, `Temporary`).
	#[serde(rename = "type")]
	pub kind: String,
	/// Legacy-format address, for chains that have one.
	#[serde(default)]
	pub legacy_address: Option<String>,
	/// Caller-supplied reference.
	#[serde(default)]
	pub customer_ref_id: Option<String>,
	/// Address encoding (`SEGWIT`, `LEGACY`, ...).
	#[serde(default)]
	pub address_format: Option<String>,
}

/// Unspent transaction output held by a vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentInput {
	/// Owning address.
	pub address: String,
	/// Output reference.
	pub input: UtxoInput,
	/// Output amount.
	pub amount: String,
	/// Confirmation count.
	pub confirmations: serde_json::Value,
	/// Output status.
	pub status: String,
}

/// Reference to a transaction output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoInput {
	/// Transaction hash.
	pub tx_hash: String,
	/// Output index.
	#[serde(rename = "index", alias = "number")]
	pub index: i64,
}

/// Options carried by a balance refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
	/// Idempotency key guarding duplicate submissions.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idempotency_key: Option<String>,
	/// Non-custodial wallet scope.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ncw: Option<NcwOptions>,
}

/// Non-custodial wallet scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NcwOptions {
	/// Wallet identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub wallet_id: Option<String>,
}

/// Kind of transaction to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionOperation {
	/// Asset transfer.
	Transfer,
	/// Raw message signing.
	Raw,
	/// Smart-contract call.
	ContractCall,
	/// Token mint.
	Mint,
	/// Token burn.
	Burn,
	/// Compound supply.
	SupplyToCompound,
	/// Compound redemption.
	RedeemFromCompound,
}

/// Kind of transfer endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeerType {
	/// Vault account.
	VaultAccount,
	/// Exchange account.
	ExchangeAccount,
	/// Whitelisted internal wallet.
	InternalWallet,
	/// Whitelisted external wallet.
	ExternalWallet,
	/// Address supplied inline.
	OneTimeAddress,
	/// Network connection.
	NetworkConnection,
	/// Fiat account.
	FiatAccount,
	/// Compound.
	Compound,
}

/// Transfer source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPeerPath {
	/// Endpoint kind.
	#[serde(rename = "type")]
	pub peer_type: PeerType,
	/// Endpoint identifier.
	pub id: String,
}
impl TransferPeerPath {
	/// Source vault account.
	pub fn vault(id: impl Into<String>) -> Self {
		Self { peer_type: PeerType::VaultAccount, id: id.into() }
	}
}

/// Transfer destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationTransferPeerPath {
	/// Endpoint kind.
	#[serde(rename = "type")]
	pub peer_type: PeerType,
	/// Endpoint identifier (absent for one-time addresses).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Inline address for [`PeerType::OneTimeAddress`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub one_time_address: Option<OneTimeAddress>,
}
impl DestinationTransferPeerPath {
	/// Destination vault account.
	pub fn vault(id: impl Into<String>) -> Self {
		Self { peer_type: PeerType::VaultAccount, id: Some(id.into()), one_time_address: None }
	}

	/// Destination address supplied inline.
	pub fn one_time_address(address: OneTimeAddress) -> Self {
		Self { peer_type: PeerType::OneTimeAddress, id: None, one_time_address: Some(address) }
	}
}

/// Address supplied inline as a transfer destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeAddress {
	/// On-chain address.
	pub address: String,
	/// Memo/destination tag.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
}

/// Body of a transaction creation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionArguments {
	/// Asset identifier.
	pub asset_id: String,
	/// Operation kind.
	pub operation: TransactionOperation,
	/// Transfer source.
	pub source: TransferPeerPath,
	/// Transfer destination.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub destination: Option<DestinationTransferPeerPath>,
	/// Amount as a decimal string.
	pub amount: String,
	/// Free-form note shown in the console.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	/// Caller-supplied unique identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_tx_id: Option<String>,
}

/// Lifecycle status of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
	/// Submitted for processing.
	Submitted,
	/// Queued behind other transactions.
	Queued,
	/// Waiting for a signer.
	PendingSignature,
	/// Waiting for approvals.
	PendingAuthorization,
	/// Waiting for manual approval at a third party.
	#[serde(rename = "PENDING_3RD_PARTY_MANUAL_APPROVAL")]
	Pending3rdPartyManualApproval,
	/// Waiting for a third party.
	#[serde(rename = "PENDING_3RD_PARTY")]
	Pending3rdParty,
	/// Deprecated pending state.
	Pending,
	/// Broadcasting to the network.
	Broadcasting,
	/// Waiting for confirmations.
	Confirming,
	/// Deprecated confirmed state.
	Confirmed,
	/// Completed.
	Completed,
	/// Waiting for AML screening.
	PendingAmlScreening,
	/// Partially completed.
	PartiallyCompleted,
	/// Cancellation in progress.
	Cancelling,
	/// Cancelled.
	Cancelled,
	/// Rejected by policy or a signer.
	Rejected,
	/// Failed.
	Failed,
	/// Timed out.
	Timeout,
	/// Blocked by policy.
	Blocked,
	/// Status added by the service after this crate was released.
	#[serde(other)]
	Unknown,
}

/// Response to a transaction creation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
	/// Transaction identifier.
	pub id: String,
	/// Initial status.
	pub status: TransactionStatus,
}
