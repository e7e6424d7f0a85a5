//! Transaction submission.

// self
use crate::{
	_prelude::*,
	api::{CreateTransactionResponse, TransactionArguments},
	client::ApiClient,
	http::ApiHttpClient,
};

impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Submits a transaction for signing and broadcast.
	pub async fn create_transaction(
		&self,
		args: &TransactionArguments,
	) -> Result<CreateTransactionResponse> {
		self.send("create_transaction", "/v1/transactions", args).await
	}
}
