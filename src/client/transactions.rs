use log::{debug, info};

use super::{NodeClient, api_path};
use crate::error::ClientError;
use crate::http::Operation;
use crate::http::types::{SendTransactionBody, TransactionsEnvelope, TxHashEnvelope};
use crate::log::mask_string;
use crate::models::{Amount, Transaction, TransactionReceipt, TransactionRequest, TransactionSubmission};

impl NodeClient {
    /// Submits a simple value transfer and returns its hash.
    ///
    /// `data` is left out of the request body entirely when `None`.
    pub async fn send_transaction(
        &self,
        from: &str,
        to: &str,
        value: &Amount,
        data: Option<&str>,
    ) -> Result<String, ClientError> {
        info!(
            target: "audit",
            from = &*mask_string(from),
            to = &*mask_string(to);
            "HTTP: Submitting transaction"
        );
        let body = SendTransactionBody { from, to, value, data };
        let envelope: TxHashEnvelope = self
            .transport
            .post(Operation::SendTransaction, &api_path(&["transactions"]), &body)
            .await?;
        info!(target: "audit", hash = envelope.hash.as_str(); "HTTP: Transaction submitted");
        Ok(envelope.hash)
    }

    /// Submits a transaction with explicit gas and nonce settings.
    ///
    /// Succeeds on 200 or 201; any other status fails with that code.
    pub async fn send_detailed_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionSubmission, ClientError> {
        info!(
            target: "audit",
            from = &*mask_string(&request.from),
            to = &*mask_string(&request.to);
            "HTTP: Submitting detailed transaction"
        );
        let submission: TransactionSubmission = self
            .transport
            .post(Operation::SendDetailedTransaction, &api_path(&["transactions"]), request)
            .await?;
        info!(
            target: "audit",
            hash = submission.hash.as_str(),
            status:% = submission.status;
            "HTTP: Detailed transaction submitted"
        );
        Ok(submission)
    }

    /// Looks up a transaction by hash. Requires a 200 response.
    pub async fn get_detailed_transaction(&self, hash: &str) -> Result<Transaction, ClientError> {
        debug!(hash = hash; "HTTP: Requesting transaction");
        self.transport
            .get(Operation::GetDetailedTransaction, &api_path(&["transactions", hash]))
            .await
    }

    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<TransactionReceipt, ClientError> {
        debug!(hash = hash; "HTTP: Requesting transaction receipt");
        self.transport
            .get(Operation::TransactionReceipt, &api_path(&["transactions", hash, "receipt"]))
            .await
    }

    /// Transactions waiting in the node's pool, in the order the node lists them.
    pub async fn list_pending_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let envelope: TransactionsEnvelope = self
            .transport
            .get(Operation::PendingTransactions, &api_path(&["transactions", "pending"]))
            .await?;
        debug!(count = envelope.transactions.len(); "HTTP: Pending transactions received");
        Ok(envelope.transactions)
    }
}
