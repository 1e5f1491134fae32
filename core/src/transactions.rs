//! Transactions: create/update, filtered listing, and date-window lookups.
//!
//! The memo and cheque-number lookups fetch one day either side of the given
//! date and filter the result locally, since the service's `search`
//! parameter matches payees and notes loosely rather than exact fields.

use chrono::{Days, NaiveDate};

use crate::client::PocketSmithClient;
use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::{CreateTransaction, Transaction, TransactionType};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional filters for `PocketSmithClient::list_transactions`.
///
/// A filter becomes a query parameter only when it is set to something other
/// than its default; empty strings and page 0 count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransactionsOptions {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub updated_since: Option<String>,
    pub uncategorised: bool,
    pub transaction_type: Option<TransactionType>,
    pub needs_review: bool,
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl ListTransactionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn updated_since(mut self, timestamp: impl Into<String>) -> Self {
        self.updated_since = Some(timestamp.into());
        self
    }

    /// Only transactions without a category.
    pub fn uncategorised(mut self) -> Self {
        self.uncategorised = true;
        self
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Only transactions flagged for review.
    pub fn needs_review(mut self) -> Self {
        self.needs_review = true;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                query.push((name.to_string(), value));
            }
        };

        push("start_date", self.start_date.clone());
        push("end_date", self.end_date.clone());
        push("updated_since", self.updated_since.clone());
        push("uncategorised", self.uncategorised.then(|| "1".to_string()));
        push("type", self.transaction_type.map(|t| t.as_str().to_string()));
        push("needs_review", self.needs_review.then(|| "1".to_string()));
        push("search", self.search.clone());
        push("page", self.page.filter(|p| *p > 0).map(|p| p.to_string()));
        query
    }
}

impl<T: Transport> PocketSmithClient<T> {
    pub fn build_add_transaction(&self, transaction_account_id: i64, input: &CreateTransaction) -> Result<HttpRequest> {
        self.build_json_request(
            HttpMethod::Post,
            &format!("/transaction_accounts/{transaction_account_id}/transactions"),
            Vec::new(),
            input,
        )
    }

    pub fn add_transaction(&self, transaction_account_id: i64, input: &CreateTransaction) -> Result<Transaction> {
        self.send(&self.build_add_transaction(transaction_account_id, input)?)
    }

    pub fn build_update_transaction(&self, transaction_id: i64, input: &CreateTransaction) -> Result<HttpRequest> {
        self.build_json_request(
            HttpMethod::Put,
            &format!("/transactions/{transaction_id}"),
            Vec::new(),
            input,
        )
    }

    pub fn update_transaction(&self, transaction_id: i64, input: &CreateTransaction) -> Result<Transaction> {
        self.send(&self.build_update_transaction(transaction_id, input)?)
    }

    pub fn build_list_transactions(
        &self,
        transaction_account_id: i64,
        options: &ListTransactionsOptions,
    ) -> Result<HttpRequest> {
        self.build_request(
            HttpMethod::Get,
            &format!("/transaction_accounts/{transaction_account_id}/transactions"),
            options.to_query(),
        )
    }

    /// One page of transactions matching `options`.
    pub fn list_transactions(
        &self,
        transaction_account_id: i64,
        options: &ListTransactionsOptions,
    ) -> Result<Vec<Transaction>> {
        self.send(&self.build_list_transactions(transaction_account_id, options)?)
    }

    /// Transactions between two dates (inclusive) matching `search`. Empty
    /// arguments are left out of the query.
    pub fn search_transactions(
        &self,
        transaction_account_id: i64,
        start_date: &str,
        end_date: &str,
        search: &str,
    ) -> Result<Vec<Transaction>> {
        let options = ListTransactionsOptions {
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
            search: Some(search.to_string()),
            ..Default::default()
        };
        self.list_transactions(transaction_account_id, &options)
    }

    /// Transactions within a day of `date` whose memo equals `memo`.
    pub fn search_transactions_by_memo(
        &self,
        transaction_account_id: i64,
        date: NaiveDate,
        memo: &str,
    ) -> Result<Vec<Transaction>> {
        self.search_around(transaction_account_id, date, |tx| {
            tx.memo.as_deref().unwrap_or_default() == memo
        })
    }

    /// Transactions within a day of `date` whose memo contains `needle`.
    pub fn search_transactions_by_memo_contains(
        &self,
        transaction_account_id: i64,
        date: NaiveDate,
        needle: &str,
    ) -> Result<Vec<Transaction>> {
        self.search_around(transaction_account_id, date, |tx| {
            tx.memo.as_deref().unwrap_or_default().contains(needle)
        })
    }

    /// Transactions within a day of `date` carrying cheque number `cheque_number`.
    pub fn search_transactions_by_cheque_number(
        &self,
        transaction_account_id: i64,
        date: NaiveDate,
        cheque_number: &str,
    ) -> Result<Vec<Transaction>> {
        self.search_around(transaction_account_id, date, |tx| {
            tx.cheque_number.as_deref().unwrap_or_default() == cheque_number
        })
    }

    fn search_around<F>(&self, transaction_account_id: i64, date: NaiveDate, keep: F) -> Result<Vec<Transaction>>
    where
        F: Fn(&Transaction) -> bool,
    {
        let (start, end) = day_window(date)?;
        let transactions = self.search_transactions(transaction_account_id, &start, &end, "")?;
        Ok(transactions.into_iter().filter(|tx| keep(tx)).collect())
    }
}

/// `date - 1 day` and `date + 1 day`, formatted for the API.
fn day_window(date: NaiveDate) -> Result<(String, String)> {
    let out_of_range = || ClientError::InvalidRequest(format!("no date window around {date}"));
    let start = date.checked_sub_days(Days::new(1)).ok_or_else(out_of_range)?;
    let end = date.checked_add_days(Days::new(1)).ok_or_else(out_of_range)?;
    Ok((
        start.format(DATE_FORMAT).to_string(),
        end.format(DATE_FORMAT).to_string(),
    ))
}
