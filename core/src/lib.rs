//! Blocking, typed client for the PocketSmith v2 REST API.
//!
//! # Overview
//! `PocketSmithClient` covers the user profile, accounts, transaction
//! accounts, institutions, categories and category rules, transactions and
//! attachments. Each operation has a pure `build_*` method returning an
//! `HttpRequest`, and a calling method that executes it.
//!
//! # Design
//! - Every call goes through one pipeline (`PocketSmithClient::send` /
//!   `send_empty`): buffer the body, probe for `{"error": "..."}`, then decode
//!   the same bytes into the target. Status codes never decide the outcome,
//!   because the service reports some failures under HTTP 200.
//! - The network sits behind the `Transport` trait. `UreqTransport` holds one
//!   `ureq::Agent` for the lifetime of the client, so connections are reused.
//! - No retries, caching or pagination; failures are returned as they occur.
//!
//! ```no_run
//! use pocketsmith_core::PocketSmithClient;
//!
//! let client = PocketSmithClient::new("my-developer-key");
//! let me = client.get_current_user()?;
//! for account in client.list_accounts(me.id)? {
//!     println!("{} {}", account.title, account.current_balance);
//! }
//! # Ok::<(), pocketsmith_core::ClientError>(())
//! ```

mod accounts;
mod attachments;
mod categories;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod institutions;
mod transactions;
pub mod types;
mod users;

#[cfg(test)]
mod testing;

pub use client::{parse_empty_response, parse_response, probe_api_error, PocketSmithClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ClientError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport, DEFAULT_BODY_LIMIT};
pub use transactions::ListTransactionsOptions;
pub use types::{
    Account, AccountType, Attachment, AttachmentVariants, Category, CategoryId, CategoryRule, ContentTypeMeta,
    CreateAccount, CreateAttachment, CreateTransaction, Institution, Scenario, Transaction, TransactionAccount,
    TransactionType, UpdateAccount, UpdateAttachment, UpdateTransactionAccount, User,
};
