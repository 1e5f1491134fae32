//! Domain DTOs for the PocketSmith API.
//!
//! # Design
//! Response types default every missing member and keep nullable members as
//! `Option`, so partial payloads still decode. Non-`Option` members also read
//! an explicit `null` as their default. Dates and timestamps stay as the
//! strings the service sends.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub avatar_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub beta_user: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub week_start_day: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_reviewing_transactions: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub base_currency_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub always_show_base_currency: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub using_multiple_currencies: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub available_accounts: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub available_budgets: i32,
    pub forecast_last_updated_at: Option<String>,
    pub forecast_last_accessed_at: Option<String>,
    pub forecast_start_date: Option<String>,
    pub forecast_end_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub forecast_defer_recalculate: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub forecast_needs_recalculate: bool,
    pub last_logged_in_at: Option<String>,
    pub last_activity_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Kind of account. Types this client does not know are kept verbatim in
/// `Other`, so they serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountType {
    Bank,
    Credits,
    Cash,
    Loans,
    Mortgage,
    Stocks,
    Vehicle,
    Property,
    Insurance,
    OtherAsset,
    OtherLiability,
    Other(String),
}

impl AccountType {
    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Bank => "bank",
            AccountType::Credits => "credits",
            AccountType::Cash => "cash",
            AccountType::Loans => "loans",
            AccountType::Mortgage => "mortgage",
            AccountType::Stocks => "stocks",
            AccountType::Vehicle => "vehicle",
            AccountType::Property => "property",
            AccountType::Insurance => "insurance",
            AccountType::OtherAsset => "other_asset",
            AccountType::OtherLiability => "other_liability",
            AccountType::Other(name) => name,
        }
    }
}

impl From<&str> for AccountType {
    fn from(name: &str) -> Self {
        match name {
            "bank" => AccountType::Bank,
            "credits" => AccountType::Credits,
            "cash" => AccountType::Cash,
            "loans" => AccountType::Loans,
            "mortgage" => AccountType::Mortgage,
            "stocks" => AccountType::Stocks,
            "vehicle" => AccountType::Vehicle,
            "property" => AccountType::Property,
            "insurance" => AccountType::Insurance,
            "other_asset" => AccountType::OtherAsset,
            "other_liability" => AccountType::OtherLiability,
            other => AccountType::Other(other.to_string()),
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Other(String::new())
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(AccountType::from(name.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Institution {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub interest_rate: Option<f64>,
    pub interest_rate_repeat_id: Option<i64>,
    #[serde(rename = "type")]
    pub scenario_type: Option<String>,
    pub minimum_value: Option<f64>,
    pub maximum_value: Option<f64>,
    pub achieve_date: Option<String>,
    pub starting_balance: Option<f64>,
    pub starting_balance_date: Option<String>,
    pub closing_balance: Option<f64>,
    pub closing_balance_date: Option<String>,
    pub current_balance: Option<f64>,
    pub current_balance_date: Option<String>,
    pub current_balance_in_base_currency: Option<f64>,
    pub current_balance_exchange_rate: Option<f64>,
    pub safe_balance: Option<f64>,
    pub safe_balance_in_base_currency: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_balance: f64,
    pub current_balance_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_balance_in_base_currency: f64,
    pub current_balance_exchange_rate: Option<f64>,
    pub safe_balance: Option<f64>,
    pub safe_balance_in_base_currency: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub starting_balance: f64,
    pub starting_balance_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub institution: Option<Institution>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub account_type: AccountType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub account_type: AccountType,
    #[serde(deserialize_with = "null_as_default")]
    pub is_net_worth: bool,
    pub primary_transaction_account: Option<TransactionAccount>,
    pub primary_scenario: Option<Scenario>,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_accounts: Vec<TransactionAccount>,
    #[serde(deserialize_with = "null_as_default")]
    pub scenarios: Vec<Scenario>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_balance: f64,
    pub current_balance_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_balance_in_base_currency: f64,
    pub current_balance_exchange_rate: Option<f64>,
    pub safe_balance: Option<f64>,
    pub safe_balance_in_base_currency: Option<f64>,
}

/// Payload for `PocketSmithClient::create_account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub title: String,
    pub currency_code: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub institution_id: i64,
}

/// Payload for `PocketSmithClient::update_account`. Omitted fields are left
/// unchanged by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_net_worth: Option<bool>,
}

/// Payload for `PocketSmithClient::update_transaction_account`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_balance_date: Option<String>,
}

/// Category reference in a transaction payload.
///
/// The service spells "no category" as an empty string, so `None`
/// serializes to `""` and a concrete id to a JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    None,
    Id(i64),
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        CategoryId::Id(id)
    }
}

impl Serialize for CategoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryId::None => serializer.serialize_str(""),
            CategoryId::Id(id) => serializer.serialize_i64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(i64),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(CategoryId::None),
            Some(Raw::Id(id)) => Ok(CategoryId::Id(id)),
            Some(Raw::Text(text)) if text.is_empty() => Ok(CategoryId::None),
            Some(Raw::Text(text)) => text
                .parse()
                .map(CategoryId::Id)
                .map_err(|_| de::Error::custom(format!("invalid category id {text:?}"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub colour: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_transfer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_bill: bool,
    pub refund_behaviour: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<Category>,
    pub parent_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub roll_up: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRule {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub category: Option<Category>,
    #[serde(deserialize_with = "null_as_default")]
    pub payee_matches: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl CategoryRule {
    /// True when `target` contains this rule's payee pattern.
    pub fn matches(&self, target: &str) -> bool {
        target.contains(self.payee_matches.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub payee: String,
    pub original_payee: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub upload_source: Option<String>,
    pub category: Option<Category>,
    pub closing_balance: Option<f64>,
    pub cheque_number: Option<String>,
    pub memo: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    pub amount_in_base_currency: Option<f64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_transfer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub needs_review: bool,
    pub status: Option<String>,
    pub note: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    pub transaction_account: Option<TransactionAccount>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Payload for adding or updating a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTransaction {
    pub payee: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub is_transfer: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheque_number: Option<String>,
    #[serde(default)]
    pub needs_review: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTypeMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentVariants {
    pub thumb_url: Option<String>,
    pub large_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(rename = "type")]
    pub attachment_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type_meta: ContentTypeMeta,
    pub original_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub variants: AttachmentVariants,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Payload for `PocketSmithClient::create_attachment`. `file_data` is the
/// base64-encoded file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttachment {
    pub title: String,
    pub file_name: String,
    pub file_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAttachment {
    pub title: String,
}
