//! Wire shapes and in-memory state for the mock API.
//!
//! These mirror a subset of the service's schema and are defined
//! independently of the client's types, so integration tests catch drift.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub name: String,
    pub email: String,
    pub time_zone: String,
    pub base_currency_code: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: i64,
    pub title: String,
    pub currency_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionAccount {
    pub id: i64,
    pub name: String,
    pub currency_code: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub starting_balance: f64,
    pub starting_balance_date: Option<String>,
    pub current_balance: f64,
    pub institution: Institution,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub title: String,
    pub currency_code: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub is_net_worth: bool,
    pub current_balance: f64,
    pub current_balance_in_base_currency: f64,
    pub primary_transaction_account: TransactionAccount,
    pub transaction_accounts: Vec<TransactionAccount>,
}

impl Account {
    pub fn institution_id(&self) -> i64 {
        self.primary_transaction_account.institution.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub parent_id: Option<i64>,
    pub children: Vec<Category>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryRule {
    pub id: i64,
    pub category: Category,
    pub payee_matches: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub payee: String,
    pub amount: f64,
    pub date: String,
    pub memo: Option<String>,
    pub cheque_number: Option<String>,
    pub note: Option<String>,
    pub labels: Vec<String>,
    pub category: Option<Category>,
    pub is_transfer: bool,
    pub needs_review: bool,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub transaction_account: TransactionAccount,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentTypeMeta {
    pub title: String,
    pub description: String,
    pub extension: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variants {
    pub thumb_url: Option<String>,
    pub large_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub title: String,
    pub file_name: String,
    #[serde(rename = "type")]
    pub attachment_type: String,
    pub content_type: String,
    pub content_type_meta: ContentTypeMeta,
    pub original_url: String,
    pub variants: Variants,
}

// Request payloads.

#[derive(Deserialize)]
pub struct CreateAccount {
    pub title: String,
    pub currency_code: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub institution_id: i64,
}

#[derive(Deserialize)]
pub struct UpdateAccount {
    pub title: Option<String>,
    pub currency_code: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub is_net_worth: Option<bool>,
}

#[derive(Deserialize)]
pub struct AccountRef {
    pub id: i64,
}

#[derive(Deserialize)]
pub struct DisplayOrder {
    pub accounts: Vec<AccountRef>,
}

#[derive(Deserialize)]
pub struct UpdateTransactionAccount {
    pub institution_id: Option<i64>,
    pub starting_balance: Option<f64>,
    pub starting_balance_date: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateInstitution {
    pub title: String,
    pub currency_code: String,
}

#[derive(Deserialize)]
pub struct TransactionInput {
    pub payee: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub is_transfer: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Integer id, or `""` for no category.
    #[serde(default)]
    pub category_id: Option<serde_json::Value>,
    pub note: Option<String>,
    pub memo: Option<String>,
    pub cheque_number: Option<String>,
    #[serde(default)]
    pub needs_review: bool,
}

#[derive(Deserialize)]
pub struct CreateAttachment {
    pub title: String,
    pub file_name: String,
    pub file_data: String,
}

#[derive(Deserialize)]
pub struct UpdateAttachment {
    pub title: String,
}

#[derive(Deserialize)]
pub struct AttachmentRef {
    pub attachment_id: i64,
}

// Query strings.

#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub updated_since: Option<String>,
    pub uncategorised: Option<u8>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub needs_review: Option<u8>,
    pub search: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteInstitutionParams {
    pub merge_into_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AttachmentFilters {
    pub unassigned: Option<u8>,
}

/// Everything the mock knows, seeded with one user and a small ledger.
#[derive(Debug)]
pub struct MockState {
    pub developer_key: String,
    pub user: User,
    pub institutions: Vec<Institution>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub category_rules: Vec<CategoryRule>,
    pub transactions: Vec<Transaction>,
    pub attachments: Vec<Attachment>,
    /// (transaction id, attachment id)
    pub links: Vec<(i64, i64)>,
    next_id: i64,
}

impl MockState {
    pub fn seeded(developer_key: &str) -> Self {
        let anz = Institution {
            id: 1,
            title: "ANZ Bank".to_string(),
            currency_code: "nzd".to_string(),
        };
        let everyday = TransactionAccount {
            id: 100,
            name: "Everyday".to_string(),
            currency_code: "nzd".to_string(),
            account_type: "bank".to_string(),
            starting_balance: 0.0,
            starting_balance_date: None,
            current_balance: 1520.5,
            institution: anz.clone(),
        };
        let groceries = Category {
            id: 2,
            title: "Groceries".to_string(),
            parent_id: Some(1),
            children: Vec::new(),
        };
        let food = Category {
            id: 1,
            title: "Food".to_string(),
            parent_id: None,
            children: vec![groceries.clone()],
        };

        Self {
            developer_key: developer_key.to_string(),
            user: User {
                id: 1,
                login: "demo".to_string(),
                name: "Demo User".to_string(),
                email: "demo@example.com".to_string(),
                time_zone: "Auckland".to_string(),
                base_currency_code: "nzd".to_string(),
                created_at: "2020-01-01T00:00:00Z".to_string(),
                updated_at: "2024-06-01T00:00:00Z".to_string(),
            },
            institutions: vec![anz],
            accounts: vec![Account {
                id: 10,
                title: "Everyday".to_string(),
                currency_code: "nzd".to_string(),
                account_type: "bank".to_string(),
                is_net_worth: true,
                current_balance: 1520.5,
                current_balance_in_base_currency: 1520.5,
                primary_transaction_account: everyday.clone(),
                transaction_accounts: vec![everyday],
            }],
            categories: vec![food],
            category_rules: vec![CategoryRule {
                id: 1,
                category: groceries,
                payee_matches: "COUNTDOWN".to_string(),
            }],
            transactions: Vec::new(),
            attachments: Vec::new(),
            links: Vec::new(),
            next_id: 1000,
        }
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn institution(&self, id: i64) -> Option<&Institution> {
        self.institutions.iter().find(|i| i.id == id)
    }

    pub fn transaction_account(&self, id: i64) -> Option<&TransactionAccount> {
        self.accounts
            .iter()
            .flat_map(|a| a.transaction_accounts.iter())
            .find(|ta| ta.id == id)
    }

    /// Category by id, searching nested children too.
    pub fn category(&self, id: i64) -> Option<&Category> {
        fn walk(categories: &[Category], id: i64) -> Option<&Category> {
            categories
                .iter()
                .find_map(|c| if c.id == id { Some(c) } else { walk(&c.children, id) })
        }
        walk(&self.categories, id)
    }
}
