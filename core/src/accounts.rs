//! Accounts and transaction accounts.

use serde::Serialize;

use crate::client::PocketSmithClient;
use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::{Account, CreateAccount, TransactionAccount, UpdateAccount, UpdateTransactionAccount};

#[derive(Serialize)]
struct DisplayOrder<'a> {
    accounts: &'a [Account],
}

impl<T: Transport> PocketSmithClient<T> {
    pub fn build_list_accounts(&self, user_id: i64) -> Result<HttpRequest> {
        self.build_request(HttpMethod::Get, &format!("/users/{user_id}/accounts"), Vec::new())
    }

    pub fn list_accounts(&self, user_id: i64) -> Result<Vec<Account>> {
        self.send(&self.build_list_accounts(user_id)?)
    }

    pub fn build_create_account(&self, user_id: i64, input: &CreateAccount) -> Result<HttpRequest> {
        self.build_json_request(HttpMethod::Post, &format!("/users/{user_id}/accounts"), Vec::new(), input)
    }

    pub fn create_account(&self, user_id: i64, input: &CreateAccount) -> Result<Account> {
        self.send(&self.build_create_account(user_id, input)?)
    }

    pub fn build_update_account(&self, account_id: i64, input: &UpdateAccount) -> Result<HttpRequest> {
        self.build_json_request(HttpMethod::Put, &format!("/accounts/{account_id}"), Vec::new(), input)
    }

    pub fn update_account(&self, account_id: i64, input: &UpdateAccount) -> Result<Account> {
        self.send(&self.build_update_account(account_id, input)?)
    }

    pub fn build_update_accounts_display_order(&self, user_id: i64, accounts: &[Account]) -> Result<HttpRequest> {
        self.build_json_request(
            HttpMethod::Put,
            &format!("/users/{user_id}/accounts"),
            Vec::new(),
            &DisplayOrder { accounts },
        )
    }

    /// Reorder the user's accounts to match the order of `accounts`.
    pub fn update_accounts_display_order(&self, user_id: i64, accounts: &[Account]) -> Result<Vec<Account>> {
        self.send(&self.build_update_accounts_display_order(user_id, accounts)?)
    }

    /// First account whose title equals `title` exactly.
    pub fn find_account_by_title(&self, user_id: i64, title: &str) -> Result<Account> {
        self.list_accounts(user_id)?
            .into_iter()
            .find(|account| account.title == title)
            .ok_or(ClientError::NotFound)
    }

    pub fn build_list_institution_accounts(&self, institution_id: i64) -> Result<HttpRequest> {
        self.build_request(
            HttpMethod::Get,
            &format!("/institutions/{institution_id}/accounts"),
            Vec::new(),
        )
    }

    pub fn list_institution_accounts(&self, institution_id: i64) -> Result<Vec<Account>> {
        self.send(&self.build_list_institution_accounts(institution_id)?)
    }

    pub fn build_list_transaction_accounts(&self, user_id: i64) -> Result<HttpRequest> {
        self.build_request(
            HttpMethod::Get,
            &format!("/users/{user_id}/transaction_accounts"),
            Vec::new(),
        )
    }

    pub fn list_transaction_accounts(&self, user_id: i64) -> Result<Vec<TransactionAccount>> {
        self.send(&self.build_list_transaction_accounts(user_id)?)
    }

    pub fn build_update_transaction_account(
        &self,
        transaction_account_id: i64,
        input: &UpdateTransactionAccount,
    ) -> Result<HttpRequest> {
        self.build_json_request(
            HttpMethod::Put,
            &format!("/transaction_accounts/{transaction_account_id}"),
            Vec::new(),
            input,
        )
    }

    /// Change the starting balance or institution of a transaction account.
    pub fn update_transaction_account(
        &self,
        transaction_account_id: i64,
        input: &UpdateTransactionAccount,
    ) -> Result<TransactionAccount> {
        self.send(&self.build_update_transaction_account(transaction_account_id, input)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;
    use crate::testing::{stub_client, StubTransport};
    use crate::types::{AccountType, CreateAccount, UpdateAccount, UpdateTransactionAccount};
    use crate::ClientError;

    const TWO_ACCOUNTS: &str = r#"[
        {"id":1,"title":"Everyday","currency_code":"nzd","type":"bank"},
        {"id":2,"title":"Visa","currency_code":"nzd","type":"credits"}
    ]"#;

    #[test]
    fn create_account_posts_payload_and_decodes_result() {
        let client = stub_client(StubTransport::new().respond(
            201,
            r#"{"id":31,"title":"Savings","currency_code":"USD","type":"bank","is_net_worth":true}"#,
        ));
        let input = CreateAccount {
            title: "Savings".to_string(),
            currency_code: "USD".to_string(),
            account_type: AccountType::Bank,
            institution_id: 7,
        };
        let account = client.create_account(1, &input).unwrap();
        assert_eq!(account.id, 31);
        assert_eq!(account.title, "Savings");

        let req = client.transport().last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.pocketsmith.com/v2/users/1/accounts");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title":"Savings","currency_code":"USD","type":"bank","institution_id":7})
        );
    }

    #[test]
    fn update_account_sends_only_set_fields() {
        let client = stub_client(StubTransport::new());
        let input = UpdateAccount {
            title: Some("Joint".to_string()),
            is_net_worth: Some(false),
            ..Default::default()
        };
        let req = client.build_update_account(12, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://api.pocketsmith.com/v2/accounts/12");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title":"Joint","is_net_worth":false}));
    }

    #[test]
    fn display_order_wraps_accounts() {
        let client = stub_client(StubTransport::new().respond(200, TWO_ACCOUNTS));
        let accounts: Vec<crate::Account> = serde_json::from_str(TWO_ACCOUNTS).unwrap();
        let reordered = client.update_accounts_display_order(1, &accounts).unwrap();
        assert_eq!(reordered.len(), 2);

        let req = client.transport().last_request();
        assert_eq!(req.method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["accounts"][0]["id"], 1);
        assert_eq!(body["accounts"][1]["type"], "credits");
    }

    #[test]
    fn find_account_by_title_matches_exactly() {
        let client = stub_client(StubTransport::new().respond(200, TWO_ACCOUNTS));
        let account = client.find_account_by_title(1, "Visa").unwrap();
        assert_eq!(account.id, 2);
    }

    #[test]
    fn find_account_by_title_without_match_is_not_found() {
        let client = stub_client(StubTransport::new().respond(200, TWO_ACCOUNTS));
        let err = client.find_account_by_title(1, "visa").unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[test]
    fn find_account_by_title_propagates_api_error() {
        let client = stub_client(StubTransport::new().respond(403, r#"{"error":"Forbidden"}"#));
        let err = client.find_account_by_title(1, "Visa").unwrap_err();
        assert!(matches!(err, ClientError::Api(_)));
    }

    #[test]
    fn institution_accounts_path() {
        let client = stub_client(StubTransport::new());
        let req = client.build_list_institution_accounts(5).unwrap();
        assert_eq!(req.url, "https://api.pocketsmith.com/v2/institutions/5/accounts");
        assert!(req.body.is_none());
    }

    #[test]
    fn update_transaction_account_payload() {
        let client = stub_client(StubTransport::new().respond(
            200,
            r#"{"id":100,"name":"Everyday","starting_balance":250.0,"starting_balance_date":"2024-01-01"}"#,
        ));
        let input = UpdateTransactionAccount {
            starting_balance: Some(250.0),
            starting_balance_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let updated = client.update_transaction_account(100, &input).unwrap();
        assert_eq!(updated.starting_balance, 250.0);

        let req = client.transport().last_request();
        assert_eq!(req.url, "https://api.pocketsmith.com/v2/transaction_accounts/100");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("institution_id").is_none());
        assert_eq!(body["starting_balance_date"], "2024-01-01");
    }

    #[test]
    fn list_transaction_accounts_decodes() {
        let client = stub_client(
            StubTransport::new().respond(200, r#"[{"id":100,"name":"Everyday","type":"bank"}]"#),
        );
        let accounts = client.list_transaction_accounts(1).unwrap();
        assert_eq!(accounts[0].name, "Everyday");
        assert_eq!(
            client.transport().last_request().url,
            "https://api.pocketsmith.com/v2/users/1/transaction_accounts"
        );
    }
}
