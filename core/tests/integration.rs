//! End-to-end checks against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every resource group
//! through `PocketSmithClient` over real HTTP with the default ureq
//! transport.

use chrono::NaiveDate;
use pocketsmith_core::{
    AccountType, CategoryId, ClientConfig, ClientError, CreateAccount, CreateAttachment, CreateTransaction,
    ListTransactionsOptions, PocketSmithClient, UpdateAccount, UpdateAttachment, UpdateTransactionAccount,
};

const KEY: &str = "integration-key";

/// Spawn a fresh mock server and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_key(listener, KEY).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> PocketSmithClient {
    PocketSmithClient::with_config(ClientConfig::new(KEY).with_base_url(base_url))
}

fn tx(payee: &str, date: &str, memo: Option<&str>, cheque: Option<&str>) -> CreateTransaction {
    CreateTransaction {
        payee: payee.to_string(),
        amount: -25.0,
        date: date.to_string(),
        memo: memo.map(str::to_string),
        cheque_number: cheque.map(str::to_string),
        category_id: Some(CategoryId::Id(2)),
        ..Default::default()
    }
}

#[test]
fn wrong_key_is_an_api_error() {
    let base = start_server();
    let client = PocketSmithClient::with_config(ClientConfig::new("wrong").with_base_url(&base));
    let err = client.get_current_user().unwrap_err();
    match err {
        ClientError::Api(api) => assert_eq!(api.error, "Invalid developer key"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}")).get_current_user().unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
}

#[test]
fn accounts_and_institutions() {
    let base = start_server();
    let client = client(&base);

    let me = client.get_current_user().unwrap();
    assert_eq!(me.id, 1);

    let anz = client.find_institution_by_title(me.id, "ANZ Bank").unwrap();
    let kiwi = client.create_institution(me.id, "Kiwibank", "nzd").unwrap();
    assert_eq!(client.find_institution_by_title_containing(me.id, "Kiwi").unwrap(), kiwi);
    assert!(matches!(
        client.find_institution_by_title(me.id, "Westpac"),
        Err(ClientError::NotFound)
    ));

    let savings = client
        .create_account(
            me.id,
            &CreateAccount {
                title: "Savings".to_string(),
                currency_code: "USD".to_string(),
                account_type: AccountType::Bank,
                institution_id: kiwi.id,
            },
        )
        .unwrap();
    assert_eq!(savings.title, "Savings");
    assert_eq!(savings.account_type, AccountType::Bank);

    let renamed = client
        .update_account(
            savings.id,
            &UpdateAccount {
                title: Some("Rainy day".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.title, "Rainy day");
    assert_eq!(renamed.currency_code, "USD");

    let found = client.find_account_by_title(me.id, "Rainy day").unwrap();
    assert_eq!(found.id, savings.id);
    assert!(matches!(
        client.find_account_by_title(me.id, "Savings"),
        Err(ClientError::NotFound)
    ));

    let mut accounts = client.list_accounts(me.id).unwrap();
    accounts.reverse();
    let reordered = client.update_accounts_display_order(me.id, &accounts).unwrap();
    assert_eq!(reordered[0].id, savings.id);

    assert_eq!(client.list_institution_accounts(kiwi.id).unwrap().len(), 1);

    let ta_id = savings.primary_transaction_account.unwrap().id;
    let updated = client
        .update_transaction_account(
            ta_id,
            &UpdateTransactionAccount {
                institution_id: Some(anz.id),
                starting_balance: Some(100.0),
                starting_balance_date: Some("2024-01-01".to_string()),
            },
        )
        .unwrap();
    assert_eq!(updated.starting_balance, 100.0);
    assert_eq!(updated.institution.unwrap().id, anz.id);
    assert_eq!(client.list_transaction_accounts(me.id).unwrap().len(), 2);

    client.delete_institution(kiwi.id, Some(anz.id)).unwrap();
    assert!(matches!(
        client.find_institution_by_title(me.id, "Kiwibank"),
        Err(ClientError::NotFound)
    ));
    let err = client.delete_institution(kiwi.id, None).unwrap_err();
    assert!(matches!(err, ClientError::Api(ref api) if api.error == "Institution not found"));
}

#[test]
fn transactions_and_searches() {
    let base = start_server();
    let client = client(&base);
    let account = 100;

    client.add_transaction(account, &tx("Rent", "2024-06-14", Some("REF-1001"), None)).unwrap();
    client
        .add_transaction(account, &tx("Power", "2024-06-15", Some("REF-1001 late"), Some("000123")))
        .unwrap();
    client.add_transaction(account, &tx("Water", "2024-06-18", Some("REF-1001"), None)).unwrap();
    let salary = client
        .add_transaction(
            account,
            &CreateTransaction {
                needs_review: true,
                amount: 3000.0,
                ..tx("Salary", "2024-06-16", None, Some("000123"))
            },
        )
        .unwrap();
    assert_eq!(salary.category.as_ref().unwrap().title, "Groceries");

    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let exact = client.search_transactions_by_memo(account, date, "REF-1001").unwrap();
    assert_eq!(exact.iter().map(|t| t.payee.as_str()).collect::<Vec<_>>(), vec!["Rent"]);

    let contains = client.search_transactions_by_memo_contains(account, date, "REF-1001").unwrap();
    assert_eq!(contains.len(), 2);

    let cheques = client.search_transactions_by_cheque_number(account, date, "000123").unwrap();
    assert_eq!(cheques.len(), 2);

    let searched = client.search_transactions(account, "", "", "water").unwrap();
    assert_eq!(searched.len(), 1);

    let review = client
        .list_transactions(account, &ListTransactionsOptions::new().needs_review())
        .unwrap();
    assert_eq!(review.iter().map(|t| t.id).collect::<Vec<_>>(), vec![salary.id]);

    let cleared = client
        .update_transaction(
            salary.id,
            &CreateTransaction {
                category_id: Some(CategoryId::None),
                ..tx("Salary", "2024-06-16", None, None)
            },
        )
        .unwrap();
    assert!(cleared.category.is_none());

    let uncategorised = client
        .list_transactions(account, &ListTransactionsOptions::new().uncategorised())
        .unwrap();
    assert_eq!(uncategorised.len(), 1);

    let second_page = client
        .list_transactions(account, &ListTransactionsOptions::new().page(2))
        .unwrap();
    assert!(second_page.is_empty());

    let err = client.list_transactions(9999, &ListTransactionsOptions::new()).unwrap_err();
    assert!(matches!(err, ClientError::Api(_)));
}

#[test]
fn categories_and_rules() {
    let base = start_server();
    let client = client(&base);

    let categories = client.list_categories(1).unwrap();
    assert_eq!(categories[0].title, "Food");
    assert_eq!(categories[0].children[0].title, "Groceries");

    let rules = client.list_category_rules(1).unwrap();
    let rule = rules.iter().find(|r| r.matches("COUNTDOWN PONSONBY")).unwrap();
    assert_eq!(rule.category.as_ref().unwrap().id, 2);
}

#[test]
fn attachments() {
    let base = start_server();
    let client = client(&base);
    let transaction = client
        .add_transaction(100, &tx("Cafe", "2024-06-15", None, None))
        .unwrap();

    let receipt = client
        .create_attachment(
            1,
            &CreateAttachment {
                title: "Receipt".to_string(),
                file_name: "receipt.png".to_string(),
                file_data: "iVBORw0KGgo=".to_string(),
            },
        )
        .unwrap();
    assert_eq!(client.list_attachments(1, true).unwrap().len(), 1);

    // The service answers 200 with an error body for unknown attachments.
    let err = client.attach_to_transaction(transaction.id, 424242).unwrap_err();
    assert!(matches!(err, ClientError::Api(ref api) if api.error == "Attachment not found"));

    client.attach_to_transaction(transaction.id, receipt.id).unwrap();
    assert!(client.list_attachments(1, true).unwrap().is_empty());
    assert_eq!(client.list_attachments(1, false).unwrap().len(), 1);
    let linked = client.list_transaction_attachments(transaction.id).unwrap();
    assert_eq!(linked[0].id, receipt.id);

    let renamed = client
        .update_attachment(receipt.id, &UpdateAttachment { title: "Flat white".to_string() })
        .unwrap();
    assert_eq!(renamed.title.as_deref(), Some("Flat white"));
    assert_eq!(client.get_attachment(receipt.id).unwrap().title.as_deref(), Some("Flat white"));

    client.unassign_attachment(transaction.id, receipt.id).unwrap();
    assert!(client.list_transaction_attachments(transaction.id).unwrap().is_empty());
    let err = client.unassign_attachment(transaction.id, receipt.id).unwrap_err();
    assert!(matches!(err, ClientError::Api(_)));
}
