//! In-memory stand-in for the PocketSmith v2 API.
//!
//! Every route requires the `x-developer-key` header. Failures are reported
//! as `{"error": "..."}` bodies. Attaching an unknown attachment to a
//! transaction answers HTTP 200 with an error body, as the real service does.

pub mod models;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tokio::{net::TcpListener, sync::RwLock};

use models::*;

pub const DEFAULT_DEVELOPER_KEY: &str = "test-developer-key";
const PAGE_SIZE: usize = 100;

pub type Db = Arc<RwLock<MockState>>;

/// An error response: status plus `{"error": message}`.
#[derive(Debug)]
pub struct ApiFailure(StatusCode, String);

impl ApiFailure {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self(status, message.into())
    }

    fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{what} not found"))
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.0, error = %self.1, "rejecting request");
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiFailure>;
type Created<T> = Result<(StatusCode, Json<T>), ApiFailure>;

pub fn app() -> Router {
    app_with_key(DEFAULT_DEVELOPER_KEY)
}

pub fn app_with_key(developer_key: &str) -> Router {
    let db: Db = Arc::new(RwLock::new(MockState::seeded(developer_key)));
    Router::new()
        .route("/me", get(get_me))
        .route(
            "/users/{id}/accounts",
            get(list_accounts).post(create_account).put(update_display_order),
        )
        .route("/accounts/{id}", put(update_account))
        .route("/users/{id}/transaction_accounts", get(list_transaction_accounts))
        .route("/transaction_accounts/{id}", put(update_transaction_account))
        .route(
            "/transaction_accounts/{id}/transactions",
            get(list_transactions).post(add_transaction),
        )
        .route("/transactions/{id}", put(update_transaction))
        .route("/users/{id}/institutions", get(list_institutions).post(create_institution))
        .route("/institutions/{id}", delete(delete_institution))
        .route("/institutions/{id}/accounts", get(list_institution_accounts))
        .route("/users/{id}/categories", get(list_categories))
        .route("/users/{id}/category_rules", get(list_category_rules))
        .route("/users/{id}/attachments", get(list_attachments).post(create_attachment))
        .route(
            "/transactions/{id}/attachments",
            get(list_transaction_attachments).post(attach_to_transaction),
        )
        .route(
            "/transactions/{id}/attachments/{attachment_id}",
            delete(unassign_attachment),
        )
        .route("/attachments/{id}", get(get_attachment).put(update_attachment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_key(listener, DEFAULT_DEVELOPER_KEY).await
}

pub async fn run_with_key(listener: TcpListener, developer_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_key(developer_key)).await
}

fn authorize(state: &MockState, headers: &HeaderMap, user_id: Option<i64>) -> Result<(), ApiFailure> {
    let key = headers.get("x-developer-key").and_then(|v| v.to_str().ok());
    if key != Some(state.developer_key.as_str()) {
        return Err(ApiFailure::new(StatusCode::UNAUTHORIZED, "Invalid developer key"));
    }
    match user_id {
        Some(id) if id != state.user.id => Err(ApiFailure::new(StatusCode::FORBIDDEN, "Forbidden")),
        _ => Ok(()),
    }
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiFailure> {
    serde_json::from_slice(body).map_err(|e| ApiFailure::invalid(format!("Invalid request body: {e}")))
}

// --- user ---

async fn get_me(State(db): State<Db>, headers: HeaderMap) -> ApiResult<User> {
    let state = db.read().await;
    authorize(&state, &headers, None)?;
    Ok(Json(state.user.clone()))
}

// --- accounts ---

async fn list_accounts(State(db): State<Db>, headers: HeaderMap, Path(user_id): Path<i64>) -> ApiResult<Vec<Account>> {
    let state = db.read().await;
    authorize(&state, &headers, Some(user_id))?;
    Ok(Json(state.accounts.clone()))
}

async fn create_account(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    body: Bytes,
) -> Created<Account> {
    let mut state = db.write().await;
    authorize(&state, &headers, Some(user_id))?;
    let input: CreateAccount = parse_body(&body)?;
    if input.title.is_empty() {
        return Err(ApiFailure::invalid("Title can't be blank"));
    }
    let institution = state
        .institution(input.institution_id)
        .cloned()
        .ok_or_else(|| ApiFailure::invalid("Institution not found"))?;

    let id = state.next_id();
    let transaction_account = TransactionAccount {
        id: state.next_id(),
        name: input.title.clone(),
        currency_code: input.currency_code.clone(),
        account_type: input.account_type.clone(),
        starting_balance: 0.0,
        starting_balance_date: None,
        current_balance: 0.0,
        institution,
    };
    let account = Account {
        id,
        title: input.title,
        currency_code: input.currency_code,
        account_type: input.account_type,
        is_net_worth: true,
        current_balance: 0.0,
        current_balance_in_base_currency: 0.0,
        primary_transaction_account: transaction_account.clone(),
        transaction_accounts: vec![transaction_account],
    };
    state.accounts.push(account.clone());
    Ok((StatusCode::CREATED, Json(account)))
}

async fn update_account(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(account_id): Path<i64>,
    body: Bytes,
) -> ApiResult<Account> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    let input: UpdateAccount = parse_body(&body)?;
    let account = state
        .accounts
        .iter_mut()
        .find(|a| a.id == account_id)
        .ok_or_else(|| ApiFailure::not_found("Account"))?;
    if let Some(title) = input.title {
        account.title = title;
    }
    if let Some(currency_code) = input.currency_code {
        account.currency_code = currency_code;
    }
    if let Some(account_type) = input.account_type {
        account.account_type = account_type;
    }
    if let Some(is_net_worth) = input.is_net_worth {
        account.is_net_worth = is_net_worth;
    }
    Ok(Json(account.clone()))
}

async fn update_display_order(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    body: Bytes,
) -> ApiResult<Vec<Account>> {
    let mut state = db.write().await;
    authorize(&state, &headers, Some(user_id))?;
    let input: DisplayOrder = parse_body(&body)?;

    let mut reordered = Vec::with_capacity(state.accounts.len());
    for wanted in &input.accounts {
        let pos = state
            .accounts
            .iter()
            .position(|a| a.id == wanted.id)
            .ok_or_else(|| ApiFailure::invalid(format!("Unknown account {}", wanted.id)))?;
        reordered.push(state.accounts.remove(pos));
    }
    // Accounts left out keep their relative order after the listed ones.
    reordered.append(&mut state.accounts);
    state.accounts = reordered;
    Ok(Json(state.accounts.clone()))
}

async fn list_institution_accounts(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(institution_id): Path<i64>,
) -> ApiResult<Vec<Account>> {
    let state = db.read().await;
    authorize(&state, &headers, None)?;
    if state.institution(institution_id).is_none() {
        return Err(ApiFailure::not_found("Institution"));
    }
    let accounts = state
        .accounts
        .iter()
        .filter(|a| a.institution_id() == institution_id)
        .cloned()
        .collect();
    Ok(Json(accounts))
}

// --- transaction accounts ---

async fn list_transaction_accounts(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<TransactionAccount>> {
    let state = db.read().await;
    authorize(&state, &headers, Some(user_id))?;
    let accounts = state
        .accounts
        .iter()
        .flat_map(|a| a.transaction_accounts.iter().cloned())
        .collect();
    Ok(Json(accounts))
}

async fn update_transaction_account(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    body: Bytes,
) -> ApiResult<TransactionAccount> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    let input: UpdateTransactionAccount = parse_body(&body)?;
    if state.transaction_account(id).is_none() {
        return Err(ApiFailure::not_found("Transaction account"));
    }
    let institution = match input.institution_id {
        Some(inst) => Some(
            state
                .institution(inst)
                .cloned()
                .ok_or_else(|| ApiFailure::invalid("Institution not found"))?,
        ),
        None => None,
    };

    let mut updated = None;
    for account in state.accounts.iter_mut() {
        let copies = account
            .transaction_accounts
            .iter_mut()
            .chain(std::iter::once(&mut account.primary_transaction_account));
        for ta in copies.filter(|ta| ta.id == id) {
            if let Some(institution) = &institution {
                ta.institution = institution.clone();
            }
            if let Some(balance) = input.starting_balance {
                ta.starting_balance = balance;
            }
            if let Some(date) = &input.starting_balance_date {
                ta.starting_balance_date = Some(date.clone());
            }
            updated = Some(ta.clone());
        }
    }
    updated
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Transaction account"))
}

// --- transactions ---

fn transaction_type(amount: f64) -> String {
    if amount < 0.0 { "debit" } else { "credit" }.to_string()
}

fn resolve_category(state: &MockState, raw: Option<&serde_json::Value>) -> Result<Option<Category>, ApiFailure> {
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(serde_json::Value::Number(n)) => {
            let id = n.as_i64().ok_or_else(|| ApiFailure::invalid("Invalid category_id"))?;
            state
                .category(id)
                .cloned()
                .map(Some)
                .ok_or_else(|| ApiFailure::invalid("Category not found"))
        }
        Some(_) => Err(ApiFailure::invalid("Invalid category_id")),
    }
}

fn apply_input(tx: &mut Transaction, input: TransactionInput, category: Option<Category>) {
    tx.transaction_type = transaction_type(input.amount);
    tx.payee = input.payee;
    tx.amount = input.amount;
    tx.date = input.date;
    tx.is_transfer = input.is_transfer;
    tx.labels = input.labels;
    tx.category = category;
    tx.note = input.note;
    tx.memo = input.memo;
    tx.cheque_number = input.cheque_number;
    tx.needs_review = input.needs_review;
}

async fn list_transactions(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(account_id): Path<i64>,
    Query(filters): Query<TransactionFilters>,
) -> ApiResult<Vec<Transaction>> {
    let state = db.read().await;
    authorize(&state, &headers, None)?;
    if state.transaction_account(account_id).is_none() {
        return Err(ApiFailure::not_found("Transaction account"));
    }

    let search = filters.search.as_deref().map(str::to_lowercase);
    let matches = |tx: &&Transaction| {
        let text_hit = |field: &Option<String>, needle: &str| {
            field.as_deref().is_some_and(|v| v.to_lowercase().contains(needle))
        };
        tx.transaction_account.id == account_id
            && filters.start_date.as_deref().is_none_or(|d| tx.date.as_str() >= d)
            && filters.end_date.as_deref().is_none_or(|d| tx.date.as_str() <= d)
            && (filters.uncategorised != Some(1) || tx.category.is_none())
            && filters.transaction_type.as_deref().is_none_or(|t| tx.transaction_type == t)
            && (filters.needs_review != Some(1) || tx.needs_review)
            && search.as_deref().is_none_or(|needle| {
                tx.payee.to_lowercase().contains(needle)
                    || text_hit(&tx.memo, needle)
                    || text_hit(&tx.note, needle)
            })
    };

    let found = state
        .transactions
        .iter()
        .filter(matches)
        .skip(page_offset(filters.page))
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    Ok(Json(found))
}

/// Rows to skip for a 1-based page number; absent or 0 means the first page.
fn page_offset(page: Option<usize>) -> usize {
    page.unwrap_or(1).saturating_sub(1).saturating_mul(PAGE_SIZE)
}

async fn add_transaction(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(account_id): Path<i64>,
    body: Bytes,
) -> Created<Transaction> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    let input: TransactionInput = parse_body(&body)?;
    let transaction_account = state
        .transaction_account(account_id)
        .cloned()
        .ok_or_else(|| ApiFailure::not_found("Transaction account"))?;
    if input.payee.is_empty() {
        return Err(ApiFailure::invalid("Payee can't be blank"));
    }
    let category = resolve_category(&state, input.category_id.as_ref())?;

    let mut tx = Transaction {
        id: state.next_id(),
        payee: String::new(),
        amount: 0.0,
        date: String::new(),
        memo: None,
        cheque_number: None,
        note: None,
        labels: Vec::new(),
        category: None,
        is_transfer: false,
        needs_review: false,
        transaction_type: String::new(),
        transaction_account,
    };
    apply_input(&mut tx, input, category);
    state.transactions.push(tx.clone());
    Ok((StatusCode::CREATED, Json(tx)))
}

async fn update_transaction(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    body: Bytes,
) -> ApiResult<Transaction> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    let input: TransactionInput = parse_body(&body)?;
    let category = resolve_category(&state, input.category_id.as_ref())?;
    let tx = state
        .transactions
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| ApiFailure::not_found("Transaction"))?;
    apply_input(tx, input, category);
    Ok(Json(tx.clone()))
}

// --- institutions ---

async fn list_institutions(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<Institution>> {
    let state = db.read().await;
    authorize(&state, &headers, Some(user_id))?;
    Ok(Json(state.institutions.clone()))
}

async fn create_institution(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    body: Bytes,
) -> Created<Institution> {
    let mut state = db.write().await;
    authorize(&state, &headers, Some(user_id))?;
    let input: CreateInstitution = parse_body(&body)?;
    if input.title.is_empty() {
        return Err(ApiFailure::invalid("Title can't be blank"));
    }
    let institution = Institution {
        id: state.next_id(),
        title: input.title,
        currency_code: input.currency_code,
    };
    state.institutions.push(institution.clone());
    Ok((StatusCode::CREATED, Json(institution)))
}

async fn delete_institution(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(params): Query<DeleteInstitutionParams>,
) -> Result<StatusCode, ApiFailure> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    if state.institution(id).is_none() {
        return Err(ApiFailure::not_found("Institution"));
    }

    match params.merge_into_id {
        Some(target) => {
            let target = state
                .institution(target)
                .filter(|t| t.id != id)
                .cloned()
                .ok_or_else(|| ApiFailure::invalid("Merge target not found"))?;
            for account in state.accounts.iter_mut() {
                let copies = account
                    .transaction_accounts
                    .iter_mut()
                    .chain(std::iter::once(&mut account.primary_transaction_account));
                for ta in copies.filter(|ta| ta.institution.id == id) {
                    ta.institution = target.clone();
                }
            }
        }
        None => state.accounts.retain(|a| a.institution_id() != id),
    }
    state.institutions.retain(|i| i.id != id);
    Ok(StatusCode::NO_CONTENT)
}

// --- categories ---

async fn list_categories(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<Category>> {
    let state = db.read().await;
    authorize(&state, &headers, Some(user_id))?;
    Ok(Json(state.categories.clone()))
}

async fn list_category_rules(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<CategoryRule>> {
    let state = db.read().await;
    authorize(&state, &headers, Some(user_id))?;
    Ok(Json(state.category_rules.clone()))
}

// --- attachments ---

fn describe_file(file_name: &str) -> (String, String, ContentTypeMeta) {
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).unwrap_or_default();
    let (kind, content_type, title) = match extension.as_str() {
        "png" => ("image", "image/png", "PNG"),
        "jpg" | "jpeg" => ("image", "image/jpeg", "JPEG"),
        "pdf" => ("document", "application/pdf", "PDF"),
        _ => ("document", "application/octet-stream", "File"),
    };
    let meta = ContentTypeMeta {
        title: title.to_string(),
        description: format!("{title} file"),
        extension,
    };
    (kind.to_string(), content_type.to_string(), meta)
}

async fn list_attachments(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    Query(filters): Query<AttachmentFilters>,
) -> ApiResult<Vec<Attachment>> {
    let state = db.read().await;
    authorize(&state, &headers, Some(user_id))?;
    let unassigned_only = filters.unassigned == Some(1);
    let attachments = state
        .attachments
        .iter()
        .filter(|a| !unassigned_only || !state.links.iter().any(|(_, att)| *att == a.id))
        .cloned()
        .collect();
    Ok(Json(attachments))
}

async fn create_attachment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    body: Bytes,
) -> Created<Attachment> {
    let mut state = db.write().await;
    authorize(&state, &headers, Some(user_id))?;
    let input: CreateAttachment = parse_body(&body)?;
    if input.file_data.is_empty() {
        return Err(ApiFailure::invalid("File data can't be blank"));
    }
    let id = state.next_id();
    let (attachment_type, content_type, content_type_meta) = describe_file(&input.file_name);
    let url = format!("https://files.example.com/attachments/{id}/{}", input.file_name);
    let attachment = Attachment {
        id,
        title: input.title,
        file_name: input.file_name,
        variants: Variants {
            thumb_url: (attachment_type == "image").then(|| format!("{url}?thumb")),
            large_url: (attachment_type == "image").then(|| format!("{url}?large")),
        },
        attachment_type,
        content_type,
        content_type_meta,
        original_url: url,
    };
    state.attachments.push(attachment.clone());
    Ok((StatusCode::CREATED, Json(attachment)))
}

async fn list_transaction_attachments(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(transaction_id): Path<i64>,
) -> ApiResult<Vec<Attachment>> {
    let state = db.read().await;
    authorize(&state, &headers, None)?;
    if !state.transactions.iter().any(|t| t.id == transaction_id) {
        return Err(ApiFailure::not_found("Transaction"));
    }
    let attachments = state
        .links
        .iter()
        .filter(|(tx, _)| *tx == transaction_id)
        .filter_map(|(_, att)| state.attachments.iter().find(|a| a.id == *att).cloned())
        .collect();
    Ok(Json(attachments))
}

async fn attach_to_transaction(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(transaction_id): Path<i64>,
    body: Bytes,
) -> Response {
    let mut state = db.write().await;
    if let Err(failure) = authorize(&state, &headers, None) {
        return failure.into_response();
    }
    let input: AttachmentRef = match parse_body(&body) {
        Ok(input) => input,
        Err(failure) => return failure.into_response(),
    };
    if !state.transactions.iter().any(|t| t.id == transaction_id) {
        return ApiFailure::not_found("Transaction").into_response();
    }
    let Some(attachment) = state.attachments.iter().find(|a| a.id == input.attachment_id).cloned() else {
        // The service reports this one under a success status.
        return ApiFailure::new(StatusCode::OK, "Attachment not found").into_response();
    };
    if !state.links.contains(&(transaction_id, attachment.id)) {
        state.links.push((transaction_id, attachment.id));
    }
    (StatusCode::CREATED, Json(attachment)).into_response()
}

async fn unassign_attachment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((transaction_id, attachment_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiFailure> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    let before = state.links.len();
    state.links.retain(|link| *link != (transaction_id, attachment_id));
    if state.links.len() == before {
        return Err(ApiFailure::not_found("Attachment"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn get_attachment(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> ApiResult<Attachment> {
    let state = db.read().await;
    authorize(&state, &headers, None)?;
    state
        .attachments
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Attachment"))
}

async fn update_attachment(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    body: Bytes,
) -> ApiResult<Attachment> {
    let mut state = db.write().await;
    authorize(&state, &headers, None)?;
    let input: UpdateAttachment = parse_body(&body)?;
    let attachment = state
        .attachments
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| ApiFailure::not_found("Attachment"))?;
    attachment.title = input.title;
    Ok(Json(attachment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_has_one_user_and_account() {
        let state = MockState::seeded("k");
        assert_eq!(state.user.id, 1);
        assert_eq!(state.accounts.len(), 1);
        assert!(state.transaction_account(100).is_some());
        assert_eq!(state.category(2).map(|c| c.title.as_str()), Some("Groceries"));
        assert!(state.category(99).is_none());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut state = MockState::seeded("k");
        let a = state.next_id();
        let b = state.next_id();
        assert!(b > a);
    }

    #[test]
    fn category_id_empty_string_means_none() {
        let state = MockState::seeded("k");
        let empty = serde_json::json!("");
        assert!(resolve_category(&state, Some(&empty)).unwrap().is_none());
        let id = serde_json::json!(2);
        assert_eq!(resolve_category(&state, Some(&id)).unwrap().unwrap().id, 2);
        let bad = serde_json::json!(-1);
        assert!(resolve_category(&state, Some(&bad)).is_err());
    }

    #[test]
    fn page_offsets_saturate() {
        assert_eq!(page_offset(None), 0);
        assert_eq!(page_offset(Some(0)), 0);
        assert_eq!(page_offset(Some(3)), 2 * PAGE_SIZE);
        assert_eq!(page_offset(Some(usize::MAX)), usize::MAX);
    }

    #[test]
    fn failure_renders_error_body() {
        let response = ApiFailure::invalid("nope").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn file_description_by_extension() {
        let (kind, content_type, meta) = describe_file("receipt.PNG");
        assert_eq!(kind, "image");
        assert_eq!(content_type, "image/png");
        assert_eq!(meta.extension, "png");
        let (kind, _, _) = describe_file("statement");
        assert_eq!(kind, "document");
    }
}
