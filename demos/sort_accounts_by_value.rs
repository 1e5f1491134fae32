//! Reorder PocketSmith accounts by value.
//!
//! Credit cards that still carry a balance come first, then every account by
//! balance, largest first. Prints the new order and saves it as the display
//! order.
//!
//! ```text
//! POCKETSMITH_TOKEN=... cargo run -p pocketsmith-core --example sort_accounts_by_value
//! ```

use std::cmp::Ordering;
use std::error::Error;

use pocketsmith_core::{Account, AccountType, PocketSmithClient};
use tracing_subscriber::EnvFilter;

const TITLE_WIDTH: usize = 30;

fn is_open_credit_card(account: &Account) -> bool {
    account.account_type == AccountType::Credits && account.current_balance != 0.0
}

// Within one currency the base-currency balance orders the same way as the
// native balance, so one key covers both cases.
fn by_value(a: &Account, b: &Account) -> Ordering {
    is_open_credit_card(b)
        .cmp(&is_open_credit_card(a))
        .then_with(|| {
            b.current_balance_in_base_currency
                .total_cmp(&a.current_balance_in_base_currency)
        })
}

fn short_title(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        let head: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let token = std::env::var("POCKETSMITH_TOKEN")
        .map_err(|_| "POCKETSMITH_TOKEN environment variable is required")?;
    let client = PocketSmithClient::new(&token);

    let me = client.get_current_user()?;
    let mut accounts = client.list_accounts(me.id)?;
    accounts.sort_by(by_value);

    for account in &accounts {
        println!(
            "| {:<30} | {:>15.2} | {:>5} |",
            short_title(&account.title),
            account.current_balance,
            account.currency_code
        );
    }

    client.update_accounts_display_order(me.id, &accounts)?;
    Ok(())
}
