use anyhow::Result;
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bank_ledger_model::{AccountRegistry, BankAccount, BankClient, Date, Decimal, Name};

/// One sample client and the account opened for them
struct Sample {
    first: &'static str,
    last: &'static str,
    born: (i32, u32, u32),
    died: Option<(i32, u32, u32)>,
    signup: (i32, u32, u32),
    account_closed: Option<(i32, u32, u32)>,
    id: &'static str,
    balance: i64,
    pin: i32,
    withdrawal: Option<i64>,
}

const SAMPLES: [Sample; 4] = [
    Sample {
        first: "Albert",
        last: "Einstein",
        born: (1879, 3, 14),
        died: Some((1955, 4, 18)),
        signup: (1900, 1, 1),
        account_closed: Some((1950, 10, 14)),
        id: "abc123",
        balance: 1000,
        pin: 3141,
        withdrawal: Some(100),
    },
    Sample {
        first: "Nelson",
        last: "Mandela",
        born: (1918, 7, 18),
        died: Some((2013, 12, 5)),
        signup: (1994, 5, 10),
        account_closed: None,
        id: "654321",
        balance: 2000,
        pin: 4664,
        withdrawal: Some(200),
    },
    Sample {
        first: "Frida",
        last: "Kahlo",
        born: (1907, 7, 6),
        died: Some((1954, 7, 13)),
        signup: (1940, 1, 1),
        account_closed: Some((1954, 7, 13)),
        id: "frd123",
        balance: 500,
        pin: 1907,
        withdrawal: None,
    },
    Sample {
        first: "Jackie",
        last: "Chan",
        born: (1954, 4, 7),
        died: None,
        signup: (1980, 10, 1),
        account_closed: None,
        id: "chan789",
        balance: 3000,
        pin: 1954,
        withdrawal: Some(500),
    },
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");

    println!("📅 Weekdays");
    for (year, month, day) in [(1977, 10, 31), (2021, 3, 15)] {
        let date = Date::new(year, month, day)?;
        println!("{} → {}", date, date.day_of_the_week());
    }

    let registry = AccountRegistry::new();
    for sample in &SAMPLES {
        println!();
        run_sample(&registry, sample)?;
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ {} accounts holding ${} USD", registry.count(), registry.total_balance()?);

    if json {
        let snapshot: Vec<BankAccount> = registry
            .all_accounts()
            .iter()
            .map(|account| {
                account
                    .lock()
                    .map(|guard| guard.clone())
                    .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

fn run_sample(registry: &AccountRegistry, sample: &Sample) -> Result<()> {
    println!("=== {} {} ===", sample.first, sample.last);

    let name = Name::new(sample.first, sample.last)?;
    println!("Initials: {}", name.initials());
    println!("Full Name: {}", name.full_name());
    println!("Reversed Name: {}", name.reverse_name());

    let client = Arc::new(BankClient::new(
        name,
        date(sample.born)?,
        sample.died.map(date).transpose()?,
        date(sample.signup)?,
        sample.id,
    )?);
    println!("{}", client.details());

    let account = BankAccount::new(
        Arc::clone(&client),
        sample.id,
        date(sample.signup)?,
        sample.account_closed.map(date).transpose()?,
        Decimal::from(sample.balance),
        sample.pin,
    )?;
    registry.open(account)?;

    if let Some(amount) = sample.withdrawal {
        match registry.withdraw_with_pin(sample.id, Decimal::from(amount), sample.pin) {
            Ok(balance) => info!(account = sample.id, %balance, "withdrawal complete"),
            Err(err) => println!("❌ Withdrawal of ${} refused: {}", amount, err),
        }
    }

    if let Some(account) = registry.find_by_account_number(sample.id) {
        let details = account
            .lock()
            .map(|guard| guard.details())
            .unwrap_or_else(|poisoned| poisoned.into_inner().details());
        println!("{}", details);
    }

    Ok(())
}

fn date((year, month, day): (i32, u32, u32)) -> bank_ledger_model::Result<Date> {
    Date::new(year, month, day)
}
