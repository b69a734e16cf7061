//! Command handlers. Each returns the text to print.

use std::fmt::Write as _;

use anyhow::Context as _;
use chrono::Utc;
use sarraf_core::{Amount, Context, ExchangeRate, Money};
use sarraf_shared::{MoneyError, MoneySettings, RoundingMode, SymbolPosition};
use sarraf_store::CurrencyStore;

use crate::cli::Command;

/// Runs one command against `store`.
pub fn run(command: Command, store: &impl CurrencyStore, settings: &MoneySettings) -> anyhow::Result<String> {
    match command {
        Command::List => Ok(list(store)),
        Command::Positions => Ok(positions()),
        Command::Format { code, amount, json } => format_amount(store, &code, &amount, json),
        Command::Round { code, amount, mode } => {
            round(store, &code, &amount, mode.unwrap_or(settings.default_rounding))
        }
        Command::Convert {
            from,
            to,
            amount,
            rate,
            mode,
        } => convert(
            store,
            &from,
            &to,
            &amount,
            &rate,
            mode.unwrap_or(settings.default_rounding),
        ),
    }
}

fn list(store: &impl CurrencyStore) -> String {
    let mut out = String::new();
    for currency in store.all() {
        let _ = writeln!(
            out,
            "{:>3}  {:<4} {:<6} {:<2} {}",
            currency.id().into_inner(),
            currency.code(),
            currency.symbol(),
            currency.decimal_places(),
            currency.name()
        );
    }
    out.trim_end().to_string()
}

fn positions() -> String {
    SymbolPosition::options(|_| None)
        .into_iter()
        .map(|(value, label)| format!("{value}: {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exact amount in `code`, unconstrained by the currency scale.
fn exact_money(store: &impl CurrencyStore, code: &str, amount: &str) -> anyhow::Result<Money> {
    let currency = store.find_by_code(code)?;
    Money::of_with_context(amount, &currency, Context::Auto, RoundingMode::Unnecessary)
        .with_context(|| format!("invalid amount '{amount}'"))
}

fn format_amount(store: &impl CurrencyStore, code: &str, amount: &str, json: bool) -> anyhow::Result<String> {
    let money = exact_money(store, code, amount)?;
    if json {
        return Ok(serde_json::to_string(&money)?);
    }
    Ok(money.format())
}

/// Adds a hint to failures that an explicit rounding mode would fix.
fn rounding_hint(err: MoneyError) -> anyhow::Error {
    if err.needs_rounding_mode() {
        return anyhow::Error::new(err).context("pick a rounding mode other than 'unnecessary'");
    }
    err.into()
}

fn round(store: &impl CurrencyStore, code: &str, amount: &str, mode: RoundingMode) -> anyhow::Result<String> {
    let rounded = exact_money(store, code, amount)?
        .rounded(mode)
        .map_err(rounding_hint)?;
    Ok(format!("{} ({mode}): {}", rounded.amount(), rounded.format()))
}

fn convert(
    store: &impl CurrencyStore,
    from: &str,
    to: &str,
    amount: &str,
    rate: &str,
    mode: RoundingMode,
) -> anyhow::Result<String> {
    let money = exact_money(store, from, amount)?;
    let target = store.find_by_code(to)?;
    let rate: Amount = rate.parse().with_context(|| format!("invalid rate '{rate}'"))?;
    let rate = ExchangeRate::new(money.currency().code(), target.code(), rate, Utc::now().date_naive());

    let converted = money
        .convert_with(&rate, &target)?
        .rounded(mode)
        .map_err(rounding_hint)?;
    Ok(format!("{} = {}", money.format(), converted.format()))
}
