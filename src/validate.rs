//! The double-entry invariant: every regular transaction must sum to
//! exactly zero per currency, checked with exact decimal arithmetic.

use rust_decimal::Decimal;
use std::{
    collections::BTreeMap,
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::ledger::Entry;

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum ValidationError {
    InvalidAmount { index: usize, amount: String },
    Unbalanced { index: usize, currency: String, residual: Decimal },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ValidationError::*;

        match self {
            InvalidAmount { index, amount } => {
                write!(f, "transaction {index} has invalid amount {amount}")
            }
            Unbalanced {
                index,
                currency,
                residual,
            } => write!(
                f,
                "transaction {index} does not balance for currency {currency}: {residual}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Check the zero-sum invariant over the whole entry sequence.  Balance
/// assertions carry no postings and are exempt.
pub(crate) fn validate(entries: &[Entry]) -> Result<(), ValidationError> {
    tracing::debug!(entries = entries.len(), "validating entries");

    for (index, entry) in entries.iter().enumerate() {
        let Entry::Transaction(tx) = entry else {
            continue;
        };

        let mut balances = BTreeMap::<&str, Decimal>::new();
        for posting in &tx.postings {
            let amount =
                Decimal::from_str(&posting.amount.value).map_err(|_| {
                    ValidationError::InvalidAmount {
                        index,
                        amount: posting.amount.value.clone(),
                    }
                })?;
            *balances.entry(posting.amount.currency.as_str()).or_default() += amount;
        }

        for (currency, residual) in balances {
            if !residual.is_zero() {
                return Err(ValidationError::Unbalanced {
                    index,
                    currency: currency.to_string(),
                    residual,
                });
            }
        }
    }

    Ok(())
}
