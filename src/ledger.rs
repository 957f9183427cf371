//! The entries a vendor parser produces: regular transactions and balance
//! assertions, with amounts kept as exact decimal strings end to end.

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct Amount {
    pub(crate) value: String,
    pub(crate) currency: String,
}

impl Amount {
    pub(crate) fn usd<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Amount {
            value: value.into(),
            currency: "USD".to_string(),
        }
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.value.starts_with('-')
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct Posting {
    pub(crate) account: String,
    pub(crate) amount: Amount,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct Transaction {
    pub(crate) date: String,
    pub(crate) payee: String,
    pub(crate) narration: Option<String>,
    pub(crate) tags: Vec<String>,
    /// Key-unique, insertion order preserved, rendered in sorted key order.
    pub(crate) links: Vec<(String, String)>,
    pub(crate) postings: Vec<Posting>,
}

/// A known balance on an account at a date, with no postings of its own.
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) struct BalanceAssertion {
    pub(crate) date: String,
    pub(crate) account: String,
    pub(crate) amount: Amount,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum Entry {
    Transaction(Transaction),
    Balance(BalanceAssertion),
}

/// Stable sort so postings with negative amounts come before positives.
/// A presentation convention for the SPS layout, not a general rule.
pub(crate) fn order_postings_by_sign(postings: &mut [Posting]) {
    postings.sort_by_key(|p| !p.amount.is_negative());
}
