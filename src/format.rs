//! Column-aligned beancount rendering.  Layout widths are computed over the
//! whole entry set before any line is rendered, so the output is stable.

use std::io::{self, Write};

use crate::ledger::{BalanceAssertion, Entry, Posting, Transaction};

/// Accounts narrower than this are still padded out to it, so small
/// statements line up with the rest of the ledger.
const MIN_ACCOUNT_WIDTH: usize = 57;

/// Max account and amount widths across all postings, with the account
/// width floored at [`MIN_ACCOUNT_WIDTH`].
pub(crate) fn compute_posting_widths(entries: &[Entry]) -> (usize, usize) {
    let mut max_account = 0;
    let mut max_amount = 0;
    for entry in entries {
        let Entry::Transaction(tx) = entry else {
            continue;
        };
        for posting in &tx.postings {
            max_account = max_account.max(posting.account.len());
            max_amount = max_amount.max(posting.amount.value.len());
        }
    }
    (max_account.max(MIN_ACCOUNT_WIDTH), max_amount)
}

pub(crate) fn format_posting_line(
    posting: &Posting,
    account_width: usize,
    amount_width: usize,
) -> String {
    format!(
        "  {:<account_width$}  {:>amount_width$} {}",
        posting.account, posting.amount.value, posting.amount.currency
    )
}

/// Balance directives use a three-space separator, widened to four for
/// CloverLeaf accounts.  A legacy alignment quirk, preserved exactly.
pub(crate) fn format_balance_line(balance: &BalanceAssertion) -> String {
    let separator = if balance.account.contains("CloverLeaf") {
        "    "
    } else {
        "   "
    };
    format!(
        "{} balance {}{}{} {}",
        balance.date, balance.account, separator, balance.amount.value, balance.amount.currency
    )
}

/// Render the whole entry sequence, blank-line separated.
pub(crate) fn write_entries<W>(entries: &[Entry], mut out_w: W) -> io::Result<()>
where
    W: Write,
{
    let (account_width, amount_width) = compute_posting_widths(entries);

    for entry in entries {
        match entry {
            Entry::Balance(balance) => {
                writeln!(out_w, "{}", format_balance_line(balance))?;
            }
            Entry::Transaction(tx) => {
                write_transaction(tx, account_width, amount_width, &mut out_w)?;
            }
        }
        writeln!(out_w)?;
    }

    Ok(())
}

fn write_transaction<W>(
    tx: &Transaction,
    account_width: usize,
    amount_width: usize,
    out_w: &mut W,
) -> io::Result<()>
where
    W: Write,
{
    write!(out_w, "{} * \"{}\"", tx.date, tx.payee)?;
    if let Some(narration) = &tx.narration {
        write!(out_w, " \"{narration}\"")?;
    }
    if !tx.tags.is_empty() {
        write!(out_w, " {}", tx.tags.join(" "))?;
    }
    writeln!(out_w)?;

    // links render in sorted key order regardless of insertion order
    let mut links = tx.links.iter().collect::<Vec<_>>();
    links.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (key, value) in links {
        writeln!(out_w, "  {key}: \"{value}\"")?;
    }

    for posting in &tx.postings {
        writeln!(
            out_w,
            "{}",
            format_posting_line(posting, account_width, amount_width)
        )?;
    }

    Ok(())
}
