use color_eyre::eyre::{Result, WrapErr};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{format::write_entries, ledger::Entry};

/// Write the main `.bean` file plus the placeholder balances and import
/// files.  Any failure aborts the run; nothing is retried.
pub(crate) fn write_bean_files(
    output_dir: &Path,
    statement_path: &Path,
    entries: &[Entry],
) -> Result<()> {
    let base_name = statement_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statement".to_string());

    let bean_path = output_dir.join(format!("{base_name}.bean"));
    let file = File::create(&bean_path)
        .wrap_err_with(|| format!("failed to create {}", bean_path.display()))?;
    let mut out_w = BufWriter::new(file);
    write_entries(entries, &mut out_w)?;
    out_w.flush()?;
    tracing::info!(path = %bean_path.display(), entries = entries.len(), "wrote bean file");

    // placeholders for downstream tooling, extended later
    for (suffix, contents) in [
        ("balances", "; Balances placeholder\n"),
        ("import", "; Import placeholder\n"),
    ] {
        let path = output_dir.join(format!("{base_name}.{suffix}.bean"));
        std::fs::write(&path, contents)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote placeholder file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Amount, Posting, Transaction};

    #[test]
    fn writes_the_bean_file_and_placeholders() {
        let dir = std::env::temp_dir().join(format!("mungbean-write-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let entries = vec![Entry::Transaction(Transaction {
            date: "2024-01-01".to_string(),
            payee: "Test Payee".to_string(),
            narration: None,
            tags: Vec::default(),
            links: Vec::default(),
            postings: vec![
                Posting {
                    account: "Assets:Checking".to_string(),
                    amount: Amount::usd("100.00"),
                },
                Posting {
                    account: "Expenses:Other".to_string(),
                    amount: Amount::usd("-100.00"),
                },
            ],
        })];

        write_bean_files(&dir, Path::new("test.pdf"), &entries).unwrap();

        let bean = std::fs::read_to_string(dir.join("test.bean")).unwrap();
        assert!(bean.starts_with("2024-01-01 * \"Test Payee\"\n"));
        assert!(bean.ends_with("\n\n"));

        let balances = std::fs::read_to_string(dir.join("test.balances.bean")).unwrap();
        assert_eq!(balances, "; Balances placeholder\n");
        let import = std::fs::read_to_string(dir.join("test.import.bean")).unwrap();
        assert_eq!(import, "; Import placeholder\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
