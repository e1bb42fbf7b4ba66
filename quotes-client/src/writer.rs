//! Records a fetched quote on disk.

use std::path::Path;

use quotes_types::ExchangeRateResponse;

pub const DEFAULT_OUTPUT_PATH: &str = "./cotacao.txt";
pub const QUOTE_LABEL: &str = "Dólar";

/// Formats the single output line, newline included.
pub fn format_quote(quote: &ExchangeRateResponse) -> String {
    format!("{}: {}\n", QUOTE_LABEL, quote.bid)
}

/// Overwrites `path` with the formatted quote.
pub async fn write_quote(path: &Path, quote: &ExchangeRateResponse) -> std::io::Result<()> {
    tokio::fs::write(path, format_quote(quote)).await?;
    tracing::debug!(path = %path.display(), bid = %quote.bid, "Wrote quote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use quotes_types::Decimal;

    fn quote(bid: &str) -> ExchangeRateResponse {
        ExchangeRateResponse {
            bid: Decimal::from_str(bid).unwrap(),
        }
    }

    #[test]
    fn test_format_quote() {
        assert_eq!(format_quote(&quote("5.2514")), "Dólar: 5.2514\n");
    }

    #[tokio::test]
    async fn test_write_quote_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cotacao.txt");

        write_quote(&path, &quote("5.1234567")).await.unwrap();
        write_quote(&path, &quote("5.25")).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.25\n");
    }

    #[tokio::test]
    async fn test_write_quote_fails_on_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("cotacao.txt");

        assert!(write_quote(&path, &quote("5.25")).await.is_err());
    }
}
