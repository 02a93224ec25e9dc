//! JSON Lines export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::IgnoreBrokenPipe;
use crate::models::Product;

/// Opens the export destination: the file at `path`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(IgnoreBrokenPipe::new(io::stdout().lock())),
    };
    Ok(writer)
}

/// Writes one JSON object per product, one product per line.
///
/// # Returns
///
/// Returns the number of records written, or an error if serialization or
/// writing fails.
pub fn write_jsonl<'a, W, I>(products: I, mut writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Product>,
{
    let mut record_count = 0;
    for product in products {
        serde_json::to_writer(&mut writer, product)
            .with_context(|| format!("Failed to serialize product {}", product.id))?;
        writer.write_all(b"\n").context("Failed to write output")?;
        record_count += 1;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_write_jsonl_one_line_per_product() {
        let products = vec![
            Product {
                id: 1,
                app_name: "One".to_string(),
                ..Default::default()
            },
            Product {
                id: 2,
                app_name: "Two".to_string(),
                price: Decimal::new(999, 2),
                ..Default::default()
            },
        ];
        let mut buffer = Vec::new();
        let written = write_jsonl(&products, &mut buffer).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["app_name"], "Two");
        assert_eq!(second["developers"], serde_json::json!([]));
    }

    #[test]
    fn test_write_jsonl_empty() {
        let mut buffer = Vec::new();
        assert_eq!(write_jsonl(&Vec::new(), &mut buffer).unwrap(), 0);
        assert!(buffer.is_empty());
    }
}
