//! Delimited text loader.
//!
//! Input is one record per line, five comma-separated fields in fixed order:
//! `identifier,name,unit_price,quantity,supplier`. There is no header row and
//! no quoting, so a comma inside a name or supplier shows up as an extra field
//! and the line is rejected.
//!
//! The first malformed line fails the whole load. Blank lines are skipped, and
//! a UTF-8 byte-order mark at the start of the input is ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockroom_core::ProductId;
use stockroom_inventory::ProductStore;
use stockroom_products::{Price, PriceError, Product};

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = 5;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: read failed: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {field} is not an integer: '{value}'")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: invalid unit price: {source}")]
    InvalidPrice {
        line: usize,
        #[source]
        source: PriceError,
    },
}

impl LoadError {
    /// 1-based line number of the offending row, if the error is row-level.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Open { .. } => None,
            LoadError::Read { line, .. }
            | LoadError::FieldCount { line, .. }
            | LoadError::InvalidInteger { line, .. }
            | LoadError::InvalidPrice { line, .. } => Some(*line),
        }
    }
}

/// Parse one input line (without its terminator) into a record.
///
/// `line` is the 1-based line number used in diagnostics.
pub fn parse_line(text: &str, line: usize) -> LoadResult<Product> {
    let fields: Vec<&str> = text.trim_end_matches('\r').split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let id: ProductId = fields[0].parse().map_err(|_| LoadError::InvalidInteger {
        line,
        field: "identifier",
        value: fields[0].to_string(),
    })?;

    let unit_price: Price = fields[2]
        .parse()
        .map_err(|source| LoadError::InvalidPrice { line, source })?;

    let quantity: i64 = fields[3].parse().map_err(|_| LoadError::InvalidInteger {
        line,
        field: "quantity",
        value: fields[3].to_string(),
    })?;

    Ok(Product::new(id, fields[1], unit_price, quantity, fields[4]))
}

/// Load every line of `reader` into a new store, in input order.
pub fn load_from_reader<R: BufRead>(reader: R) -> LoadResult<ProductStore> {
    let mut store = ProductStore::new();

    for (idx, next) in reader.lines().enumerate() {
        let line = idx + 1;
        let raw = next.map_err(|source| LoadError::Read { line, source })?;
        let text = if line == 1 {
            raw.strip_prefix('\u{feff}').unwrap_or(raw.as_str())
        } else {
            raw.as_str()
        };
        if text.trim().is_empty() {
            continue;
        }

        match parse_line(text, line) {
            Ok(product) => store.push(product),
            Err(err) => {
                tracing::warn!(line, error = %err, "rejecting input row");
                return Err(err);
            }
        }
    }

    Ok(store)
}

/// Open `path` and load it. The file handle is dropped before returning.
pub fn load_from(path: impl AsRef<Path>) -> LoadResult<ProductStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let store = load_from_reader(BufReader::new(file))?;
    tracing::info!(path = %path.display(), records = store.len(), "loaded products");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SAMPLE: &str = "1,Widget,9.99,10,Acme\n2,Gadget,19.99,5,Acme\n3,Widget,9.99,3,Globex\n";

    #[test]
    fn parse_line_reads_all_fields() {
        let p = parse_line("7,Blue Widget,12.50,40,Acme Corp", 1).unwrap();
        assert_eq!(p.id_typed(), ProductId::new(7));
        assert_eq!(p.name(), "Blue Widget");
        assert_eq!(p.unit_price(), Price::from_cents(1250));
        assert_eq!(p.quantity(), 40);
        assert_eq!(p.supplier(), "Acme Corp");
    }

    #[test]
    fn parse_line_trims_fields_and_carriage_return() {
        let p = parse_line(" 1 , Widget , 9.99 , 10 , Acme\r", 1).unwrap();
        assert_eq!(p.name(), "Widget");
        assert_eq!(p.supplier(), "Acme");
        assert_eq!(p.quantity(), 10);
    }

    #[test]
    fn parse_line_rejects_missing_fields() {
        let err = parse_line("1,Widget,9.99,10", 4).unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 4, found: 4 }));
    }

    #[test]
    fn parse_line_rejects_embedded_comma() {
        let err = parse_line("1,Widget, large,9.99,10,Acme", 2).unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 2, found: 6 }));
    }

    #[test]
    fn parse_line_rejects_bad_numbers() {
        let err = parse_line("x,Widget,9.99,10,Acme", 3).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidInteger { line: 3, field: "identifier", .. }
        ));

        let err = parse_line("1,Widget,cheap,10,Acme", 3).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPrice { line: 3, .. }));

        let err = parse_line("1,Widget,9.99,ten,Acme", 3).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidInteger { line: 3, field: "quantity", .. }
        ));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn error_messages_name_the_line() {
        let err = parse_line("1,Widget,9.99,ten,Acme", 12).unwrap_err();
        assert_eq!(err.to_string(), "line 12: quantity is not an integer: 'ten'");
    }

    #[test]
    fn load_from_reader_keeps_file_order() {
        let store = load_from_reader(Cursor::new(SAMPLE)).unwrap();
        let ids: Vec<i64> = store.iter().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn load_from_reader_skips_blank_lines() {
        let input = "\n1,Widget,9.99,10,Acme\n   \n2,Gadget,19.99,5,Acme\n\n";
        let store = load_from_reader(Cursor::new(input)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn load_from_reader_fails_on_first_bad_row() {
        let input = "1,Widget,9.99,10,Acme\n2,Gadget,oops,5,Acme\n3,Thing,1,1\n";
        let err = load_from_reader(Cursor::new(input)).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn load_from_reader_reports_physical_line_numbers() {
        let input = "\n\n1,Widget,9.99\n";
        let err = load_from_reader(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 3, found: 3 }));
    }

    #[test]
    fn load_from_reader_ignores_leading_byte_order_mark() {
        let input = "\u{feff}1,Widget,9.99,10,Acme\n2,Gadget,19.99,5,Acme\n";
        let store = load_from_reader(Cursor::new(input)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id_typed(), ProductId::new(1));
    }

    #[test]
    fn byte_order_mark_after_first_line_is_rejected() {
        let input = "1,Widget,9.99,10,Acme\n\u{feff}2,Gadget,19.99,5,Acme\n";
        let err = load_from_reader(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidInteger { line: 2, field: "identifier", .. }
        ));
    }

    #[test]
    fn load_from_reader_tolerates_duplicate_ids() {
        let input = "1,A,1.00,1,S\n1,B,2.00,2,S\n";
        let store = load_from_reader(Cursor::new(input)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let store = load_from(file.path()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[1].name(), "Gadget");
    }

    #[test]
    fn load_from_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        let err = load_from(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Open { ref path, .. } if *path == missing));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn load_from_empty_file_gives_empty_store() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = load_from(file.path()).unwrap();
        assert!(store.is_empty());
    }
}
