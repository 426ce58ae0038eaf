//! JSON document format for expense records.
//!
//! A document is an array of objects with four string keys:
//!
//! ```json
//! [
//!   {
//!     "Category": "Food",
//!     "Expense Amount": "$1,234.50",
//!     "Date": "2024-03-01",
//!     "Description": "groceries"
//!   }
//! ]
//! ```
//!
//! Loading is lenient: missing keys become empty strings, plain numbers are
//! normalized to the display form, and amounts that do not parse are kept
//! verbatim.
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

use crate::{ExpenseRecord, RecordAmount, ResultLedger, format};

/// One object of the persisted array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRow {
    #[serde(rename = "Category", default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(rename = "Expense Amount", default, deserialize_with = "lenient_text")]
    pub amount: String,
    #[serde(rename = "Date", default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient_text")]
    pub description: String,
}

impl From<&ExpenseRecord> for PersistedRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            category: record.category.clone(),
            amount: record.amount.to_string(),
            date: record.date.clone(),
            description: record.description.clone(),
        }
    }
}

impl From<PersistedRow> for ExpenseRecord {
    fn from(row: PersistedRow) -> Self {
        Self {
            category: row.category,
            amount: amount_from_text(row.amount),
            date: row.date,
            description: row.description,
        }
    }
}

/// Parses a stored amount, keeping the original text when it is not a number.
fn amount_from_text(raw: String) -> RecordAmount {
    match format::parse_display(&raw) {
        Ok(money) => RecordAmount::Money(money),
        Err(_) => RecordAmount::Unparsed(raw),
    }
}

/// Accepts strings, numbers and booleans as text; `null` becomes empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected a text value, got {other}"))),
    }
}

#[must_use]
pub fn to_document(records: &[ExpenseRecord]) -> Vec<PersistedRow> {
    records.iter().map(PersistedRow::from).collect()
}

#[must_use]
pub fn from_document(rows: Vec<PersistedRow>) -> Vec<ExpenseRecord> {
    rows.into_iter().map(ExpenseRecord::from).collect()
}

/// Serializes records as a pretty-printed JSON document.
pub fn to_json(records: &[ExpenseRecord]) -> ResultLedger<String> {
    Ok(serde_json::to_string_pretty(&to_document(records))?)
}

/// Parses a JSON document into records.
pub fn from_json(text: &str) -> ResultLedger<Vec<ExpenseRecord>> {
    let rows: Vec<PersistedRow> = serde_json::from_str(text)?;
    Ok(from_document(rows))
}

/// Writes records to `path`, replacing any existing file.
pub fn save_to_path(path: &Path, records: &[ExpenseRecord]) -> ResultLedger<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &to_document(records))?;
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = records.len(), "document saved");
    Ok(())
}

/// Reads records from `path`.
pub fn load_from_path(path: &Path) -> ResultLedger<Vec<ExpenseRecord>> {
    let file = File::open(path)?;
    let rows: Vec<PersistedRow> = serde_json::from_reader(BufReader::new(file))?;
    let records = from_document(rows);
    let unparsed = records
        .iter()
        .filter(|record| record.amount.money().is_none())
        .count();
    if unparsed > 0 {
        tracing::warn!(path = %path.display(), unparsed, "document has non-numeric amounts");
    }
    tracing::info!(path = %path.display(), rows = records.len(), "document loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LedgerError, Money};

    #[test]
    fn saves_display_amount_under_original_keys() {
        let records = vec![ExpenseRecord::new(
            "Food",
            Money::new(123_450),
            "2024-03-01",
            "groceries",
        )];
        let json = to_json(&records).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "Category": "Food",
                "Expense Amount": "$1,234.50",
                "Date": "2024-03-01",
                "Description": "groceries"
            }])
        );
        assert!(json.contains("\n  {"));
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let records = from_json(r#"[{"Category": "Food"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Food");
        assert_eq!(records[0].date, "");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].amount, RecordAmount::Unparsed(String::new()));
    }

    #[test]
    fn plain_amounts_are_normalized() {
        let records = from_json(
            r#"[{"Expense Amount": "1234.5"}, {"Expense Amount": 12}, {"Expense Amount": "$1,000"}]"#,
        )
        .unwrap();
        let shown: Vec<String> = records.iter().map(|r| r.amount.to_string()).collect();
        assert_eq!(shown, ["$1,234.50", "$12.00", "$1,000.00"]);
    }

    #[test]
    fn malformed_amounts_are_kept_verbatim() {
        let records =
            from_json(r#"[{"Expense Amount": "$abc"}, {"Expense Amount": "lots"}]"#).unwrap();
        assert_eq!(records[0].amount, RecordAmount::Unparsed("$abc".to_string()));
        assert_eq!(records[1].amount, RecordAmount::Unparsed("lots".to_string()));

        let json = to_json(&records).unwrap();
        assert!(json.contains("\"$abc\""));
        assert!(json.contains("\"lots\""));
    }

    #[test]
    fn scalar_values_are_accepted_as_text() {
        let records = from_json(r#"[{"Category": null, "Date": 20240301, "Description": true}]"#)
            .unwrap();
        assert_eq!(records[0].category, "");
        assert_eq!(records[0].date, "20240301");
        assert_eq!(records[0].description, "true");
    }

    #[test]
    fn structural_errors_fail() {
        assert!(matches!(from_json("{}"), Err(LedgerError::Json(_))));
        assert!(matches!(from_json("not json"), Err(LedgerError::Json(_))));
        assert!(matches!(
            from_json(r#"[{"Category": ["nested"]}]"#),
            Err(LedgerError::Json(_))
        ));
    }
}
