use std::path::PathBuf;

use ledger::{
    ExpenseRecord, Intent, LedgerError, Money, Outcome, RecordAmount, Session, format,
    parse_display, persist,
};
use uuid::Uuid;

fn test_file() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_files");
    std::fs::create_dir_all(&root).unwrap();
    root.join(format!("ledger_{}.json", Uuid::new_v4()))
}

fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Food", Money::new(1_250), "2024-03-01", "groceries"),
        ExpenseRecord::new("Housing", Money::new(120_000), "2024-03-02", "rent, march"),
        ExpenseRecord::new("", Money::ZERO, "", ""),
        ExpenseRecord::new("Other", Money::new(987_654_321), "whenever", "\"quoted\" ünïcode"),
    ]
}

#[test]
fn save_then_load_round_trips() {
    let path = test_file();
    let records = sample_records();

    persist::save_to_path(&path, &records).unwrap();
    let loaded = persist::load_from_path(&path).unwrap();
    assert_eq!(loaded, records);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn session_save_and_load_replace_store() {
    let path = test_file();
    let mut writer = Session::builder().records(sample_records()).build();
    assert_eq!(
        writer.apply(Intent::Save(path.clone())).unwrap(),
        Outcome::Saved {
            path: path.clone(),
            rows: 4
        }
    );
    assert_eq!(writer.path(), Some(path.as_path()));

    let mut reader = Session::builder()
        .records(vec![ExpenseRecord::new("Stale", Money::new(1), "", "")])
        .build();
    assert_eq!(
        reader.apply(Intent::Load(path.clone())).unwrap(),
        Outcome::Loaded {
            path: path.clone(),
            rows: 4
        }
    );
    assert_eq!(reader.store().records(), writer.store().records());
    assert_eq!(reader.store().total(), writer.store().total());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn failed_load_keeps_store() {
    let path = test_file();
    std::fs::write(&path, "{ \"not\": \"an array\" }").unwrap();

    let mut session = Session::builder().records(sample_records()).build();
    let err = session.apply(Intent::Load(path.clone())).unwrap_err();
    assert!(matches!(err, LedgerError::Json(_)));
    assert!(err.is_io_failure());
    assert_eq!(session.store().records(), sample_records().as_slice());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn save_into_missing_directory_fails() {
    let path = test_file().join("missing").join("budget.json");
    let session_records = sample_records();
    let err = persist::save_to_path(&path, &session_records).unwrap_err();
    assert!(matches!(err, LedgerError::Io(_)));
}

#[test]
fn lenient_document_from_disk() {
    let path = test_file();
    std::fs::write(
        &path,
        r#"[
  {"Category": "Food", "Expense Amount": "42", "Date": "2024-01-01"},
  {"Category": "Gift", "Expense Amount": "$a lot"},
  {}
]"#,
    )
    .unwrap();

    let records = persist::load_from_path(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].amount.to_string(), "$42.00");
    assert_eq!(records[0].description, "");
    assert_eq!(
        records[1].amount,
        RecordAmount::Unparsed("$a lot".to_string())
    );
    assert_eq!(records[2].category, "");

    let total: Money = records.iter().filter_map(|r| r.amount.money()).sum();
    assert_eq!(total, Money::new(4_200));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn display_parse_round_trip() {
    for cents in [0, 1, 10, 100, 1_234, 99_999, 100_000, 123_450, 100_000_007] {
        let amount = Money::new(cents);
        let shown = format(amount);
        let parsed = parse_display(&shown).unwrap();
        assert_eq!(parsed, amount, "{cents} -> {shown}");
        assert_eq!(format(parsed), shown);
    }
}
