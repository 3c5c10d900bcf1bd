use ca_ledger::pipeline::{convert, convert_range, read_entries};
use ca_ledger::{Error, StatementLayout};
use calamine::{Data, ExcelDateTime, ExcelDateTimeType, Range};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn date(iso: &str) -> Data {
    Data::DateTimeIso(format!("{iso}T00:00:00"))
}

fn serial_date(serial: f64) -> Data {
    Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, false))
}

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

/// A worksheet shaped like the bank export: a merged title row, a header,
/// transactions, noise rows and the download footer.
fn export() -> Range<Data> {
    let rows: Vec<(u32, Vec<Data>)> = vec![
        (0, vec![text("Relevé de compte")]),
        (2, vec![text("Date"), text("Libellé"), text("Débit euros"), text("Crédit euros")]),
        (3, vec![date("2022-04-01"), text("PAIEMENT\nCB   MAGASIN"), Data::Float(42.5), Data::Empty]),
        (4, vec![serial_date(44653.0), Data::Empty, Data::Empty, Data::Float(100.0)]),
        (5, vec![Data::Empty, Data::Empty, Data::Float(5.0), Data::Empty]),
        (6, vec![date("2022-04-03"), text("SOLDE"), Data::Empty, Data::Empty]),
        (7, vec![text("Date"), text("Libellé"), text("Débit euros"), text("Crédit euros")]),
        (8, vec![date("2022-04-04"), text("VIR SEPA, LOYER"), Data::Float(3.0), Data::Float(750.0)]),
        (10, vec![text("Téléchargement du 05/04/2022")]),
    ];

    let mut range = Range::new((0, 0), (10, 3));
    for (r, cells) in rows {
        for (c, value) in cells.into_iter().enumerate() {
            range.set_value((r, c as u32), value);
        }
    }
    range
}

#[test]
fn converts_export_to_ledger() {
    let mut out = Vec::new();
    let count = convert_range(&export(), &StatementLayout::default(), &mut out).unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "date_operation,date_debit_credit,debit_credit,libelle,balance\n\
         04/01/2022,04/01/2022,-42.5,PAIEMENT CB MAGASIN,0\n\
         04/02/2022,04/02/2022,100.0,,0\n\
         04/04/2022,04/04/2022,750.0,|VIR SEPA, LOYER|,0\n"
    );
}

#[test]
fn rerun_gives_same_entries() {
    let layout = StatementLayout::default();
    let range = export();
    assert_eq!(read_entries(&range, &layout).unwrap(), read_entries(&range, &layout).unwrap());
}

#[test]
fn malformed_date_aborts_without_output() {
    let mut range = export();
    range.set_value((9, 0), text("31/02/2022"));
    range.set_value((9, 2), Data::Float(1.0));

    let mut out = Vec::new();
    let result = convert_range(&range, &StatementLayout::default(), &mut out);

    assert!(matches!(result, Err(Error::InvalidDate { row: 9, .. })));
    assert!(out.is_empty());
}

#[test]
fn non_numeric_amount_aborts_without_output() {
    let mut range = export();
    range.set_value((9, 0), date("2022-04-04"));
    range.set_value((9, 3), text("Crédit"));

    let mut out = Vec::new();
    let result = convert_range(&range, &StatementLayout::default(), &mut out);

    assert!(matches!(result, Err(Error::InvalidAmount { row: 9, .. })));
    assert!(out.is_empty());
}

#[test]
fn custom_columns_follow_layout() {
    let mut range = Range::new((0, 0), (0, 5));
    range.set_value((0, 2), date("2022-04-01"));
    range.set_value((0, 3), text("RETRAIT DAB"));
    range.set_value((0, 5), Data::Float(20.0));

    let mut layout = StatementLayout::default();
    layout.columns.date = "C".into();
    layout.columns.label = "D".into();
    layout.columns.debit = "F".into();
    layout.columns.credit = "E".into();

    let entries = read_entries(&range, &layout).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description, "RETRAIT DAB");
    assert_eq!(entries[0].signed_amount, Decimal::from(-20));
}

#[test]
fn missing_workbook_is_reported() {
    let mut out = Vec::new();
    let result = convert("does-not-exist.xlsx", &StatementLayout::default(), &mut out);
    assert!(matches!(result, Err(Error::Workbook(_))));
    assert!(out.is_empty());
}
