//! Two-line CSV rendering of a single record (header row + value row)

use super::aggregate::CardRecord;

pub const CSV_SEPARATOR: &str = ",";

/// Renders the written attributes of `record` as `header\nvalues`.
///
/// Columns follow declaration order; absent attributes are omitted.
/// No trailing newline. An empty record yields `"\n"`.
pub fn record_to_csv(record: &CardRecord) -> String {
    let (headers, values): (Vec<&str>, Vec<String>) = record
        .present()
        .map(|(field, value)| (field.key(), escape_csv_cell(value)))
        .unzip();

    format!("{}\n{}", headers.join(CSV_SEPARATOR), values.join(CSV_SEPARATOR))
}

/// Quotes a cell if it contains the separator, a quote or a line break
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_credit_card::aggregate::FieldId;

    #[test]
    fn test_two_line_csv() {
        let record = CardRecord::default()
            .with(FieldId::RecordNo, "R1")
            .with(FieldId::CardHolderName, "Alice");

        assert_eq!(record_to_csv(&record), "recordNo,cardHolderName\nR1,Alice");
    }

    #[test]
    fn test_columns_follow_declaration_order_not_edit_order() {
        let record = CardRecord::default()
            .with(FieldId::Country, "France")
            .with(FieldId::CardLimit, "5000");

        assert_eq!(record_to_csv(&record), "cardLimit,country\n5000,France");
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(record_to_csv(&CardRecord::default()), "\n");
    }

    #[test]
    fn test_written_empty_value_keeps_its_column() {
        let record = CardRecord::default()
            .with(FieldId::RecordNo, "R2")
            .with(FieldId::Remarks1, "");

        assert_eq!(record_to_csv(&record), "recordNo,remarks1\nR2,");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("Main St, 5"), "\"Main St, 5\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
