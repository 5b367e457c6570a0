use super::aggregate::{CardRecord, FieldId};
use serde::{Deserialize, Serialize};

/// Record columns of the summary table; a constant Status column follows
pub const SUMMARY_COLUMNS: [FieldId; 6] = [
    FieldId::RecordNo,
    FieldId::CustomerId,
    FieldId::CardHolderName,
    FieldId::CardType,
    FieldId::CardLimit,
    FieldId::Country,
];

pub const STATUS_HEADER: &str = "Status";

/// Every saved record is shown as active
pub const STATUS_ACTIVE: &str = "Active";

pub const NO_RECORDS_TEXT: &str = "No records found. Save a record to see it here.";

/// Header labels of the summary table
pub fn summary_headers() -> Vec<&'static str> {
    SUMMARY_COLUMNS
        .iter()
        .map(|f| f.label())
        .chain(std::iter::once(STATUS_HEADER))
        .collect()
}

/// Snapshot of the form taken on Save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    /// Milliseconds since the Unix epoch at save time. Not unique: two saves
    /// in the same millisecond share an id.
    pub id: i64,

    #[serde(flatten)]
    pub record: CardRecord,
}

impl SavedRecord {
    pub fn new(id: i64, record: CardRecord) -> Self {
        Self { id, record }
    }

    /// Snapshot with an id taken from the current clock
    pub fn stamped(record: CardRecord) -> Self {
        Self::new(chrono::Utc::now().timestamp_millis(), record)
    }
}

/// One row of the summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryRow {
    /// Shown alone when nothing was saved yet
    NoRecords,
    Entry {
        id: i64,
        /// One cell per summary header, Status last
        cells: Vec<String>,
    },
}

/// Records saved during this page session, in insertion order.
/// Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedRecords {
    items: Vec<SavedRecord>,
}

impl SavedRecords {
    pub fn push(&mut self, record: SavedRecord) {
        self.items.push(record);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedRecord> {
        self.items.iter()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        if self.items.is_empty() {
            return vec![SummaryRow::NoRecords];
        }

        self.items
            .iter()
            .map(|saved| SummaryRow::Entry {
                id: saved.id,
                cells: SUMMARY_COLUMNS
                    .iter()
                    .map(|f| saved.record.value(*f).to_string())
                    .chain(std::iter::once(STATUS_ACTIVE.to_string()))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> CardRecord {
        CardRecord::default()
            .with(FieldId::RecordNo, "R1")
            .with(FieldId::CardHolderName, "Alice")
    }

    #[test]
    fn test_save_appends_one_record_with_id() {
        let mut saved = SavedRecords::default();
        saved.push(SavedRecord::stamped(alice()));

        assert_eq!(saved.len(), 1);
        let first = saved.iter().next().unwrap();
        assert!(first.id > 0);
        assert_eq!(first.record, alice());

        let json = serde_json::to_value(first).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["recordNo"], "R1");
        assert_eq!(obj["cardHolderName"], "Alice");
        assert!(obj["id"].is_i64());
    }

    #[test]
    fn test_colliding_ids_still_grow_the_list() {
        let mut saved = SavedRecords::default();
        saved.push(SavedRecord::new(1_700_000_000_000, alice()));
        assert_eq!(saved.len(), 1);
        saved.push(SavedRecord::new(1_700_000_000_000, alice()));
        assert_eq!(saved.len(), 2);

        let ids: Vec<i64> = saved.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1_700_000_000_000, 1_700_000_000_000]);
    }

    #[test]
    fn test_summary_placeholder_when_empty() {
        assert_eq!(SavedRecords::default().summary_rows(), vec![SummaryRow::NoRecords]);
        assert_eq!(NO_RECORDS_TEXT, "No records found. Save a record to see it here.");
    }

    #[test]
    fn test_summary_headers() {
        assert_eq!(
            summary_headers(),
            vec![
                "Record No.",
                "Customer ID",
                "Card Holder Name",
                "Card Type",
                "Card Limit",
                "Country",
                "Status",
            ]
        );
    }

    #[test]
    fn test_summary_rows_in_insertion_order() {
        let mut saved = SavedRecords::default();
        saved.push(SavedRecord::new(20, alice()));
        saved.push(SavedRecord::new(
            10,
            CardRecord::default()
                .with(FieldId::RecordNo, "R2")
                .with(FieldId::CustomerId, "C-9")
                .with(FieldId::CardLimit, "5000")
                .with(FieldId::Country, "Italy"),
        ));

        let rows = saved.summary_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            SummaryRow::Entry {
                id: 20,
                cells: vec![
                    "R1".into(), "".into(), "Alice".into(), "".into(), "".into(), "".into(),
                    "Active".into(),
                ],
            }
        );
        assert_eq!(
            rows[1],
            SummaryRow::Entry {
                id: 10,
                cells: vec![
                    "R2".into(), "C-9".into(), "".into(), "".into(), "5000".into(), "Italy".into(),
                    "Active".into(),
                ],
            }
        );
    }
}
