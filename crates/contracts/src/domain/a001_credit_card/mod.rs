//! Credit card record: the form aggregate and everything the form does with it.

pub mod aggregate;
pub mod command;
pub mod csv_export;
pub mod image_source;
pub mod phase;
pub mod saved;

pub use aggregate::{CardRecord, FieldId};
pub use command::FormCommand;
pub use csv_export::record_to_csv;
pub use image_source::{data_url, ImageSource};
pub use phase::Phase;
pub use saved::{summary_headers, SavedRecord, SavedRecords, SummaryRow, NO_RECORDS_TEXT};
