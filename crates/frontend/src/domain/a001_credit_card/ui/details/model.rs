use crate::shared::export::export_csv;
use contracts::domain::a001_credit_card::{data_url, record_to_csv, CardRecord};
use wasm_bindgen_futures::JsFuture;

/// Reads a selected file into a `data:` URL
pub async fn read_as_data_url(file: web_sys::File) -> Result<String, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    Ok(data_url(&file.type_(), &bytes))
}

/// Serializes the record and hands it to the browser as a download
pub fn download_record(record: &CardRecord, filename: &str) -> Result<(), String> {
    export_csv(&record_to_csv(record), filename)
}
