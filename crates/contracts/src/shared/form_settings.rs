use serde::{Deserialize, Serialize};

/// Settings of the entry form.
///
/// The app runs on `FormSettings::default()` unless the host page embeds a
/// JSON override; missing keys keep their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSettings {
    /// Shown when no image was chosen and after "New"
    pub placeholder_image: String,
    /// Download name of the CSV export
    pub export_filename: String,
    /// `accept` filter of the hidden file input
    pub image_accept: String,
    /// Viewer height before the image size is known
    pub fallback_viewer_height_px: u32,
    /// Viewer height is the natural image height divided by this
    pub viewer_height_divisor: u32,
    /// How long the "saved" banner stays visible
    pub success_banner_ms: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            placeholder_image: "/api/placeholder/800/400".to_string(),
            export_filename: "credit_card_data.csv".to_string(),
            image_accept: "image/*".to_string(),
            fallback_viewer_height_px: 400,
            viewer_height_divisor: 8,
            success_banner_ms: 3000,
        }
    }
}

impl FormSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
