use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// What the document preview shows.
///
/// Replacing the source discards the previous one; there is no history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageSource {
    /// The configured placeholder URL
    #[default]
    Placeholder,
    /// A `data:` URL built from a user-selected local file
    DataUrl(String),
}

impl ImageSource {
    /// Resolves to the string fed to `<img src>`
    pub fn url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            ImageSource::Placeholder => placeholder,
            ImageSource::DataUrl(url) => url,
        }
    }

    /// Applies the outcome of a file read. `None` (nothing selected, or the
    /// read produced no data) leaves the current source unchanged.
    /// Returns whether the source was replaced.
    pub fn accept_upload(&mut self, data_url: Option<String>) -> bool {
        match data_url {
            Some(url) => {
                *self = ImageSource::DataUrl(url);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = ImageSource::Placeholder;
    }
}

/// Builds `data:<mime>;base64,<payload>` from raw file bytes.
/// An unknown MIME type falls back to `application/octet-stream`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
