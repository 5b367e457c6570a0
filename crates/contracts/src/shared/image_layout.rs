//! Container geometry of the document preview

use super::form_settings::FormSettings;
use std::fmt;

/// Natural pixel size of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// A CSS length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Size of the scrollable box around the preview image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerBox {
    pub width: Length,
    pub height: Length,
}

impl ViewerBox {
    /// Before the image loads: fixed fallback height, full width.
    /// After: natural width, natural height divided by the configured divisor.
    pub fn from_natural(size: Option<ImageSize>, settings: &FormSettings) -> Self {
        match size {
            Some(size) => Self {
                width: Length::Px(size.width as f64),
                height: Length::Px(size.height as f64 / settings.viewer_height_divisor.max(1) as f64),
            },
            None => Self {
                width: Length::Percent(100.0),
                height: Length::Px(settings.fallback_viewer_height_px as f64),
            },
        }
    }

    pub fn container_style(&self) -> String {
        format!("width: {}; height: {}; overflow: auto;", self.width, self.height)
    }
}

/// Inline style of the `<img>`: full natural width once known
pub fn image_style(size: Option<ImageSize>) -> String {
    match size {
        Some(size) => format!("width: {}px; display: block;", size.width),
        None => "width: 100%; display: block;".to_string(),
    }
}
