//! Scrollable preview of the scanned document
//!
//! The image is loaded off-DOM to learn its natural size; the container is
//! then sized from it (see `ViewerBox`). Every source change starts a new
//! load and only the latest load may write the size.

use crate::shared::config::use_settings;
use contracts::shared::image_layout::{image_style, ImageSize, ViewerBox};
use contracts::shared::request_seq::RequestSeq;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

#[component]
pub fn ImageViewer(
    /// `<img src>`: placeholder URL or data URL
    #[prop(into)]
    src: Signal<String>,
) -> impl IntoView {
    let settings = use_settings();
    let natural = RwSignal::new(Option::<ImageSize>::None);
    let loads = RequestSeq::new();

    Effect::new(move |_| {
        let src = src.get();
        natural.set(None);

        let ticket = loads.issue();
        let loads = loads.clone();
        leptos::task::spawn_local(async move {
            match measure_image(&src).await {
                Ok(size) if loads.is_current(ticket) => natural.set(Some(size)),
                Ok(_) => log::debug!("Discarding superseded image measurement"),
                Err(e) => log::warn!("{}", e),
            }
        });
    });

    let container_style = move || ViewerBox::from_natural(natural.get(), &settings).container_style();

    view! {
        <div class="image-viewer" style=container_style>
            <img
                src=move || src.get()
                alt="Scanned document"
                style=move || image_style(natural.get())
            />
        </div>
    }
}

/// Loads `src` into a detached `<img>` and resolves with its natural size
async fn measure_image(src: &str) -> Result<ImageSize, String> {
    let image = HtmlImageElement::new()
        .map_err(|e| format!("Failed to create image element: {:?}", e))?;

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);

    JsFuture::from(loaded)
        .await
        .map_err(|_| format!("Failed to load image: {}", preview(src)))?;

    Ok(ImageSize {
        width: image.natural_width(),
        height: image.natural_height(),
    })
}

/// Data URLs are long; keep log lines short
fn preview(src: &str) -> &str {
    match src.char_indices().nth(64) {
        Some((i, _)) => &src[..i],
        None => src,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_sources() {
        assert_eq!(preview("/img/blank.png"), "/img/blank.png");
    }

    #[test]
    fn test_preview_cuts_data_urls() {
        let src = format!("data:image/png;base64,{}", "A".repeat(500));
        assert_eq!(preview(&src).len(), 64);
        assert!(src.starts_with(preview(&src)));
    }
}
