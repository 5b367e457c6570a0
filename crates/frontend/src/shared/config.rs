//! Form settings lookup
//!
//! The host page may embed
//! `<script id="form-settings" type="application/json">{ ... }</script>`
//! to override individual settings. Anything missing or unreadable falls back
//! to `FormSettings::default()`.

use contracts::shared::form_settings::FormSettings;
use leptos::prelude::*;

const SETTINGS_ELEMENT_ID: &str = "form-settings";

pub fn load_settings() -> FormSettings {
    let Some(json) = embedded_settings_json() else {
        return FormSettings::default();
    };

    match FormSettings::from_json(&json) {
        Ok(settings) => {
            log::info!("Form settings loaded from #{}", SETTINGS_ELEMENT_ID);
            settings
        }
        Err(e) => {
            log::warn!("Ignoring invalid #{}: {}", SETTINGS_ELEMENT_ID, e);
            FormSettings::default()
        }
    }
}

fn embedded_settings_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(SETTINGS_ELEMENT_ID)?;
    element.text_content().filter(|s| !s.trim().is_empty())
}

/// Settings provided by `App`
pub fn use_settings() -> FormSettings {
    use_context::<FormSettings>().unwrap_or_default()
}
