//! ViewModel for the credit card entry form
//!
//! Holds the form record, active tab, saved records and image source as
//! signals, and implements every `FormCommand`.

use super::model;
use contracts::domain::a001_credit_card::{
    CardRecord, FieldId, FormCommand, ImageSource, Phase, SavedRecord, SavedRecords,
};
use contracts::shared::form_settings::FormSettings;
use contracts::shared::request_seq::RequestSeq;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone)]
pub struct CreditCardFormVm {
    // === Form state ===
    pub form: RwSignal<CardRecord>,
    pub active_tab: RwSignal<Phase>,
    pub saved: RwSignal<SavedRecords>,
    pub image_src: RwSignal<ImageSource>,

    // === UI state ===
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub file_input: NodeRef<html::Input>,

    settings: FormSettings,
    uploads: RequestSeq,
}

impl CreditCardFormVm {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            form: RwSignal::new(CardRecord::default()),
            active_tab: RwSignal::new(Phase::default()),
            saved: RwSignal::new(SavedRecords::default()),
            image_src: RwSignal::new(ImageSource::default()),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            file_input: NodeRef::new(),
            settings,
            uploads: RequestSeq::new(),
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    // === Derived signals ===

    /// URL fed to the image viewer
    pub fn image_url(&self) -> Signal<String> {
        let image_src = self.image_src;
        let placeholder = self.settings.placeholder_image.clone();
        Signal::derive(move || image_src.with(|s| s.url(&placeholder).to_string()))
    }

    pub fn field_value(&self, field: FieldId) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    }

    // === Commands ===

    pub fn dispatch(&self, command: FormCommand) {
        match command {
            FormCommand::Next => self.active_tab.update(|p| *p = p.next()),
            FormCommand::Prev => self.active_tab.update(|p| *p = p.prev()),
            FormCommand::Browse => self.browse(),
            FormCommand::New => self.new_form(),
            FormCommand::Save => self.save(),
            FormCommand::Edit
            | FormCommand::Update
            | FormCommand::Delete
            | FormCommand::Cancel
            | FormCommand::SearchCity
            | FormCommand::Exit => {
                log::debug!("{}: not implemented", command.label());
            }
        }
    }

    pub fn set_tab(&self, phase: Phase) {
        self.active_tab.set(phase);
    }

    pub fn edit_field(&self, field: FieldId, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    /// Opens the hidden file input
    fn browse(&self) {
        match self.file_input.get_untracked() {
            Some(input) => input.click(),
            None => log::warn!("File input is not mounted"),
        }
    }

    /// Handles `change` on the hidden file input
    pub fn on_file_selected(&self, ev: web_sys::Event) {
        let Some(file) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };

        let ticket = self.uploads.issue();
        let uploads = self.uploads.clone();
        let image_src = self.image_src;
        leptos::task::spawn_local(async move {
            let name = file.name();
            match model::read_as_data_url(file).await {
                Ok(url) if uploads.is_current(ticket) => {
                    image_src.update(|s| {
                        s.accept_upload(Some(url));
                    });
                    log::info!("Loaded image {}", name);
                }
                Ok(_) => log::debug!("Discarding superseded upload {}", name),
                Err(e) => log::warn!("{}", e),
            }
        });
    }

    /// Clears the record and the image; saved records and tab stay
    fn new_form(&self) {
        self.form.update(|f| f.clear());
        self.image_src.update(|s| s.reset());
        // A read still in flight must not bring the old image back.
        self.uploads.issue();
        self.error.set(None);
    }

    /// Appends a snapshot to the saved list and downloads it as CSV.
    /// The export is attempted regardless of the append and vice versa.
    fn save(&self) {
        let record = self.form.get_untracked();
        let snapshot = SavedRecord::stamped(record.clone());
        let id = snapshot.id;

        match serde_json::to_string(&snapshot) {
            Ok(json) => log::debug!("Saving record {}", json),
            Err(e) => log::debug!("Saving record {} (not serializable: {})", id, e),
        }
        self.saved.update(|s| s.push(snapshot));

        match model::download_record(&record, &self.settings.export_filename) {
            Ok(()) => {
                self.error.set(None);
                self.show_success(format!("Record {} saved", id));
            }
            Err(e) => {
                log::error!("CSV export failed: {}", e);
                self.error.set(Some(format!("CSV export failed: {}", e)));
            }
        }
    }

    fn show_success(&self, message: String) {
        let success = self.success;
        let delay = self.settings.success_banner_ms;
        success.set(Some(message.clone()));

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            // A newer message owns the banner now.
            if success.get_untracked().as_deref() == Some(message.as_str()) {
                success.set(None);
            }
        });
    }
}
