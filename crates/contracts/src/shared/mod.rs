pub mod form_settings;
pub mod image_layout;
pub mod request_seq;
