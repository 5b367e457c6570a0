//! Credit card entry form (EditDetails MVVM)
//!
//! - model.rs: browser side effects (file read, CSV download)
//! - view_model.rs: state signals and commands
//! - page.rs: page component, tab bar, action panel
//! - tabs/: phase field groups and the summary table

mod model;
mod page;
mod tabs;
mod view_model;

pub use page::CreditCardForm;
pub use view_model::CreditCardFormVm;
