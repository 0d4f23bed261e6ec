//! Ad Request Form UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: fetch-based AdGateway and FileList reading
//! - view_model.rs: AdFormVm wrapping AdFormState in a signal
//! - view.rs: Main component AdForm

mod model;
mod view;
mod view_model;

pub use view::AdForm;
pub use view_model::AdFormVm;
