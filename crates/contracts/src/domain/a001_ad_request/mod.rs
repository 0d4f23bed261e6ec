//! Ad request: the form state and the multipart payload built from it

pub mod aggregate;
pub mod catalog;
pub mod payload;

// Re-exports
pub use aggregate::{AdFormState, AttachedFile};
pub use catalog::{PLATFORMS, PRODUCTS, PRODUCT_PLACEHOLDER};
pub use payload::{AdRequest, FormPart};
