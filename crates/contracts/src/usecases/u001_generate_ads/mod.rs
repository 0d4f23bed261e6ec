//! UseCase: отправка формы и получение файла с рекламой
//!
//! Structure:
//! - error.rs: таксономия ошибок отправки
//! - response.rs: разбор ответа сервера
//! - workflow.rs: AdGateway / ArtifactSink и сам сценарий отправки

pub mod error;
pub mod response;
pub mod workflow;

// Re-exports
pub use error::{DownloadError, SubmitError};
pub use response::{interpret_response, GatewayResponse, GeneratedArtifact};
pub use workflow::{generate_ads, submit, AdGateway, ArtifactSink, SubmitOutcome};
