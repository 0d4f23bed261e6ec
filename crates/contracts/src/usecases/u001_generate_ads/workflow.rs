use super::error::{DownloadError, SubmitError};
use super::response::{interpret_response, GatewayResponse, GeneratedArtifact};
use crate::domain::a001_ad_request::{AdFormState, AdRequest, FormPart};
use crate::shared::config::{AppConfig, DownloadConfig};
use async_trait::async_trait;

/// Транспорт: один POST multipart-формы, ответ читается целиком
#[async_trait(?Send)]
pub trait AdGateway {
    async fn post_form(&self, url: &str, request: &AdRequest) -> Result<GatewayResponse, SubmitError>;
}

/// Отдаёт полученный файл пользователю (в браузере - скачивание)
pub trait ArtifactSink {
    fn offer(&self, artifact: &GeneratedArtifact, filename: &str) -> Result<(), DownloadError>;
}

/// Итог одной отправки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Downloaded,
    Failed(SubmitError),
    /// Файл получен, но отдать его не удалось. Статус формы не меняется.
    DownloadFailed(DownloadError),
}

impl SubmitOutcome {
    /// Текст статуса для формы; `None` - статус оставить как есть
    pub fn status_message(&self, download: &DownloadConfig) -> Option<String> {
        match self {
            SubmitOutcome::Downloaded => Some(download.success_notice.clone()),
            SubmitOutcome::Failed(e) => Some(format!("Error generating ad: {}", e)),
            SubmitOutcome::DownloadFailed(_) => None,
        }
    }
}

impl AdFormState {
    pub fn record_outcome(&mut self, outcome: &SubmitOutcome, download: &DownloadConfig) {
        if let Some(message) = outcome.status_message(download) {
            self.set_status(message);
        }
    }
}

/// Отправляет форму и разбирает ответ. Без повторов и таймаутов.
pub async fn generate_ads<G: AdGateway + ?Sized>(
    gateway: &G,
    url: &str,
    request: &AdRequest,
) -> Result<GeneratedArtifact, SubmitError> {
    log::info!("Sending request to backend...");
    let response = gateway.post_form(url, request).await?;
    log::debug!(
        "Response: HTTP {}, {} bytes",
        response.status,
        response.body.len()
    );
    interpret_response(response)
}

/// Полный сценарий кнопки "Generate Ads": отправка, скачивание, итог.
///
/// Повторный вызов до завершения предыдущего не блокируется: обе отправки
/// идут независимо, статус выставит та, что завершится позже.
pub async fn submit<G, S>(gateway: &G, sink: &S, config: &AppConfig, request: &AdRequest) -> SubmitOutcome
where
    G: AdGateway + ?Sized,
    S: ArtifactSink + ?Sized,
{
    log::info!("Submit button clicked");
    log_request(request);

    let artifact = match generate_ads(gateway, &config.endpoint.url, request).await {
        Ok(artifact) => artifact,
        Err(e) => {
            log::error!("Error generating ad: {}", e);
            return SubmitOutcome::Failed(e);
        }
    };

    match sink.offer(&artifact, &config.download.filename) {
        Ok(()) => SubmitOutcome::Downloaded,
        Err(e) => {
            log::error!("{}", e);
            SubmitOutcome::DownloadFailed(e)
        }
    }
}

fn log_request(request: &AdRequest) {
    for part in request.parts() {
        match part {
            FormPart::Text { name, value } => log::info!("{}: {}", name, value),
            FormPart::File {
                name,
                file_name,
                content,
            } => log::info!("{}: {} ({} bytes)", name, file_name, content.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_ad_request::payload::{
        FIELD_ATTACHED_FILES, FIELD_CHAT_INPUT, FIELD_PLATFORMS, FIELD_PRODUCT,
    };
    use crate::domain::a001_ad_request::AttachedFile;
    use crate::shared::config::load_config;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Отвечает заранее заданным результатом и запоминает запросы
    struct FakeGateway {
        reply: Result<GatewayResponse, SubmitError>,
        sent: RefCell<Vec<(String, AdRequest)>>,
    }

    impl FakeGateway {
        fn replying(status: u16, body: &[u8]) -> Self {
            Self {
                reply: Ok(GatewayResponse {
                    status,
                    body: body.to_vec(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: SubmitError) -> Self {
            Self {
                reply: Err(error),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AdGateway for FakeGateway {
        async fn post_form(&self, url: &str, request: &AdRequest) -> Result<GatewayResponse, SubmitError> {
            self.sent
                .borrow_mut()
                .push((url.to_string(), request.clone()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        offered: RefCell<Vec<(String, Vec<u8>)>>,
        fail: bool,
    }

    impl ArtifactSink for RecordingSink {
        fn offer(&self, artifact: &GeneratedArtifact, filename: &str) -> Result<(), DownloadError> {
            if self.fail {
                return Err(DownloadError("no document".to_string()));
            }
            self.offered
                .borrow_mut()
                .push((filename.to_string(), artifact.bytes.clone()));
            Ok(())
        }
    }

    fn run(gateway: &FakeGateway, sink: &RecordingSink, state: &mut AdFormState) -> SubmitOutcome {
        let config = load_config().unwrap();
        let outcome = block_on(submit(gateway, sink, &config, &state.to_request()));
        state.record_outcome(&outcome, &config.download);
        outcome
    }

    #[test]
    fn test_empty_form_still_posts_all_fields() {
        let gateway = FakeGateway::replying(200, b"ad_number\n");
        let sink = RecordingSink::default();
        let mut state = AdFormState::new();

        run(&gateway, &sink, &mut state);

        let sent = gateway.sent.borrow();
        assert_eq!(sent.len(), 1);
        let (url, request) = &sent[0];
        assert_eq!(url, "http://188.245.180.200:9494/generate-ad");
        assert_eq!(request.text_values(FIELD_PRODUCT), vec![""]);
        assert_eq!(request.text_values(FIELD_CHAT_INPUT), vec![""]);
        assert!(request.text_values(FIELD_PLATFORMS).is_empty());
        assert!(request.file_names(FIELD_ATTACHED_FILES).is_empty());
    }

    #[test]
    fn test_success_downloads_with_fixed_name() {
        let body = vec![0xde, 0xad, 0xbe, 0xef, 0x00, 0xff];
        let gateway = FakeGateway::replying(200, &body);
        let sink = RecordingSink::default();
        let mut state = AdFormState::new();
        state.select_product("CLion");
        state.toggle_platform("Reddit", true);
        state.attach_files(vec![AttachedFile::new("brief.md", "# C++")]);

        let outcome = run(&gateway, &sink, &mut state);

        assert_eq!(outcome, SubmitOutcome::Downloaded);
        assert_eq!(
            *sink.offered.borrow(),
            vec![("generated_ads.csv".to_string(), body)]
        );
        assert_eq!(state.status_message, "CSV file downloaded.");
    }

    #[test]
    fn test_backend_error_sets_status_without_download() {
        let gateway = FakeGateway::replying(429, br#"{"error": "quota exceeded"}"#);
        let sink = RecordingSink::default();
        let mut state = AdFormState::new();

        let outcome = run(&gateway, &sink, &mut state);

        assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Backend(_))));
        assert!(state.status_message.contains("quota exceeded"));
        assert_eq!(
            state.status_message,
            "Error generating ad: Backend error: quota exceeded"
        );
        assert!(sink.offered.borrow().is_empty());
    }

    #[test]
    fn test_non_json_error_sets_status_without_download() {
        let gateway = FakeGateway::replying(500, b"Internal Server Error");
        let sink = RecordingSink::default();
        let mut state = AdFormState::new();

        let outcome = run(&gateway, &sink, &mut state);

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(SubmitError::MalformedErrorResponse { status: 500, .. })
        ));
        assert!(state.status_message.starts_with("Error generating ad: "));
        assert!(sink.offered.borrow().is_empty());
    }

    #[test]
    fn test_network_failure_sets_status() {
        let gateway = FakeGateway::failing(SubmitError::Network("Failed to fetch".to_string()));
        let sink = RecordingSink::default();
        let mut state = AdFormState::new();

        run(&gateway, &sink, &mut state);

        assert_eq!(
            state.status_message,
            "Error generating ad: Network error: Failed to fetch"
        );
        assert!(sink.offered.borrow().is_empty());
    }

    #[test]
    fn test_download_failure_leaves_status_untouched() {
        let gateway = FakeGateway::replying(200, b"csv");
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut state = AdFormState::new();
        state.set_status("CSV file downloaded.");
        state.edit_message("second try");

        let outcome = run(&gateway, &sink, &mut state);

        assert!(matches!(outcome, SubmitOutcome::DownloadFailed(_)));
        assert_eq!(state.status_message, "CSV file downloaded.");
    }

    #[test]
    fn test_resubmission_after_failure_succeeds() {
        let sink = RecordingSink::default();
        let mut state = AdFormState::new();

        run(
            &FakeGateway::replying(400, br#"{"error": "Missing required parameters"}"#),
            &sink,
            &mut state,
        );
        assert!(state.status_message.contains("Missing required parameters"));

        run(&FakeGateway::replying(200, b"ok"), &sink, &mut state);
        assert_eq!(state.status_message, "CSV file downloaded.");
        assert_eq!(sink.offered.borrow().len(), 1);
    }
}
