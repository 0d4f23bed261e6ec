use super::error::SubmitError;
use serde::Deserialize;

/// Сырой ответ сервера: статус и тело целиком
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl GatewayResponse {
    /// Same range the Fetch API treats as `ok`
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Файл, полученный от сервера. Тип содержимого не проверяется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub bytes: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Разбирает ответ: успех - тело как есть, иначе сообщение из поля `error`
pub fn interpret_response(response: GatewayResponse) -> Result<GeneratedArtifact, SubmitError> {
    if response.is_success() {
        return Ok(GeneratedArtifact {
            bytes: response.body,
        });
    }

    let body: ErrorBody =
        serde_json::from_slice(&response.body).map_err(|e| SubmitError::MalformedErrorResponse {
            status: response.status,
            detail: e.to_string(),
        })?;

    Err(SubmitError::Backend(body.error))
}
