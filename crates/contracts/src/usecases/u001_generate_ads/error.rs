use thiserror::Error;

/// Ошибки отправки формы. Любая из них завершает только текущую попытку.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Сервер вернул неуспешный статус и JSON с полем `error`
    #[error("Backend error: {0}")]
    Backend(String),

    /// Неуспешный статус, но тело не JSON или в нём нет поля `error`
    #[error("Malformed error response (HTTP {status}): {detail}")]
    MalformedErrorResponse { status: u16, detail: String },

    /// Запрос не дошёл до сервера или ответ не дочитан
    #[error("Network error: {0}")]
    Network(String),

    /// Браузер не смог собрать тело запроса
    #[error("Failed to build request: {0}")]
    Payload(String),
}

/// Ошибка при отдаче файла пользователю
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Download failed: {0}")]
pub struct DownloadError(pub String);
