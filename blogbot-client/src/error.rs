use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blogbot-client`.
///
/// Неуспешный HTTP-статус сюда не попадает: это ожидаемый исход,
/// он возвращается как [`ApiOutcome::Failure`](crate::ApiOutcome::Failure).
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта: соединение, таймаут, обрыв при чтении тела.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Тело успешного ответа не соответствует ожидаемой JSON-схеме.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Некорректные входные данные; запрос не отправлялся.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Базовый URL API не задан или пуст.
    #[error("api base url is missing")]
    MissingBaseUrl,

    /// Не удалось собрать HTTP-клиент.
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),
}

/// Результат операций `blogbot-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn blank_field(field: &str) -> Self {
        Self::InvalidRequest(format!("'{field}' must not be empty"))
    }
}
