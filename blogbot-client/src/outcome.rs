use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Исход HTTP-обмена, дошедшего до ответа сервера.
///
/// Ошибки транспорта и декодирования сюда не входят, они возвращаются
/// как [`BlogClientError`](crate::BlogClientError).
pub enum ApiOutcome<T> {
    /// Сервер ответил ожидаемым статусом.
    Success(T),
    /// Сервер ответил любым другим статусом; тело не декодировалось.
    Failure {
        /// Фактический статус ответа.
        status: StatusCode,
        /// Сырое тело ответа.
        body: String,
    },
}

impl<T> ApiOutcome<T> {
    /// `true` для [`ApiOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Ссылка на значение успешного исхода.
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Значение успешного исхода, `None` при неуспешном статусе.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Преобразует значение успешного исхода.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            Self::Success(value) => ApiOutcome::Success(f(value)),
            Self::Failure { status, body } => ApiOutcome::Failure { status, body },
        }
    }

    /// Преобразует значение успешного исхода функцией, которая может упасть.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ApiOutcome<U>, E> {
        match self {
            Self::Success(value) => f(value).map(ApiOutcome::Success),
            Self::Failure { status, body } => Ok(ApiOutcome::Failure { status, body }),
        }
    }
}
