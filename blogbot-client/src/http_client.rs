use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode, redirect};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{AllBlogsResponse, NewBlogPostRequest, Statistics};
use crate::outcome::ApiOutcome;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;
const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Blogs,
    Stats,
}

impl Endpoint {
    fn query(self) -> &'static str {
        match self {
            Self::Blogs => "api=blogs",
            Self::Stats => "api=stats",
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API блог-хостинга.
///
/// Внутренний `reqwest::Client` (пул соединений) общий для всех вызовов и
/// после создания не меняется. Каждый вызов выполняет ровно один запрос.
pub struct BlogClient {
    base_url: String,
    client: Client,
}

impl BlogClient {
    /// Создаёт клиент для заданного базового URL.
    ///
    /// URL используется как есть, без нормализации слешей. Пустой URL
    /// отклоняется с [`BlogClientError::MissingBaseUrl`].
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(BlogClientError::MissingBaseUrl);
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(BlogClientError::ClientBuild)?;

        Ok(Self { base_url, client })
    }

    /// Базовый URL, с которым создан клиент.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, endpoint: Endpoint) -> String {
        format!("{}?{}", self.base_url, endpoint.query())
    }

    /// отправляет запрос и сверяет статус, тело неуспешного ответа уходит в лог
    async fn exchange(
        &self,
        request: RequestBuilder,
        expected: StatusCode,
        operation: &'static str,
    ) -> BlogClientResult<ApiOutcome<String>> {
        let response = request.header(ACCEPT, APPLICATION_JSON).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == expected {
            debug!(operation, status = status.as_u16(), "request succeeded");
            return Ok(ApiOutcome::Success(body));
        }

        warn!(
            operation,
            status = status.as_u16(),
            body = %body,
            "unexpected http status"
        );
        Ok(ApiOutcome::Failure { status, body })
    }

    async fn fetch<T>(&self, endpoint: Endpoint, operation: &'static str) -> BlogClientResult<ApiOutcome<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(endpoint);
        debug!(operation, %url, "GET");

        self.exchange(self.client.get(url), StatusCode::OK, operation)
            .await?
            .try_map(|body| serde_json::from_str::<T>(&body))
            .map_err(BlogClientError::from)
    }

    /// Возвращает все посты (`GET ?api=blogs`).
    ///
    /// Успех только при статусе 200. Невалидное тело при 200 даёт
    /// [`BlogClientError::Decode`].
    pub async fn list_posts(&self) -> BlogClientResult<ApiOutcome<AllBlogsResponse>> {
        self.fetch(Endpoint::Blogs, "list_posts").await
    }

    /// Создаёт пост (`POST ?api=blogs`).
    ///
    /// Успех только при статусе 201, тело ответа игнорируется. Пустые поля
    /// отклоняются до отправки запроса.
    pub async fn create_post(&self, post: &NewBlogPostRequest) -> BlogClientResult<ApiOutcome<()>> {
        ensure_filled(post)?;

        let url = self.endpoint(Endpoint::Blogs);
        debug!(operation = "create_post", %url, "POST");

        let outcome = self
            .exchange(self.client.post(url).json(post), StatusCode::CREATED, "create_post")
            .await?;
        if outcome.is_success() {
            info!(title = post.title(), author = post.author(), "blog post created");
        }

        Ok(outcome.map(|_| ()))
    }

    /// Возвращает статистику сайта (`GET ?api=stats`).
    ///
    /// Успех только при статусе 200.
    pub async fn statistics(&self) -> BlogClientResult<ApiOutcome<Statistics>> {
        self.fetch(Endpoint::Stats, "statistics").await
    }
}

fn ensure_filled(post: &NewBlogPostRequest) -> BlogClientResult<()> {
    let fields = [
        ("title", post.title()),
        ("content", post.content()),
        ("author", post.author()),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(BlogClientError::blank_field(field));
        }
    }
    Ok(())
}
