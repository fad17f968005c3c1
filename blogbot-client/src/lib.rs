//! Клиентская библиотека для REST API блог-хостинга.
//!
//! Три операции поверх одного базового URL:
//! - `GET ?api=blogs` — список постов ([`BlogClient::list_posts`])
//! - `POST ?api=blogs` — новый пост ([`BlogClient::create_post`])
//! - `GET ?api=stats` — статистика сайта ([`BlogClient::statistics`])
//!
//! Неуспешный HTTP-статус возвращается как [`ApiOutcome::Failure`], а ошибки
//! транспорта и разбора тела успешного ответа — как [`BlogClientError`].
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;
mod outcome;

pub use error::{BlogClientError, BlogClientResult};
pub use http_client::BlogClient;
pub use models::{AllBlogsResponse, BlogPost, Meta, NewBlogPostRequest, Statistics};
pub use outcome::ApiOutcome;
pub use reqwest::StatusCode;
