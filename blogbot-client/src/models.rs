use std::fmt;

use serde::{Deserialize, Serialize};

const POST_SEPARATOR: &str = "------------------------------------";

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Публичная модель поста в том виде, в каком её отдаёт сервер.
///
/// `created_at` не разбирается как дата и передаётся как есть.
pub struct BlogPost {
    id: String,
    title: String,
    author: String,
    content: String,
    created_at: String,
}

impl BlogPost {
    /// Идентификатор поста.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Заголовок поста.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Автор поста.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Содержимое поста.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Время создания в исходном серверном формате.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl fmt::Display for BlogPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Content: {}", self.content)?;
        writeln!(f, "Created at: {}", self.created_at)?;
        write!(f, "{POST_SEPARATOR}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Сводка по коллекции постов.
pub struct Meta {
    total: i64,
    limit: i64,
    can_add_more: bool,
}

impl Meta {
    /// Общее количество постов.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Лимит постов.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Можно ли добавить ещё пост.
    pub fn can_add_more(&self) -> bool {
        self.can_add_more
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total posts: {}, Limit: {}, Can add more: {}",
            self.total,
            self.limit,
            yes_no(self.can_add_more)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Ответ `GET ?api=blogs`: посты и необязательная сводка.
pub struct AllBlogsResponse {
    #[serde(default)]
    data: Option<Vec<BlogPost>>,
    #[serde(default)]
    meta: Option<Meta>,
}

impl AllBlogsResponse {
    /// Посты в порядке сервера. `null` и отсутствие `data` дают пустой срез.
    pub fn posts(&self) -> &[BlogPost] {
        self.data.as_deref().unwrap_or_default()
    }

    /// Передавал ли сервер поле `data` со значением, отличным от `null`.
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Нет ни одного поста.
    pub fn is_empty(&self) -> bool {
        self.posts().is_empty()
    }

    /// Сводка по коллекции, если сервер её прислал.
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Забирает посты, отбрасывая сводку.
    pub fn into_posts(self) -> Vec<BlogPost> {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Тело запроса `POST ?api=blogs`.
///
/// Идентификатор и время создания назначает сервер.
pub struct NewBlogPostRequest {
    title: String,
    content: String,
    author: String,
}

impl NewBlogPostRequest {
    /// Собирает запрос из пользовательских значений без какой-либо нормализации.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Заголовок.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Содержимое.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Автор.
    pub fn author(&self) -> &str {
        &self.author
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
/// Ответ `GET ?api=stats`.
pub struct Statistics {
    total_posts: i64,
    max_posts: i64,
    remaining_posts: i64,
    percentage_used: f64,
    can_add_more: bool,
}

impl Statistics {
    /// Всего постов.
    pub fn total_posts(&self) -> i64 {
        self.total_posts
    }

    /// Максимум постов.
    pub fn max_posts(&self) -> i64 {
        self.max_posts
    }

    /// Сколько постов ещё можно добавить.
    pub fn remaining_posts(&self) -> i64 {
        self.remaining_posts
    }

    /// Процент использования. Значение не ограничивается диапазоном 0..=100.
    pub fn percentage_used(&self) -> f64 {
        self.percentage_used
    }

    /// Можно ли добавить ещё пост.
    pub fn can_add_more(&self) -> bool {
        self.can_add_more
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System Statistics:")?;
        writeln!(f, "  Total posts: {}", self.total_posts)?;
        writeln!(f, "  Max posts: {}", self.max_posts)?;
        writeln!(f, "  Remaining posts: {}", self.remaining_posts)?;
        writeln!(f, "  Percentage used: {:.2}%", self.percentage_used)?;
        write!(f, "  Can add more: {}", yes_no(self.can_add_more))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
