use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

pub(crate) const DEFAULT_CONFIG_FILE: &str = "config.properties";
const DEFAULT_BOT_NAME: &str = "DefaultBlogBot";

const KEY_API_BASE_URL: &str = "api.base.url";
const KEY_BOT_NAME: &str = "bot.name";

/// Значения из окружения и командной строки; перекрывают файл конфигурации.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub(crate) base_url: Option<String>,
    pub(crate) bot_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) api_base_url: String,
    pub(crate) bot_name: String,
}

impl Settings {
    /// Читает properties-файл (его отсутствие не ошибка) и накладывает `overrides`.
    pub(crate) fn load(path: &Path, overrides: Overrides) -> Result<Self> {
        let properties = load_properties(path)?;
        Self::resolve(&properties, overrides)
    }

    /// Без базового URL клиент не создаётся: встроенного адреса по умолчанию нет.
    pub(crate) fn resolve(properties: &HashMap<String, String>, overrides: Overrides) -> Result<Self> {
        let api_base_url = pick(overrides.base_url, properties.get(KEY_API_BASE_URL)).ok_or_else(|| {
            anyhow!(
                "api base url is not configured: set '{KEY_API_BASE_URL}' in the config file, BLOGBOT_API_URL or --base-url"
            )
        })?;
        let bot_name = pick(overrides.bot_name, properties.get(KEY_BOT_NAME))
            .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string());

        Ok(Self {
            api_base_url,
            bot_name,
        })
    }
}

fn load_properties(path: &Path) -> Result<HashMap<String, String>> {
    match fs::read_to_string(path) {
        Ok(raw) => {
            debug!(path = %path.display(), "config file loaded");
            Ok(parse_properties(&raw))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "config file not found");
            Ok(HashMap::new())
        }
        Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Разбирает формат `key=value` / `key: value`; строки с `#` или `!` — комментарии.
pub(crate) fn parse_properties(raw: &str) -> HashMap<String, String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(|line| match line.find(['=', ':']) {
            Some(idx) => (line[..idx].trim(), line[idx + 1..].trim()),
            None => (line, ""),
        })
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn pick(primary: Option<String>, fallback: Option<&String>) -> Option<String> {
    non_blank(primary).or_else(|| non_blank(fallback.cloned()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn properties(raw: &str) -> HashMap<String, String> {
        parse_properties(raw)
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock must be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("blogbot-{nanos}-{name}"))
    }

    #[test]
    fn parse_properties_handles_separators_and_comments() {
        let parsed = properties(
            "# comment\n! another\n\napi.base.url = http://max.ge/q45/index.php\nbot.name: Helper\nflag\n",
        );

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["api.base.url"], "http://max.ge/q45/index.php");
        assert_eq!(parsed["bot.name"], "Helper");
        assert_eq!(parsed["flag"], "");
    }

    #[test]
    fn parse_properties_splits_on_first_separator_only() {
        let parsed = properties("api.base.url=http://localhost:8080/index.php");
        assert_eq!(parsed["api.base.url"], "http://localhost:8080/index.php");
    }

    #[test]
    fn resolve_prefers_overrides() {
        let file = properties("api.base.url=http://file/index.php\nbot.name=FileBot");
        let settings = Settings::resolve(
            &file,
            Overrides {
                base_url: Some("http://cli/index.php".to_string()),
                bot_name: None,
            },
        )
        .expect("must resolve");

        assert_eq!(settings.api_base_url, "http://cli/index.php");
        assert_eq!(settings.bot_name, "FileBot");
    }

    #[test]
    fn resolve_ignores_blank_override() {
        let file = properties("api.base.url=http://file/index.php");
        let settings = Settings::resolve(
            &file,
            Overrides {
                base_url: Some("   ".to_string()),
                bot_name: Some(String::new()),
            },
        )
        .expect("must resolve");

        assert_eq!(settings.api_base_url, "http://file/index.php");
        assert_eq!(settings.bot_name, DEFAULT_BOT_NAME);
    }

    #[test]
    fn resolve_fails_without_base_url() {
        let err = Settings::resolve(&properties("bot.name=Bot\napi.base.url="), Overrides::default())
            .expect_err("missing url must fail");
        assert!(err.to_string().contains("api base url is not configured"));
    }

    #[test]
    fn load_treats_missing_file_as_empty() {
        let path = temp_path("missing.properties");
        let settings = Settings::load(
            &path,
            Overrides {
                base_url: Some("http://cli/index.php".to_string()),
                bot_name: None,
            },
        )
        .expect("missing file is not an error");

        assert_eq!(settings.bot_name, DEFAULT_BOT_NAME);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = temp_path("config.properties");
        fs::write(&path, "api.base.url=http://disk/index.php\nbot.name=DiskBot\n")
            .expect("temp file must be writable");

        let settings = Settings::load(&path, Overrides::default()).expect("must load");
        fs::remove_file(&path).ok();

        assert_eq!(
            settings,
            Settings {
                api_base_url: "http://disk/index.php".to_string(),
                bot_name: "DiskBot".to_string(),
            }
        );
    }
}
