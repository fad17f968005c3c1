use std::io::{self, BufRead, Write};

use anyhow::Result;
use blogbot_client::{
    AllBlogsResponse, ApiOutcome, BlogClient, BlogClientError, NewBlogPostRequest, Statistics,
};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    CreatePost,
    ListPosts,
    Statistics,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuInput {
    Choice(MenuChoice),
    Unknown(i64),
    NotANumber,
}

pub(crate) fn parse_choice(raw: &str) -> MenuInput {
    match raw.trim().parse::<i64>() {
        Ok(1) => MenuInput::Choice(MenuChoice::CreatePost),
        Ok(2) => MenuInput::Choice(MenuChoice::ListPosts),
        Ok(3) => MenuInput::Choice(MenuChoice::Statistics),
        Ok(4) => MenuInput::Choice(MenuChoice::Exit),
        Ok(other) => MenuInput::Unknown(other),
        Err(_) => MenuInput::NotANumber,
    }
}

#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Client(#[from] BlogClientError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Интерактивное меню поверх `BlogClient`.
///
/// Ввод и вывод параметризованы, чтобы меню можно было гонять в тестах.
pub(crate) struct Menu<'a, R, W> {
    client: &'a BlogClient,
    bot_name: &'a str,
    input: R,
    output: W,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(client: &'a BlogClient, bot_name: &'a str, input: R, output: W) -> Self {
        Self {
            client,
            bot_name,
            input,
            output,
        }
    }

    /// Крутит меню до выбора выхода или конца ввода.
    ///
    /// Ошибки клиента показываются пользователю, и цикл продолжается;
    /// фатальны только ошибки ввода-вывода самой консоли.
    pub(crate) async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Hello! I am {}, your blog assistant.", self.bot_name)?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            let step = match parse_choice(&line) {
                MenuInput::Choice(MenuChoice::Exit) => {
                    writeln!(self.output, "Thanks for using {}. Bye!", self.bot_name)?;
                    break;
                }
                MenuInput::Choice(MenuChoice::CreatePost) => self.create_post().await,
                MenuInput::Choice(MenuChoice::ListPosts) => self.list_posts().await,
                MenuInput::Choice(MenuChoice::Statistics) => self.show_statistics().await,
                MenuInput::Unknown(choice) => {
                    debug!(choice, "unknown menu item");
                    writeln!(self.output, "Incorrect choice, please try again.")?;
                    continue;
                }
                MenuInput::NotANumber => {
                    writeln!(self.output, "Incorrect character, please enter valid number")?;
                    continue;
                }
            };

            match step {
                Ok(()) => {}
                Err(StepError::Client(err)) => {
                    warn!(error = %err, "menu action failed");
                    writeln!(self.output, "Mistake: {err}")?;
                }
                Err(StepError::Io(err)) => return Err(err.into()),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Menu ---")?;
        writeln!(self.output, "1. Create new blog")?;
        writeln!(self.output, "2. View all blogs")?;
        writeln!(self.output, "3. Statistics of the site")?;
        writeln!(self.output, "4. Back")?;
        write!(self.output, "Please choose: ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    async fn create_post(&mut self) -> Result<(), StepError> {
        writeln!(self.output, "\n--- Create new blog ---")?;
        let title = self.prompt("Please enter the name: ")?;
        let author = self.prompt("Please enter the author: ")?;
        let content = self.prompt("Please enter the content: ")?;

        if [&title, &author, &content]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            writeln!(self.output, "Error: name, author and content can not be empty..")?;
            return Ok(());
        }

        let request = NewBlogPostRequest::new(title, content, author);
        match self.client.create_post(&request).await? {
            ApiOutcome::Success(()) => writeln!(self.output, "Blog post created successfully!")?,
            ApiOutcome::Failure { status, .. } => writeln!(
                self.output,
                "Error creating blog post. Status code: {}",
                status.as_u16()
            )?,
        }
        Ok(())
    }

    async fn list_posts(&mut self) -> Result<(), StepError> {
        writeln!(self.output, "\n--- See all blogs ---")?;
        let outcome = self.client.list_posts().await?;
        write_posts(&mut self.output, outcome.as_success())?;
        Ok(())
    }

    async fn show_statistics(&mut self) -> Result<(), StepError> {
        writeln!(self.output, "\n--- Statistics ---")?;
        let outcome = self.client.statistics().await?;
        write_statistics(&mut self.output, outcome.as_success())?;
        Ok(())
    }
}

fn write_posts(out: &mut impl Write, response: Option<&AllBlogsResponse>) -> io::Result<()> {
    match response {
        Some(response) if !response.is_empty() => {
            for post in response.posts() {
                writeln!(out, "{post}")?;
            }
            if let Some(meta) = response.meta() {
                writeln!(out, "Meta information: {meta}")?;
            }
            Ok(())
        }
        _ => writeln!(out, "No blogs for now."),
    }
}

fn write_statistics(out: &mut impl Write, stats: Option<&Statistics>) -> io::Result<()> {
    match stats {
        Some(stats) => writeln!(out, "{stats}"),
        None => writeln!(out, "Error loading statistics."),
    }
}
