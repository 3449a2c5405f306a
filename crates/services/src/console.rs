//! The shell side of the trainer: where lines come from and output goes.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while waiting for user input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConsoleError {
    #[error("entrada interrumpida")]
    Interrupted,
    #[error("la entrada se ha cerrado")]
    Closed,
    #[error("error de terminal: {0}")]
    Io(String),
}

/// Visual emphasis a console may apply to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ids and separators.
    Accent,
    /// Questions put to the user.
    Prompt,
    /// Right answers.
    Success,
    /// Wrong answers and errors.
    Failure,
}

/// Line-oriented shell the pipelines talk to.
///
/// Output methods are fire-and-forget; only `read_line` suspends.
#[async_trait]
pub trait Console: Send + Sync {
    /// Display one line of text.
    fn log(&self, line: &str);

    /// Display one error line.
    fn error(&self, line: &str);

    /// Display a short token (score, verdict) in a large, distinct rendering.
    fn big(&self, token: &str, tone: Tone);

    /// Wrap `text` in the styling for `tone`. Plain consoles return it unchanged.
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_owned()
    }

    /// Pre-fill the next input line with `text` so the user can edit it.
    fn prefill(&self, text: &str);

    /// Show `prompt` and wait for one line of input, returned untrimmed.
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError>;

    /// The current command is done; show the command prompt again.
    fn ready(&self);

    /// End the session.
    fn close(&self);
}
