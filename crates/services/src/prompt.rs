use crate::console::{Console, ConsoleError, Tone};

/// Ask a free-text question and return the trimmed reply.
///
/// An empty reply is returned as-is; callers decide whether it is acceptable.
///
/// # Errors
///
/// Returns `ConsoleError` if the input stream is interrupted or closed.
pub async fn ask(console: &dyn Console, prompt: &str) -> Result<String, ConsoleError> {
    let styled = console.paint(prompt, Tone::Prompt);
    let line = console.read_line(&styled).await?;
    Ok(line.trim().to_owned())
}

/// Like [`ask`], with the input line pre-filled with `default`.
///
/// # Errors
///
/// Returns `ConsoleError` if the input stream is interrupted or closed.
pub async fn ask_prefilled(
    console: &dyn Console,
    prompt: &str,
    default: &str,
) -> Result<String, ConsoleError> {
    console.prefill(default);
    ask(console, prompt).await
}
