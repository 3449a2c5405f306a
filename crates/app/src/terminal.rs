use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use owo_colors::OwoColorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use services::{Console, ConsoleError, Tone};

/// Console backed by a rustyline editor on stdin/stdout.
///
/// Reads run on the blocking pool so the runtime is never parked on a human.
pub struct TerminalConsole {
    editor: Arc<Mutex<DefaultEditor>>,
    prefill: Mutex<Option<String>>,
    armed: AtomicBool,
    color: bool,
}

impl TerminalConsole {
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if the terminal cannot be set up.
    pub fn new(color: bool) -> Result<Self, ConsoleError> {
        let editor = DefaultEditor::new().map_err(|e| ConsoleError::Io(e.to_string()))?;
        Ok(Self {
            editor: Arc::new(Mutex::new(editor)),
            prefill: Mutex::new(None),
            armed: AtomicBool::new(true),
            color: color && std::io::stdout().is_terminal(),
        })
    }

    /// Read the next command line, recording it in the editor history.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` on EOF and `Interrupted` on Ctrl-C.
    pub async fn next_command(&self, prompt: &str) -> Result<String, ConsoleError> {
        if !self.armed.swap(false, Ordering::SeqCst) {
            tracing::warn!("previous command did not re-arm the prompt");
        }
        let line = self.read_line(prompt).await?;
        if !line.trim().is_empty() {
            if let Ok(mut editor) = self.editor.lock() {
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %err, "could not record history entry");
                }
            }
        }
        Ok(line)
    }

    fn banner(token: &str) -> [String; 3] {
        let spaced: String = token
            .to_uppercase()
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let width = spaced.chars().count() + 4;
        [
            format!("╔{}╗", "═".repeat(width)),
            format!("║  {spaced}  ║"),
            format!("╚{}╝", "═".repeat(width)),
        ]
    }
}

#[async_trait]
impl Console for TerminalConsole {
    fn log(&self, line: &str) {
        println!("{line}");
    }

    fn error(&self, line: &str) {
        if self.color {
            eprintln!("{} {}", "Error:".red().bold(), line.red());
        } else {
            eprintln!("Error: {line}");
        }
    }

    fn big(&self, token: &str, tone: Tone) {
        println!();
        for row in Self::banner(token) {
            println!("  {}", self.paint(&row, tone));
        }
        println!();
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_owned();
        }
        match tone {
            Tone::Accent => text.magenta().to_string(),
            Tone::Prompt => text.red().to_string(),
            Tone::Success => text.green().bold().to_string(),
            Tone::Failure => text.red().bold().to_string(),
        }
    }

    fn prefill(&self, text: &str) {
        if let Ok(mut slot) = self.prefill.lock() {
            *slot = Some(text.to_owned());
        }
    }

    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        let initial = self.prefill.lock().ok().and_then(|mut slot| slot.take());
        let editor = Arc::clone(&self.editor);
        let prompt = prompt.to_owned();

        let result = tokio::task::spawn_blocking(move || {
            let mut editor = editor
                .lock()
                .map_err(|e| ReadlineError::Io(std::io::Error::other(e.to_string())))?;
            match initial {
                Some(initial) => editor.readline_with_initial(&prompt, (initial.as_str(), "")),
                None => editor.readline(&prompt),
            }
        })
        .await
        .map_err(|e| ConsoleError::Io(e.to_string()))?;

        match result {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => Err(ConsoleError::Closed),
            Err(ReadlineError::Interrupted) => Err(ConsoleError::Interrupted),
            Err(e) => Err(ConsoleError::Io(e.to_string())),
        }
    }

    fn ready(&self) {
        let _ = std::io::stdout().flush();
        self.armed.store(true, Ordering::SeqCst);
    }

    fn close(&self) {
        println!("¡Adiós!");
    }
}
