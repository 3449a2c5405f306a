use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Instrument;

use quiz_core::model::{Quiz, QuizDraft, QuizId};
use quiz_core::validate_id;
use storage::repository::{QuizRepository, StorageError};

use crate::command::Command;
use crate::console::{Console, Tone};
use crate::error::TrainerError;
use crate::play::{PlaySession, RoundEnd, Verdict};
use crate::prompt::{ask, ask_prefilled};

/// What the shell should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &[&str] = &[
    "Comandos:",
    "  h|help - Muestra esta ayuda.",
    "  list - Listar los quizzes existentes.",
    "  show <id> - Muestra la pregunta y la respuesta del quiz indicado.",
    "  add - Añadir un nuevo quiz interactivamente.",
    "  delete <id> - Borrar el quiz indicado.",
    "  edit <id> - Editar el quiz indicado.",
    "  test <id> - Probar el quiz indicado.",
    "  p|play - Jugar a preguntar aleatoriamente todos los quizzes.",
    "  credits - Créditos.",
    "  q|quit - Salir del programa.",
];

/// Runs one command pipeline at a time against a quiz store and a console.
pub struct Trainer {
    quizzes: Arc<dyn QuizRepository>,
    console: Arc<dyn Console>,
    rng: StdRng,
}

impl Trainer {
    #[must_use]
    pub fn new(quizzes: Arc<dyn QuizRepository>, console: Arc<dyn Console>) -> Self {
        Self {
            quizzes,
            console,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for the play-round draw order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Parse and run one command line.
    pub async fn execute_line(&mut self, line: &str) -> Flow {
        self.execute(Command::parse(line)).await
    }

    /// Run `command` to completion.
    ///
    /// Failures are reported on the console. Unless the command is `quit`,
    /// the console's `ready` is signalled exactly once afterwards.
    pub async fn execute(&mut self, command: Command) -> Flow {
        if command == Command::Quit {
            tracing::info!("session closed by user");
            self.console.close();
            return Flow::Quit;
        }

        let name = command.name();
        let span = tracing::debug_span!("command", name);
        if let Err(err) = self.run(command).instrument(span).await {
            tracing::warn!(command = name, error = %err, "command failed");
            self.report(&err);
        }
        self.console.ready();
        Flow::Continue
    }

    async fn run(&mut self, command: Command) -> Result<(), TrainerError> {
        match command {
            Command::Empty | Command::Quit => Ok(()),
            Command::Help => {
                self.help();
                Ok(())
            }
            Command::List => self.list().await,
            Command::Show(id) => self.show(id.as_deref()).await,
            Command::Add => self.add().await,
            Command::Delete(id) => self.delete(id.as_deref()).await,
            Command::Edit(id) => self.edit(id.as_deref()).await,
            Command::Test(id) => self.test(id.as_deref()).await,
            Command::Play => self.play().await,
            Command::Credits => {
                self.credits();
                Ok(())
            }
            Command::Unknown(name) => {
                self.console.error(&format!("Comando desconocido: '{name}'"));
                self.console.log("Use el comando help para ver los comandos disponibles.");
                Ok(())
            }
        }
    }

    fn report(&self, err: &TrainerError) {
        match err {
            TrainerError::Storage(StorageError::Validation(invalid)) => {
                self.console.error("El quiz es erróneo:");
                for field in &invalid.fields {
                    self.console.error(&field.message);
                }
            }
            other => self.console.error(&other.to_string()),
        }
    }

    async fn fetch(&self, id: QuizId) -> Result<Quiz, TrainerError> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or(TrainerError::NotFound(id))
    }

    fn render(&self, quiz: &Quiz) -> String {
        format!(
            "{}: {} {} {}",
            self.console.paint(&format!("[{}]", quiz.id()), Tone::Accent),
            quiz.question(),
            self.console.paint("=>", Tone::Accent),
            quiz.answer()
        )
    }

    fn help(&self) {
        for line in HELP {
            self.console.log(line);
        }
    }

    fn credits(&self) {
        self.console.log("Autor de la práctica:");
        self.console.log(&self.console.paint("Matthias Killer", Tone::Success));
    }

    async fn list(&self) -> Result<(), TrainerError> {
        for quiz in self.quizzes.find_all().await? {
            let id = self.console.paint(&format!("[{}]", quiz.id()), Tone::Accent);
            self.console.log(&format!("{id}: {}", quiz.question()));
        }
        Ok(())
    }

    async fn show(&self, raw: Option<&str>) -> Result<(), TrainerError> {
        let id = validate_id(raw)?;
        let quiz = self.fetch(id).await?;
        self.console.log(&self.render(&quiz));
        Ok(())
    }

    async fn add(&self) -> Result<(), TrainerError> {
        let console = self.console.as_ref();
        let question = ask(console, "Introduzca una pregunta: ").await?;
        let answer = ask(console, "Introduzca la respuesta: ").await?;

        let quiz = self.quizzes.create(QuizDraft::new(question, answer)).await?;
        tracing::info!(id = %quiz.id(), "quiz added");
        self.console.log(&format!(
            "{}: {} {} {}",
            console.paint("Se ha añadido", Tone::Accent),
            quiz.question(),
            console.paint("=>", Tone::Accent),
            quiz.answer()
        ));
        Ok(())
    }

    async fn delete(&self, raw: Option<&str>) -> Result<(), TrainerError> {
        let id = validate_id(raw)?;
        self.quizzes.delete_by_id(id).await?;
        tracing::info!(%id, "quiz deleted");
        Ok(())
    }

    async fn edit(&self, raw: Option<&str>) -> Result<(), TrainerError> {
        let id = validate_id(raw)?;
        let current = self.fetch(id).await?;

        let console = self.console.as_ref();
        let question =
            ask_prefilled(console, "Introduzca la pregunta: ", current.question()).await?;
        let answer = ask_prefilled(console, "Introduzca la respuesta: ", current.answer()).await?;

        let quiz = self
            .quizzes
            .update(id, QuizDraft::new(question, answer))
            .await?;
        tracing::info!(%id, "quiz edited");
        self.console.log(&format!(
            "Se ha cambiado el quiz {} por: {} {} {}",
            console.paint(&quiz.id().to_string(), Tone::Accent),
            quiz.question(),
            console.paint("=>", Tone::Accent),
            quiz.answer()
        ));
        Ok(())
    }

    async fn test(&self, raw: Option<&str>) -> Result<(), TrainerError> {
        let id = validate_id(raw)?;
        let quiz = self.fetch(id).await?;

        let reply = ask(self.console.as_ref(), &format!("{}? ", quiz.question())).await?;
        self.console.log("Su respuesta es:");
        if quiz_core::matches(&reply, quiz.answer()) {
            self.console.big("Correcta", Tone::Success);
        } else {
            self.console.big("Incorrecta", Tone::Failure);
        }
        Ok(())
    }

    async fn play(&mut self) -> Result<(), TrainerError> {
        let mut session = PlaySession::start(self.quizzes.as_ref()).await?;

        while let Some(id) = session.next_question(&mut self.rng) {
            let quiz = self.fetch(id).await?;
            let reply = ask(self.console.as_ref(), &format!("{}? ", quiz.question())).await?;

            match session.resolve(&reply, quiz.answer()) {
                Verdict::Correct { score } => {
                    self.console.log(&format!("CORRECTO - Lleva {score} aciertos"));
                }
                Verdict::Incorrect => self.console.log("INCORRECTO."),
            }
        }

        let summary = session.finish();
        tracing::info!(score = summary.score, asked = summary.asked, "play round finished");
        if summary.end == RoundEnd::Exhausted {
            self.console.log("No hay nada más que preguntar.");
        }
        self.console.log("Fin del examen. Aciertos:");
        self.console.big(&summary.score.to_string(), Tone::Accent);
        Ok(())
    }
}
