#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quiz_core::model::{Quiz, QuizDraft, QuizId};
use services::{Console, ConsoleError, Tone};
use storage::repository::{InMemoryRepository, QuizRepository, StorageError};

/// Everything a command did to the console, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Log(String),
    Error(String),
    Big(String, Tone),
    Prefill(String),
    Ask(String),
    Ready,
    Close,
}

type Responder = Box<dyn FnMut(&str) -> String + Send>;

/// Console double that replays canned input lines and records output.
#[derive(Default)]
pub struct ScriptedConsole {
    input: Mutex<VecDeque<String>>,
    responder: Mutex<Option<Responder>>,
    events: Mutex<Vec<Event>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Answer every prompt by calling `respond` with the prompt text.
    pub fn responding(respond: impl FnMut(&str) -> String + Send + 'static) -> Self {
        Self {
            responder: Mutex::new(Some(Box::new(respond))),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn logs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Log(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn asks(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Ask(prompt) => Some(prompt),
                _ => None,
            })
            .collect()
    }

    pub fn bigs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Big(token, _) => Some(token),
                _ => None,
            })
            .collect()
    }

    pub fn ready_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Ready))
            .count()
    }

    pub fn unread(&self) -> usize {
        self.input.lock().unwrap().len()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    fn log(&self, line: &str) {
        self.push(Event::Log(line.to_owned()));
    }

    fn error(&self, line: &str) {
        self.push(Event::Error(line.to_owned()));
    }

    fn big(&self, token: &str, tone: Tone) {
        self.push(Event::Big(token.to_owned(), tone));
    }

    fn prefill(&self, text: &str) {
        self.push(Event::Prefill(text.to_owned()));
    }

    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        self.push(Event::Ask(prompt.to_owned()));
        if let Some(respond) = self.responder.lock().unwrap().as_mut() {
            return Ok(respond(prompt));
        }
        self.input
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ConsoleError::Closed)
    }

    fn ready(&self) {
        self.push(Event::Ready);
    }

    fn close(&self) {
        self.push(Event::Close);
    }
}

/// Wraps an in-memory store and counts every call made to it.
#[derive(Default)]
pub struct CountingRepository {
    pub inner: InMemoryRepository,
    calls: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn read(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl QuizRepository for CountingRepository {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        self.read();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>, StorageError> {
        self.read();
        self.inner.find_by_id(id).await
    }

    async fn create(&self, draft: QuizDraft) -> Result<Quiz, StorageError> {
        self.write();
        self.inner.create(draft).await
    }

    async fn update(&self, id: QuizId, draft: QuizDraft) -> Result<Quiz, StorageError> {
        self.write();
        self.inner.update(id, draft).await
    }

    async fn delete_by_id(&self, id: QuizId) -> Result<(), StorageError> {
        self.write();
        self.inner.delete_by_id(id).await
    }

    async fn count(&self) -> Result<u64, StorageError> {
        self.read();
        self.inner.count().await
    }
}

/// A store whose backend is unreachable.
pub struct OfflineRepository;

fn offline() -> StorageError {
    StorageError::Connection("database is offline".into())
}

#[async_trait]
impl QuizRepository for OfflineRepository {
    async fn find_all(&self) -> Result<Vec<Quiz>, StorageError> {
        Err(offline())
    }

    async fn find_by_id(&self, _id: QuizId) -> Result<Option<Quiz>, StorageError> {
        Err(offline())
    }

    async fn create(&self, _draft: QuizDraft) -> Result<Quiz, StorageError> {
        Err(offline())
    }

    async fn update(&self, _id: QuizId, _draft: QuizDraft) -> Result<Quiz, StorageError> {
        Err(offline())
    }

    async fn delete_by_id(&self, _id: QuizId) -> Result<(), StorageError> {
        Err(offline())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Err(offline())
    }
}

/// Store pre-loaded with `pairs`, ids assigned 1..=n.
pub async fn store_with(pairs: &[(&str, &str)]) -> CountingRepository {
    let repo = CountingRepository::default();
    for (q, a) in pairs {
        repo.inner.create(QuizDraft::new(*q, *a)).await.unwrap();
    }
    repo
}
