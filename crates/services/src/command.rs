/// A command line as typed at the trainer prompt.
///
/// Arguments that take an `<id>` keep it raw; validation happens inside the
/// command's pipeline so that its failure is reported like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
    Unknown(String),
}

impl Command {
    /// Split `line` on whitespace and match the first word, case-insensitively.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Self::Empty;
        };
        let id = words.next().map(str::to_owned);

        match name.to_lowercase().as_str() {
            "h" | "help" => Self::Help,
            "list" => Self::List,
            "show" => Self::Show(id),
            "add" => Self::Add,
            "delete" => Self::Delete(id),
            "edit" => Self::Edit(id),
            "test" => Self::Test(id),
            "p" | "play" => Self::Play,
            "credits" => Self::Credits,
            "q" | "quit" => Self::Quit,
            _ => Self::Unknown(name.to_owned()),
        }
    }

    /// Canonical name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Help => "help",
            Self::List => "list",
            Self::Show(_) => "show",
            Self::Add => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Test(_) => "test",
            Self::Play => "play",
            Self::Credits => "credits",
            Self::Quit => "quit",
            Self::Unknown(_) => "unknown",
        }
    }
}
