//! Command grammar: a fixed set of literals plus three parametrized
//! prefixes.
//!
//! Classification is case-insensitive, but parametrized commands carry
//! their argument as typed (`echo FOO` prints `FOO`). Anything that fails
//! both the exact and prefix matches becomes `Unknown`, which dispatch
//! renders as an ordinary error entry.

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    ProjectList,
    /// `project info N` for the literal catalog numbers 1-3. Any other
    /// index fails the exact match and falls through to `Unknown`.
    ProjectInfo(u8),
    Contact,
    Ls,
    Date,
    Whoami,
    Github,
    /// Bare `theme`: list available themes.
    ThemeList,
    Hello,
    Clear,
    /// Bare `echo` with no message.
    EchoUsage,
    /// `echo <message>`, message as typed.
    Echo(String),
    /// `theme <name>`, name lowercased (validated at dispatch).
    SetTheme(String),
    /// `figlet <text>` with non-empty text, as typed.
    Figlet(String),
    /// `figlet ` prefix with whitespace-only text. Bare `figlet` has no
    /// exact match and falls through to `Unknown`.
    FigletUsage,
    /// Unrecognized input, kept as typed for the error message.
    Unknown(String),
}

impl Command {
    /// Classify one line of input.
    ///
    /// Exact literals are tried first, then the parametrized prefixes.
    /// The caller guarantees the line is not blank.
    pub fn parse(line: &str) -> Command {
        let lower = line.to_ascii_lowercase();
        match lower.as_str() {
            "help" => Command::Help,
            "about" => Command::About,
            "skills" => Command::Skills,
            "projects" => Command::Projects,
            "project list" => Command::ProjectList,
            "project info 1" => Command::ProjectInfo(1),
            "project info 2" => Command::ProjectInfo(2),
            "project info 3" => Command::ProjectInfo(3),
            "contact" => Command::Contact,
            "ls" => Command::Ls,
            "date" => Command::Date,
            "whoami" => Command::Whoami,
            "github" => Command::Github,
            "theme" => Command::ThemeList,
            "hello" => Command::Hello,
            "clear" => Command::Clear,
            "echo" => Command::EchoUsage,
            _ => Self::parse_prefixed(line, &lower),
        }
    }

    fn parse_prefixed(line: &str, lower: &str) -> Command {
        // Prefixes are ASCII, so byte slicing the as-typed line is safe.
        if lower.starts_with("figlet ") {
            let text = &line["figlet ".len()..];
            if text.trim().is_empty() {
                return Command::FigletUsage;
            }
            return Command::Figlet(text.to_string());
        }
        if lower.starts_with("echo ") {
            return Command::Echo(line["echo ".len()..].to_string());
        }
        if lower.starts_with("theme ") {
            return Command::SetTheme(lower["theme ".len()..].to_string());
        }
        Command::Unknown(line.to_string())
    }
}
