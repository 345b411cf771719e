//! Interpreter session: transcript, input buffer, dispatch, boot sequence.

use std::time::{Duration, Instant};

use folio_theme::ThemeName;

use crate::clock::Clock;
use crate::command::Command;
use crate::content;
use crate::figlet;

/// Kind tag on a transcript entry, used by the rendering surface to pick
/// a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The echoed input line itself.
    Command,
    /// Ordinary command output.
    Output,
    /// A negative-path message (unknown command, usage, unknown theme).
    Error,
    /// A positive confirmation.
    Success,
    /// Figlet output, rendered in a monospace block.
    AsciiArt,
}

/// One immutable line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
    pub kind: EntryKind,
}

impl TranscriptEntry {
    pub fn new(text: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// An effect the interpreter asks the host to perform. The core never
/// opens windows or mutates global configuration itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Open a URL in a new browser context.
    OpenUrl(String),
    /// Switch the process-wide theme.
    SetTheme(ThemeName),
}

/// What one `submit` call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Entries appended to the transcript, in order.
    pub appended: Vec<TranscriptEntry>,
    /// Whether the transcript was emptied (`clear`).
    pub cleared: bool,
    /// Effects the host should perform.
    pub side_effects: Vec<SideEffect>,
}

/// Delay before a pending boot sequence replaces the transcript.
pub const DEFAULT_BOOT_DELAY: Duration = Duration::from_millis(500);

/// A scheduled one-shot transcript replacement. Owned by the session, so
/// tearing the session down can never leave a timer behind.
#[derive(Debug)]
struct BootSequence {
    lines: Vec<String>,
    fires_at: Instant,
}

/// An interactive terminal session.
///
/// Owns the transcript (append-only except wholesale clears), the
/// in-progress input buffer, and the help-panel flag. All dispatch is
/// synchronous; the only deferred behavior is the boot sequence, fired by
/// the host through `poll_boot`.
pub struct Session {
    transcript: Vec<TranscriptEntry>,
    buffer: String,
    help_visible: bool,
    clock: Box<dyn Clock>,
    boot: Option<BootSequence>,
}

impl Session {
    /// Create an empty session.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            transcript: Vec::new(),
            buffer: String::new(),
            help_visible: false,
            clock,
            boot: None,
        }
    }

    /// Create a session with a pending boot sequence: after `delay`, the
    /// transcript is replaced by `lines` (each classified `Error` when its
    /// text starts with "Error", `Output` otherwise).
    pub fn with_boot(clock: Box<dyn Clock>, lines: Vec<String>, delay: Duration) -> Self {
        let mut session = Self::new(clock);
        if !lines.is_empty() {
            session.boot = Some(BootSequence {
                lines,
                fires_at: Instant::now() + delay,
            });
        }
        session
    }

    /// Read-only view of the transcript.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Whether the help panel is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Hide the help panel.
    pub fn dismiss_help(&mut self) {
        self.help_visible = false;
    }

    /// External wholesale reset (the surface's clear button).
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    // -- Input buffer --

    /// Current in-progress input.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append a typed character to the buffer.
    pub fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Append typed text to the buffer.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Delete the last buffered character, if any.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Submit the current buffer contents.
    pub fn submit_buffer(&mut self) -> SubmitOutcome {
        let line = self.buffer.clone();
        self.submit(&line)
    }

    // -- Boot sequence --

    /// Whether a boot sequence is still pending.
    pub fn boot_pending(&self) -> bool {
        self.boot.is_some()
    }

    /// Discard a pending boot sequence.
    pub fn cancel_boot(&mut self) {
        self.boot = None;
    }

    /// Fire the boot sequence if its deadline has passed. Returns `true`
    /// when the transcript was replaced; firing is one-shot.
    pub fn poll_boot(&mut self, now: Instant) -> bool {
        let due = self.boot.as_ref().is_some_and(|b| now >= b.fires_at);
        if !due {
            return false;
        }
        if let Some(boot) = self.boot.take() {
            log::debug!("boot sequence firing with {} lines", boot.lines.len());
            self.transcript = boot.lines.into_iter().map(classify_boot_line).collect();
            return true;
        }
        false
    }

    // -- Dispatch --

    /// Interpret one line of input.
    ///
    /// A blank line is a no-op: nothing is appended and the buffer is left
    /// alone. Otherwise the line is echoed as a `Command` entry, dispatched,
    /// and the buffer is reset. This never fails; every negative path is an
    /// `Error`-kind entry.
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        if line.trim().is_empty() {
            return SubmitOutcome::default();
        }
        self.buffer.clear();

        let command = Command::parse(line);
        log::debug!("dispatching {command:?}");

        if command == Command::Clear {
            self.transcript.clear();
            return SubmitOutcome {
                appended: Vec::new(),
                cleared: true,
                side_effects: Vec::new(),
            };
        }

        let mut appended = vec![TranscriptEntry::new(line, EntryKind::Command)];
        let mut side_effects = Vec::new();
        self.respond(command, &mut appended, &mut side_effects);

        self.transcript.extend(appended.iter().cloned());
        SubmitOutcome {
            appended,
            cleared: false,
            side_effects,
        }
    }

    /// Produce the result entries (and requested effects) for a command.
    fn respond(
        &mut self,
        command: Command,
        out: &mut Vec<TranscriptEntry>,
        effects: &mut Vec<SideEffect>,
    ) {
        let output = |text: &str| TranscriptEntry::new(text, EntryKind::Output);

        match command {
            Command::Help => {
                self.help_visible = true;
                out.push(output(content::HELP));
            },
            Command::About => out.push(output(content::ABOUT)),
            Command::Skills => out.push(output(content::SKILLS)),
            Command::Projects => out.push(output(content::PROJECTS_HINT)),
            Command::ProjectList => {
                out.push(output("Available Projects:"));
                for (i, project) in content::PROJECTS.iter().enumerate() {
                    out.push(output(&format!("{}. {}", i + 1, project.title)));
                }
                out.push(output("Use `project info <number>` to get more details."));
            },
            Command::ProjectInfo(n) => {
                // parse() only constructs in-catalog numbers.
                if let Some(project) = content::project(n) {
                    for line in project.info_lines() {
                        out.push(TranscriptEntry::new(line, EntryKind::Output));
                    }
                }
            },
            Command::Contact => out.push(output(content::CONTACT)),
            Command::Ls => out.push(output(content::FILE_LISTING)),
            Command::Date => {
                let now = self.clock.now();
                out.push(output(&format!(
                    "Current date: {}",
                    self.clock.format(now)
                )));
            },
            Command::Whoami => out.push(output(content::WHOAMI)),
            Command::Github => {
                out.push(output("Opening GitHub profile..."));
                effects.push(SideEffect::OpenUrl(content::GITHUB_URL.to_string()));
            },
            Command::ThemeList => {
                out.push(output(&format!(
                    "Available themes: {}\nUsage: theme <theme-name>",
                    theme_names()
                )));
            },
            Command::Hello => {
                out.push(TranscriptEntry::new(content::HELLO, EntryKind::Success));
            },
            Command::EchoUsage => out.push(output("Usage: echo <message>")),
            Command::Echo(message) => out.push(output(&message)),
            Command::SetTheme(name) => match name.parse::<ThemeName>() {
                Ok(theme) => {
                    out.push(TranscriptEntry::new(
                        format!("Theme changed to {theme}"),
                        EntryKind::Success,
                    ));
                    effects.push(SideEffect::SetTheme(theme));
                },
                Err(_) => out.push(TranscriptEntry::new(
                    format!("Unknown theme: {name}. Available themes: {}", theme_names()),
                    EntryKind::Error,
                )),
            },
            Command::Figlet(text) => {
                out.push(TranscriptEntry::new(
                    figlet::render(&text),
                    EntryKind::AsciiArt,
                ));
            },
            Command::FigletUsage => {
                out.push(TranscriptEntry::new(
                    "Usage: figlet <text>",
                    EntryKind::Error,
                ));
            },
            Command::Unknown(original) => {
                out.push(TranscriptEntry::new(
                    format!("Command not found: {original}. Type 'help' for available commands."),
                    EntryKind::Error,
                ));
            },
            // Handled before respond().
            Command::Clear => {},
        }
    }
}

/// Comma-separated list of the built-in theme names.
fn theme_names() -> String {
    let names: Vec<&str> = ThemeName::ALL.iter().map(|n| n.as_str()).collect();
    names.join(", ")
}

/// Boot lines starting with "Error" render as errors.
fn classify_boot_line(line: String) -> TranscriptEntry {
    let kind = if line.starts_with("Error") {
        EntryKind::Error
    } else {
        EntryKind::Output
    };
    TranscriptEntry { text: line, kind }
}
