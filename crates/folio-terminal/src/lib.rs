//! Simulated terminal for FOLIO.
//!
//! The terminal is a closed-grammar interpreter: `Command::parse` classifies
//! one line of input against a fixed set of literals and parametrized
//! prefixes, and `Session::submit` dispatches it, appending entries to an
//! append-only transcript. Commands never fail; every negative path is an
//! ordinary `Error`-kind entry. Side effects (opening a URL, switching the
//! global theme) are returned as requests for the host to perform.

mod clock;
mod command;
pub mod content;
pub mod figlet;
mod session;

/// Injected wall-clock capability consumed by the `date` command.
pub use clock::Clock;
/// Deterministic clock for tests and replayable sessions.
pub use clock::FixedClock;
/// Calendar time produced by a `Clock`.
pub use clock::LocalTime;
/// A parsed command line.
pub use command::Command;
/// Delay before a boot sequence replaces the transcript.
pub use session::DEFAULT_BOOT_DELAY;
/// Kind tag on a transcript entry (command echo, output, error, ...).
pub use session::EntryKind;
/// An interactive terminal session owning transcript and input buffer.
pub use session::Session;
/// Effect the host is asked to perform on the interpreter's behalf.
pub use session::SideEffect;
/// Result of submitting one line.
pub use session::SubmitOutcome;
/// One immutable line of the transcript.
pub use session::TranscriptEntry;
