//! Prompter abstraction for asking the user about one word.
//!
//! The [`Prompter`] trait decouples the triage loop from the terminal. The
//! binary uses [`TerminalPrompter`]; tests use a scripted prompter that
//! answers from a queue without touching the terminal.

use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use thiserror::Error;
use tracing::debug;

use crate::core::types::Classification;

const LEGEND: &str = "[y] known   [n/space] unknown   [s] skip   [other] quit";

/// Why a prompt ended without a classification.
#[derive(Debug, Error)]
pub enum Termination {
    /// The user asked to stop (Esc, Ctrl+C).
    #[error("terminated")]
    Quit,
    /// The user pressed a key with no classification bound to it.
    #[error("terminated by key {0}")]
    UnmappedKey(String),
    /// Reading from or drawing to the terminal failed.
    #[error("terminal input failed")]
    Device(#[source] io::Error),
}

/// Abstraction over the interactive question "do you know this word?".
pub trait Prompter {
    /// Block until the user classifies `word` or ends the session.
    fn ask(&mut self, word: &str) -> Result<Classification, Termination>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, word: &str) -> Result<Classification, Termination> {
        (**self).ask(word)
    }
}

/// What a single key event means for the prompt in progress.
#[derive(Debug)]
pub enum KeyDecision {
    Answer(Classification),
    Terminate(Termination),
    /// Not a key press (release/repeat); keep waiting.
    Ignore,
}

/// Map a key event to a decision. Letters are matched case-insensitively.
pub fn decide_key(key: &KeyEvent) -> KeyDecision {
    if key.kind != KeyEventKind::Press {
        return KeyDecision::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyDecision::Terminate(Termination::Quit);
    }
    // Only plain or shifted keys classify.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return KeyDecision::Terminate(Termination::UnmappedKey(describe_chord(key)));
    }
    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'y' => KeyDecision::Answer(Classification::Known),
            'n' | ' ' => KeyDecision::Answer(Classification::Unknown),
            's' => KeyDecision::Answer(Classification::Skip),
            other => KeyDecision::Terminate(Termination::UnmappedKey(other.to_string())),
        },
        KeyCode::Esc => KeyDecision::Terminate(Termination::Quit),
        other => KeyDecision::Terminate(Termination::UnmappedKey(format!("{other:?}"))),
    }
}

fn describe_chord(key: &KeyEvent) -> String {
    let mut chord = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        chord.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        chord.push_str("alt+");
    }
    match key.code {
        KeyCode::Char(c) => chord.push(c.to_ascii_lowercase()),
        other => chord.push_str(&format!("{other:?}")),
    }
    chord
}

/// Prompter that draws each word centred on the alternate screen and reads
/// one key press.
///
/// Raw mode and the alternate screen are entered on the first `ask`, so runs
/// where every word is already classified never touch the terminal. The
/// terminal is restored when the prompter is dropped.
#[derive(Default)]
pub struct TerminalPrompter {
    session: Option<TerminalSession>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, word: &str) -> Result<Classification, Termination> {
        let mut session = match self.session.take() {
            Some(session) => session,
            None => TerminalSession::enter().map_err(Termination::Device)?,
        };
        let answer = session.ask(word);
        self.session = Some(session);
        answer
    }
}

struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        debug!("terminal session started");
        Ok(Self { out })
    }

    fn ask(&mut self, word: &str) -> Result<Classification, Termination> {
        loop {
            self.draw(word).map_err(Termination::Device)?;
            // Resize and focus events fall through to a redraw.
            if let Event::Key(key) = event::read().map_err(Termination::Device)? {
                match decide_key(&key) {
                    KeyDecision::Answer(classification) => return Ok(classification),
                    KeyDecision::Terminate(termination) => return Err(termination),
                    KeyDecision::Ignore => {}
                }
            }
        }
    }

    fn draw(&mut self, word: &str) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let row = rows / 2;
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(centred_column(cols, word), row),
            Print(word),
            MoveTo(centred_column(cols, LEGEND), row.saturating_add(2)),
            Print(LEGEND)
        )?;
        self.out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Column at which `text` starts when centred in `width` columns.
fn centred_column(width: u16, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    width.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn answer(key: KeyEvent) -> Option<Classification> {
        match decide_key(&key) {
            KeyDecision::Answer(classification) => Some(classification),
            _ => None,
        }
    }

    #[test]
    fn classifying_keys_ignore_case() {
        assert_eq!(answer(press(KeyCode::Char('y'))), Some(Classification::Known));
        assert_eq!(answer(press(KeyCode::Char('Y'))), Some(Classification::Known));
        assert_eq!(answer(press(KeyCode::Char('n'))), Some(Classification::Unknown));
        assert_eq!(answer(press(KeyCode::Char('N'))), Some(Classification::Unknown));
        assert_eq!(answer(press(KeyCode::Char(' '))), Some(Classification::Unknown));
        assert_eq!(answer(press(KeyCode::Char('s'))), Some(Classification::Skip));
        assert_eq!(answer(press(KeyCode::Char('S'))), Some(Classification::Skip));
    }

    #[test]
    fn other_keys_terminate() {
        assert!(matches!(
            decide_key(&press(KeyCode::Char('q'))),
            KeyDecision::Terminate(Termination::UnmappedKey(key)) if key == "q"
        ));
        assert!(matches!(
            decide_key(&press(KeyCode::Enter)),
            KeyDecision::Terminate(Termination::UnmappedKey(_))
        ));
        assert!(matches!(
            decide_key(&press(KeyCode::Esc)),
            KeyDecision::Terminate(Termination::Quit)
        ));
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            decide_key(&key),
            KeyDecision::Terminate(Termination::Quit)
        ));
    }

    #[test]
    fn control_and_alt_chords_terminate() {
        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert!(matches!(
            decide_key(&ctrl_y),
            KeyDecision::Terminate(Termination::UnmappedKey(key)) if key == "ctrl+y"
        ));
        let alt_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT);
        assert!(matches!(
            decide_key(&alt_s),
            KeyDecision::Terminate(Termination::UnmappedKey(key)) if key == "alt+s"
        ));
        let alt_space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT);
        assert!(matches!(
            decide_key(&alt_space),
            KeyDecision::Terminate(Termination::UnmappedKey(_))
        ));
    }

    #[test]
    fn shifted_letters_still_classify() {
        let shift_n = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT);
        assert_eq!(answer(shift_n), Some(Classification::Unknown));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('y'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(matches!(decide_key(&key), KeyDecision::Ignore));
    }

    #[test]
    fn centred_column_saturates_on_narrow_terminals() {
        assert_eq!(centred_column(80, "word"), 38);
        assert_eq!(centred_column(3, "longword"), 0);
        assert_eq!(centred_column(10, "école"), 2);
    }

    #[test]
    fn termination_messages() {
        assert_eq!(Termination::Quit.to_string(), "terminated");
        assert_eq!(
            Termination::UnmappedKey("q".to_string()).to_string(),
            "terminated by key q"
        );
    }
}
