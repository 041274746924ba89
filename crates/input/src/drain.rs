//! Per-frame event draining.
//!
//! The driver applies every event that arrived since the last frame before it
//! ticks, so draining never blocks: it polls with a zero timeout until the
//! terminal has nothing more to report or the per-frame cap is reached.
//! Anything past the cap stays queued for the next frame.

use std::time::Duration;

use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key;
use crate::types::{Command, Phase};

/// Upper bound on terminal events consumed in one frame.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// Commands mapped from one frame of terminal events, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InputBatch {
    commands: ArrayVec<Command, MAX_EVENTS_PER_FRAME>,
    resized: bool,
}

impl InputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.resized = false;
    }

    /// Record one terminal event.
    ///
    /// Only key presses produce commands; releases and auto-repeats are
    /// dropped. Returns false when the batch is full and the command (if any)
    /// was not recorded.
    pub fn push_event(&mut self, event: &Event, phase: Phase) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = map_key(*key, phase) {
                    return self.push_command(command);
                }
            }
            Event::Resize(..) => self.resized = true,
            _ => {}
        }
        true
    }

    /// Record a command directly, bypassing key mapping.
    pub fn push_command(&mut self, command: Command) -> bool {
        self.commands.try_push(command).is_ok()
    }

    pub fn mark_resized(&mut self) {
        self.resized = true;
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The terminal was resized since the last frame.
    pub fn resized(&self) -> bool {
        self.resized
    }

    pub fn is_full(&self) -> bool {
        self.commands.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.resized
    }
}

/// Non-blocking reader of pending terminal events.
#[derive(Debug, Default)]
pub struct EventDrain;

impl EventDrain {
    pub fn new() -> Self {
        Self
    }

    /// Append every pending event to `out` until the terminal has nothing more
    /// or `out` is full.
    ///
    /// `phase` is the phase at the start of the frame; see [`map_key`] for why
    /// that is enough.
    pub fn drain_into(&mut self, phase: Phase, out: &mut InputBatch) -> Result<()> {
        while !out.is_full() {
            if !event::poll(Duration::ZERO).context("polling terminal events")? {
                break;
            }
            let ev = event::read().context("reading terminal event")?;
            out.push_event(&ev, phase);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn key_with_kind(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn keeps_arrival_order() {
        let mut batch = InputBatch::new();
        batch.push_event(&key(KeyCode::Enter), Phase::StartMenu);
        batch.push_event(&key(KeyCode::Char('d')), Phase::StartMenu);
        batch.push_event(&key(KeyCode::Up), Phase::StartMenu);
        assert_eq!(
            batch.commands(),
            &[
                Command::Start,
                Command::Direction(Direction::Right),
                Command::Direction(Direction::Up),
            ]
        );
    }

    #[test]
    fn ignores_release_and_repeat() {
        let mut batch = InputBatch::new();
        batch.push_event(&key_with_kind(KeyCode::Left, KeyEventKind::Release), Phase::Playing);
        batch.push_event(&key_with_kind(KeyCode::Left, KeyEventKind::Repeat), Phase::Playing);
        assert!(batch.is_empty());
    }

    #[test]
    fn records_resize_without_command() {
        let mut batch = InputBatch::new();
        batch.push_event(&Event::Resize(120, 40), Phase::Playing);
        assert!(batch.resized());
        assert!(batch.commands().is_empty());

        batch.clear();
        assert!(!batch.resized());
    }

    #[test]
    fn caps_commands_per_frame() {
        let mut batch = InputBatch::new();
        for _ in 0..MAX_EVENTS_PER_FRAME {
            assert!(batch.push_event(&key(KeyCode::Right), Phase::Playing));
        }
        assert!(batch.is_full());
        assert!(!batch.push_event(&key(KeyCode::Right), Phase::Playing));
        assert!(!batch.push_command(Command::Quit));
        assert_eq!(batch.commands().len(), MAX_EVENTS_PER_FRAME);
    }
}
