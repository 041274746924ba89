//! Terminal implementations of the frame loop's I/O seams.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::driver::{CommandSource, FrameSink};
use crate::input::{EventDrain, InputBatch};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::Phase;

/// Reads pending crossterm events without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput {
    drain: EventDrain,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandSource for TerminalInput {
    fn poll_frame(&mut self, phase: Phase, out: &mut InputBatch) -> Result<()> {
        self.drain.drain_into(phase, out)
    }
}

/// Draws snapshots to the real terminal.
///
/// Owns the renderer so the terminal is restored when this is dropped, even
/// on an early return.
pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl TerminalFrontend {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl FrameSink for TerminalFrontend {
    fn present(&mut self, snap: &GameSnapshot, resized: bool) -> Result<()> {
        if resized {
            self.renderer.invalidate();
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.renderer.present(&mut self.fb)
    }
}
