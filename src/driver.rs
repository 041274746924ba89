//! Fixed-rate frame loop.
//!
//! Each frame runs the same steps in the same order:
//!
//! 1. collect every command that arrived since the previous frame
//! 2. apply them to the game in arrival order
//! 3. stop if the game was terminated
//! 4. advance the simulation one step
//! 5. present a snapshot
//! 6. wait for the next frame deadline
//!
//! The loop talks to the outside world only through [`CommandSource`],
//! [`FrameSink`] and [`FramePacer`], so tests drive it with scripted fakes.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameSnapshot, GameState};
use crate::input::InputBatch;
use crate::types::{Command, Outcome, Phase};

/// Supplies one frame of commands.
pub trait CommandSource {
    /// Append the commands that arrived since the last call to `out`.
    ///
    /// `phase` is the phase at the start of the frame. `out` is cleared by the
    /// caller.
    fn poll_frame(&mut self, phase: Phase, out: &mut InputBatch) -> Result<()>;
}

/// Receives one snapshot per frame.
pub trait FrameSink {
    /// `resized` is set when the source reported a display size change this
    /// frame.
    fn present(&mut self, snap: &GameSnapshot, resized: bool) -> Result<()>;
}

/// Decides when the next frame starts.
pub trait FramePacer {
    fn wait_next_frame(&mut self);
}

/// Sleeps until fixed deadlines `1/hz` apart.
///
/// Deadlines advance by exactly one interval so the average rate holds even
/// when individual sleeps overshoot. A frame that finishes after its deadline
/// does not trigger catch-up frames; the schedule restarts from now.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    interval: Duration,
    next: Instant,
}

impl FixedRatePacer {
    pub fn new(hz: u32) -> Self {
        let interval = Duration::from_secs(1) / hz.max(1);
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FramePacer for FixedRatePacer {
    fn wait_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.interval;
        } else {
            self.next = now + self.interval;
        }
    }
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented.
    pub frames: u64,
    /// Sessions started, from the menu or by restarting.
    pub sessions: u32,
    /// Outcome of the most recent session that ended.
    pub last_outcome: Option<Outcome>,
    /// Score when the loop stopped.
    pub final_score: u32,
}

/// Run frames until the game is terminated.
///
/// Errors from the source or the sink stop the loop and are returned as is.
pub fn run_loop<C, S, P>(
    state: &mut GameState,
    source: &mut C,
    sink: &mut S,
    pacer: &mut P,
) -> Result<RunSummary>
where
    C: CommandSource + ?Sized,
    S: FrameSink + ?Sized,
    P: FramePacer + ?Sized,
{
    let mut batch = InputBatch::new();
    let mut snap = GameSnapshot::default();
    let mut summary = RunSummary::default();

    log::info!("frame loop starting in {}", state.phase().as_str());

    loop {
        batch.clear();
        source.poll_frame(state.phase(), &mut batch)?;

        for &command in batch.commands() {
            let applied = state.handle_input(command);
            if applied && matches!(command, Command::Start | Command::Restart) {
                summary.sessions += 1;
            }
        }

        if state.is_terminated() {
            break;
        }

        if let Some(outcome) = state.tick().ended {
            summary.last_outcome = Some(outcome);
        }

        state.snapshot_into(&mut snap);
        sink.present(&snap, batch.resized())?;
        summary.frames += 1;

        pacer.wait_next_frame();
    }

    summary.final_score = state.score();
    log::info!(
        "frame loop stopped after {} frames, {} session(s)",
        summary.frames,
        summary.sessions
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use std::collections::VecDeque;

    /// Plays back one command list per frame, then quits.
    struct Script(VecDeque<Vec<Command>>);

    impl CommandSource for Script {
        fn poll_frame(&mut self, _phase: Phase, out: &mut InputBatch) -> Result<()> {
            match self.0.pop_front() {
                Some(frame) => {
                    for command in frame {
                        out.push_command(command);
                    }
                }
                None => {
                    out.push_command(Command::Quit);
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        phases: Vec<Phase>,
        player_x: Vec<f32>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, snap: &GameSnapshot, _resized: bool) -> Result<()> {
            self.phases.push(snap.phase);
            self.player_x.push(snap.player.pos.x);
            Ok(())
        }
    }

    struct NoWait(u32);

    impl FramePacer for NoWait {
        fn wait_next_frame(&mut self) {
            self.0 += 1;
        }
    }

    fn script(frames: Vec<Vec<Command>>) -> Script {
        Script(frames.into())
    }

    #[test]
    fn quit_on_first_frame_presents_nothing() {
        let mut state = GameState::new(1);
        let mut sink = Recorder::default();
        let mut pacer = NoWait(0);
        let summary =
            run_loop(&mut state, &mut script(vec![]), &mut sink, &mut pacer).unwrap();

        assert_eq!(summary.frames, 0);
        assert_eq!(summary.sessions, 0);
        assert!(sink.phases.is_empty());
        assert_eq!(pacer.0, 0);
        assert!(state.is_terminated());
    }

    #[test]
    fn commands_apply_before_the_tick() {
        let mut state = GameState::new(1);
        let mut sink = Recorder::default();
        let frames = vec![
            vec![],
            vec![Command::Start, Command::Direction(Direction::Right)],
            vec![],
        ];
        let summary =
            run_loop(&mut state, &mut script(frames), &mut sink, &mut NoWait(0)).unwrap();

        assert_eq!(summary.frames, 3);
        assert_eq!(summary.sessions, 1);
        assert_eq!(
            sink.phases,
            vec![Phase::StartMenu, Phase::Playing, Phase::Playing]
        );
        assert_eq!(sink.player_x, vec![910.0, 915.0, 920.0]);
    }

    #[test]
    fn quit_mid_batch_drops_later_commands() {
        let mut state = GameState::new(1);
        let mut sink = Recorder::default();
        let frames = vec![vec![Command::Start, Command::Quit, Command::Restart]];
        let summary =
            run_loop(&mut state, &mut script(frames), &mut sink, &mut NoWait(0)).unwrap();

        assert_eq!(summary.frames, 0);
        assert_eq!(summary.sessions, 1);
        assert!(state.is_terminated());
    }

    #[test]
    fn sink_error_stops_the_loop() {
        struct Broken;
        impl FrameSink for Broken {
            fn present(&mut self, _snap: &GameSnapshot, _resized: bool) -> Result<()> {
                anyhow::bail!("display gone")
            }
        }

        let mut state = GameState::new(1);
        let err = run_loop(
            &mut state,
            &mut script(vec![vec![]]),
            &mut Broken,
            &mut NoWait(0),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "display gone");
    }

    #[test]
    fn pacer_interval_matches_rate() {
        let pacer = FixedRatePacer::new(60);
        assert_eq!(pacer.interval(), Duration::from_secs(1) / 60);
        assert_eq!(FixedRatePacer::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn pacer_waits_roughly_one_interval() {
        let mut pacer = FixedRatePacer::new(200);
        let start = Instant::now();
        pacer.wait_next_frame();
        pacer.wait_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
