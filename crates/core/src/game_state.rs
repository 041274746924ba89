//! Game state module - the simulation core
//!
//! This module ties together the entities, the pellet scatter and the phase
//! machine. It handles input commands, the fixed-step tick (movement, pickups,
//! pursuit, collision, win/loss resolution) and session restarts.

use glam::Vec2;

use crate::config::{ConfigError, GameConfig};
use crate::entities::{circles_overlap, Field, Ghost, Pellet, Player};
use crate::rng::PelletScatter;
use crate::snapshot::{CircleSnapshot, GameSnapshot};
use crate::types::{Command, Outcome, Phase};

/// One play-through: the entities plus score and game-over flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub player: Player,
    pub pellets: Vec<Pellet>,
    pub ghosts: Vec<Ghost>,
    pub score: u32,
    /// One-way within a session; the phase carries the outcome.
    pub game_over: bool,
}

impl Session {
    fn new(config: &GameConfig, field: &Field, scatter: &mut PelletScatter) -> Self {
        let player = Player::new(
            config.player_spawn(),
            config.player_base_speed,
            config.player_radius,
        );
        let pellets = scatter.scatter(field, config.pellet_radius, config.pellet_count);
        let ghosts = config
            .ghost_spawns
            .iter()
            .map(|&pos| Ghost::new(pos, config.ghost_speed, config.ghost_radius))
            .collect();

        Self {
            player,
            pellets,
            ghosts,
            score: 0,
            game_over: false,
        }
    }
}

/// What a single `tick` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// False when the phase was not `Playing` and nothing moved.
    pub advanced: bool,
    pub pellets_collected: u32,
    /// Set on the tick that ended the session.
    pub ended: Option<Outcome>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    field: Field,
    scatter: PelletScatter,
    phase: Phase,
    session: Session,
    /// Monotonic session id (1 for the first session, +1 per restart).
    session_id: u32,
}

impl GameState {
    /// Create a game with the default tuning and the given pellet seed.
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Create a game from a custom config, rejecting invalid values up front.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// A game already in `Playing` with an exact layout.
    ///
    /// Ghosts get the default speed and radius. The player is clamped into the
    /// field like every position it takes during play.
    pub fn staged(seed: u64, player: Vec2, pellets: &[Vec2], ghosts: &[Vec2]) -> Self {
        let mut gs = Self::new(seed);
        let config = &gs.config;
        let session = &mut gs.session;
        session.player.pos = gs.field.clamp_circle(player, config.player_radius);
        session.pellets = pellets.iter().copied().map(Pellet::new).collect();
        session.ghosts = ghosts
            .iter()
            .map(|&pos| Ghost::new(pos, config.ghost_speed, config.ghost_radius))
            .collect();
        gs.phase = Phase::Playing;
        gs
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let field = Field::new(config.field_width, config.field_height);
        let mut scatter = PelletScatter::new(seed);
        let session = Session::new(&config, &field, &mut scatter);

        Self {
            config,
            field,
            scatter,
            phase: Phase::StartMenu,
            session,
            session_id: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    pub fn is_terminated(&self) -> bool {
        self.phase.is_terminated()
    }

    pub fn game_over(&self) -> bool {
        self.session.game_over
    }

    /// The session ended as a win. A loss on the tick that emptied the
    /// pellet set is still a loss.
    pub fn is_win(&self) -> bool {
        self.outcome() == Some(Outcome::Win)
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.scatter.seed()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn player(&self) -> &Player {
        &self.session.player
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.session.pellets
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.session.ghosts
    }

    /// Apply one input command.
    ///
    /// Returns true if the command changed anything. Commands that do not
    /// belong to the current phase are ignored.
    pub fn handle_input(&mut self, command: Command) -> bool {
        match (self.phase, command) {
            (Phase::Terminated, _) => false,
            (_, Command::Quit) => {
                log::info!(
                    "quit from {} (session {}, score {})",
                    self.phase.as_str(),
                    self.session_id,
                    self.session.score
                );
                self.phase = Phase::Terminated;
                true
            }
            (Phase::StartMenu, Command::Start) => {
                log::info!("session {} started (seed {})", self.session_id, self.seed());
                self.phase = Phase::Playing;
                true
            }
            (Phase::Playing, Command::Direction(dir)) => {
                self.session.player.direction = Some(dir);
                true
            }
            (Phase::Ended(_), Command::Restart) => {
                self.restart();
                true
            }
            _ => false,
        }
    }

    /// Replace the session wholesale and resume play.
    fn restart(&mut self) {
        self.session = Session::new(&self.config, &self.field, &mut self.scatter);
        self.session_id = self.session_id.wrapping_add(1);
        self.phase = Phase::Playing;
        log::info!("session {} started after restart", self.session_id);
    }

    /// Advance the simulation by one fixed step.
    ///
    /// Order within a tick: player movement, pellet pickups, ghost pursuit,
    /// ghost collision, then the win check. A ghost collision ends the session
    /// as a loss even if the last pellet was collected on the same tick.
    pub fn tick(&mut self) -> TickSummary {
        if !self.phase.is_playing() {
            return TickSummary::default();
        }

        let session = &mut self.session;
        session.player.update_position(&self.field);

        let player_pos = session.player.pos;
        let player_radius = session.player.radius;
        let pellet_radius = self.config.pellet_radius;

        let before = session.pellets.len();
        session
            .pellets
            .retain(|p| !circles_overlap(player_pos, player_radius, p.pos(), pellet_radius));
        let collected = (before - session.pellets.len()) as u32;

        if collected > 0 {
            session.score = session.score.saturating_add(collected);
            session.player.speed = session
                .player
                .speed
                .saturating_add(collected.saturating_mul(self.config.player_speed_step));
            log::debug!(
                "collected {} pellet(s): score {}, speed {}, {} left",
                collected,
                session.score,
                session.player.speed,
                session.pellets.len()
            );
        }

        for ghost in &mut session.ghosts {
            ghost.move_toward(player_pos);
        }

        let caught = session
            .ghosts
            .iter()
            .any(|g| circles_overlap(player_pos, player_radius, g.pos, g.radius));

        let ended = if caught {
            Some(Outcome::Loss)
        } else if session.pellets.is_empty() {
            Some(Outcome::Win)
        } else {
            None
        };

        if let Some(outcome) = ended {
            session.game_over = true;
            self.phase = Phase::Ended(outcome);
            log::info!(
                "session {} ended: {} with score {}",
                self.session_id,
                outcome.as_str(),
                session.score
            );
        }

        TickSummary {
            advanced: true,
            pellets_collected: collected,
            ended,
        }
    }

    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let session = &self.session;
        out.phase = self.phase;
        out.field_width = self.field.width;
        out.field_height = self.field.height;
        out.player = CircleSnapshot {
            pos: session.player.pos,
            radius: session.player.radius,
        };
        out.player_direction = session.player.direction;
        out.player_speed = session.player.speed;
        out.pellet_radius = self.config.pellet_radius;
        out.pellets.clear();
        out.pellets.extend(session.pellets.iter().map(Pellet::pos));
        out.pellets_total = self.config.pellet_count;
        out.ghosts.clear();
        out.ghosts.extend(session.ghosts.iter().map(|g| CircleSnapshot {
            pos: g.pos,
            radius: g.radius,
        }));
        out.score = session.score;
        out.session_id = self.session_id;
        out.seed = self.scatter.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
