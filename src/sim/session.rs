//! Session orchestration
//!
//! The session owns all mutable simulation state and advances it one frame
//! at a time. While Playing the tick order is fixed: physics settles
//! positions, the spawner moves the world, collisions are tested against the
//! settled positions, and only then are passes scored. Phase transitions,
//! the ambient-cue timer, and persistence calls all live here.

use glam::Vec2;
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::Bounds;
use crate::consts::{CUE_DELAY_MAX, CUE_DELAY_MIN, VESSEL_X_FRACTION};
use crate::scores::ScoreStore;
use crate::tuning::WorldTuning;

use super::state::{
    FatalEvent, FatalReason, Obstacle, SessionEvent, SessionPhase, SessionState,
};
use super::{collision, intro, physics, score, spawner};

/// Input for a single tick
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Whether the thrust control is held
    pub thrusting: bool,
    /// Frame time delta in seconds
    pub dt: f32,
    /// Current viewport dimensions (width, height)
    pub viewport: Vec2,
}

/// Read-only per-tick projection for renderers and HUDs
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub vessel_y: f32,
    pub payload_y: f32,
    pub fuel_percent: f32,
    pub score: u32,
    pub high_score: u32,
    pub tether_visible: bool,
    pub obstacles: Vec<Obstacle>,
    pub fatal: Option<FatalEvent>,
}

/// Orchestrates one play session from the start command to game over.
pub struct Session {
    state: SessionState,
    tuning: WorldTuning,
    rng: Pcg32,
    store: Box<dyn ScoreStore>,
}

impl Session {
    /// Build a session in the Start phase. `seed` drives obstacle choice and
    /// cue scheduling; fix it for reproducible runs.
    pub fn new(tuning: WorldTuning, seed: u64, mut store: Box<dyn ScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            state: SessionState::new(tuning.max_fuel, high_score),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            store,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tuning(&self) -> &WorldTuning {
        &self.tuning
    }

    /// Begin the intro sequence from the start screen.
    pub fn start(&mut self) {
        self.reset();
    }

    /// Restart after game over. The same full reset as `start`.
    pub fn restart(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state.cancel_cue();
        let high_score = self.store.load();
        self.state = SessionState::new(self.tuning.max_fuel, high_score);
        self.state.phase = SessionPhase::Intro;
        info!("session reset, best on record {high_score}");
    }

    /// Advance the session by one frame. Start and GameOver ticks are no-ops;
    /// commands move the phase machine out of them.
    pub fn tick(&mut self, input: &TickInput) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let bounds = Bounds::from_viewport(input.viewport);

        match self.state.phase {
            SessionPhase::Start | SessionPhase::GameOver => {}
            SessionPhase::Intro => {
                if intro::advance(&mut self.state, &bounds) {
                    self.state.phase = SessionPhase::Playing;
                    self.schedule_cue();
                    info!("intro complete, playing");
                }
            }
            SessionPhase::Playing => self.play_tick(input, &bounds, &mut events),
        }
        events
    }

    fn play_tick(&mut self, input: &TickInput, bounds: &Bounds, events: &mut Vec<SessionEvent>) {
        // Anchor column tracks the viewport so a resize lands next tick
        self.state.vessel.pos.x = bounds.width * VESSEL_X_FRACTION;

        physics::integrate(
            &mut self.state.vessel,
            input.thrusting,
            input.dt,
            bounds,
            &self.tuning,
        );
        self.state.payload.follow(&self.state.vessel, bounds);

        spawner::update(&mut self.state, input.dt, bounds, &self.tuning, &mut self.rng);

        if let Some(reason) = collision::detect(
            &self.state.vessel,
            &self.state.payload,
            &self.state.obstacles,
            bounds,
        ) {
            self.game_over(reason, events);
            return;
        }

        score::update(&mut self.state, events);
        self.tick_cue(input.dt, events);
    }

    fn game_over(&mut self, reason: FatalReason, events: &mut Vec<SessionEvent>) {
        self.state.cancel_cue();

        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
            self.store.save(self.state.high_score);
        }

        let fatal = FatalEvent {
            reason,
            final_score: self.state.score,
            high_score: self.state.high_score,
        };
        self.state.fatal = Some(fatal);
        self.state.phase = SessionPhase::GameOver;
        events.push(SessionEvent::Fatal(fatal));
        info!(
            "game over ({reason:?}), score {} best {}",
            fatal.final_score, fatal.high_score
        );
    }

    fn schedule_cue(&mut self) {
        self.state.cue_timer = Some(self.rng.random_range(CUE_DELAY_MIN..CUE_DELAY_MAX));
    }

    fn tick_cue(&mut self, dt: f32, events: &mut Vec<SessionEvent>) {
        if let Some(remaining) = self.state.cue_timer {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                events.push(SessionEvent::AmbientCue);
                self.schedule_cue();
            } else {
                self.state.cue_timer = Some(remaining);
            }
        }
    }

    /// Current state projected for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        Snapshot {
            phase: state.phase,
            vessel_y: state.vessel.pos.y,
            payload_y: state.payload.pos.y,
            fuel_percent: state.vessel.fuel / self.tuning.max_fuel * 100.0,
            score: state.score,
            high_score: state.high_score,
            tether_visible: state.tether_visible,
            obstacles: state.obstacles.clone(),
            fatal: state.fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::InMemoryScores;
    use crate::sim::state::ObstacleKind;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
    const DT: f32 = 1.0 / 60.0;

    fn input(thrusting: bool) -> TickInput {
        TickInput {
            thrusting,
            dt: DT,
            viewport: VIEWPORT,
        }
    }

    fn new_session() -> Session {
        Session::new(
            WorldTuning::default(),
            7,
            Box::new(InMemoryScores::new()),
        )
    }

    /// Drive the session through the intro into Playing.
    fn playing_session() -> Session {
        let mut session = new_session();
        session.start();
        for _ in 0..1000 {
            session.tick(&input(false));
            if session.state.phase == SessionPhase::Playing {
                return session;
            }
        }
        panic!("intro never completed");
    }

    /// Park an obstacle on top of the payload to force a fatal tick.
    fn force_fatal(session: &mut Session) -> Vec<SessionEvent> {
        let bounds = Bounds::from_viewport(VIEWPORT);
        let id = session.state.next_obstacle_id();
        session.state.obstacles.push(Obstacle {
            id,
            x: session.state.payload.pos.x - 100.0,
            width: 200.0,
            height: bounds.height,
            kind: ObstacleKind::Pylon,
            passed: false,
        });
        session.tick(&input(false))
    }

    #[test]
    fn test_ticks_before_start_are_no_ops() {
        let mut session = new_session();
        let events = session.tick(&input(true));
        assert!(events.is_empty());
        assert_eq!(session.state.phase, SessionPhase::Start);
    }

    #[test]
    fn test_start_runs_intro_then_playing() {
        let session = playing_session();
        assert_eq!(session.state.phase, SessionPhase::Playing);
        assert!(session.state.cue_timer.is_some());
        assert!(session.state.tether_visible);
    }

    #[test]
    fn test_cue_scheduled_within_window() {
        let session = playing_session();
        let remaining = session.state.cue_timer.unwrap();
        assert!((CUE_DELAY_MIN..CUE_DELAY_MAX).contains(&remaining));
    }

    #[test]
    fn test_cue_fires_and_reschedules() {
        let mut session = playing_session();
        session.state.cue_timer = Some(DT / 2.0);
        let events = session.tick(&input(true));
        assert!(events.contains(&SessionEvent::AmbientCue));
        let remaining = session.state.cue_timer.unwrap();
        assert!((CUE_DELAY_MIN..CUE_DELAY_MAX).contains(&remaining));
    }

    #[test]
    fn test_fatal_emits_exactly_one_event_and_freezes() {
        let mut session = playing_session();
        let events = force_fatal(&mut session);
        assert_eq!(events.len(), 1);
        let SessionEvent::Fatal(fatal) = events[0] else {
            panic!("expected fatal, got {:?}", events[0]);
        };
        assert_eq!(fatal.reason, FatalReason::Payload);
        assert_eq!(session.state.phase, SessionPhase::GameOver);
        assert!(session.state.cue_timer.is_none());

        // Post-game-over ticks change nothing and re-fire nothing
        let frozen = session.state.clone();
        for _ in 0..10 {
            assert!(session.tick(&input(true)).is_empty());
        }
        assert_eq!(session.state.phase, frozen.phase);
        assert_eq!(session.state.score, frozen.score);
        assert_eq!(session.state.obstacles.len(), frozen.obstacles.len());
        assert_eq!(session.state.vessel.fuel, frozen.vessel.fuel);
    }

    #[test]
    fn test_restart_resets_state_and_keeps_high_score() {
        let mut session = playing_session();
        session.state.score = 5;
        force_fatal(&mut session);
        assert_eq!(session.state.high_score, 5);

        session.restart();
        assert_eq!(session.state.phase, SessionPhase::Intro);
        assert_eq!(session.state.score, 0);
        assert!(session.state.obstacles.is_empty());
        assert_eq!(session.state.vessel.fuel, session.tuning.max_fuel);
        assert!(session.state.fatal.is_none());
        // Best score survived the reset via the store
        assert_eq!(session.state.high_score, 5);
    }

    #[test]
    fn test_lower_score_does_not_overwrite_high_score() {
        let mut session = playing_session();
        session.state.score = 5;
        force_fatal(&mut session);

        session.restart();
        for _ in 0..1000 {
            session.tick(&input(false));
            if session.state.phase == SessionPhase::Playing {
                break;
            }
        }
        assert_eq!(session.state.phase, SessionPhase::Playing);
        session.state.score = 2;
        let events = force_fatal(&mut session);
        let SessionEvent::Fatal(fatal) = events[0] else {
            panic!("expected fatal");
        };
        assert_eq!(fatal.final_score, 2);
        assert_eq!(fatal.high_score, 5);
    }

    #[test]
    fn test_fuel_exhaustion_ends_in_a_tangle() {
        // Never thrust: the vessel falls onto the grounded payload and the
        // tether tangles before the hull reaches the ground plane.
        let mut session = playing_session();
        let mut last = Vec::new();
        for _ in 0..3000 {
            last = session.tick(&input(false));
            if session.state.phase == SessionPhase::GameOver {
                break;
            }
        }
        let SessionEvent::Fatal(fatal) = *last.last().expect("run should end") else {
            panic!("expected fatal");
        };
        assert_eq!(fatal.reason, FatalReason::Both);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = playing_session();
        session.state.score = 3;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, SessionPhase::Playing);
        assert_eq!(snapshot.score, 3);
        assert_eq!(snapshot.fuel_percent, 100.0);
        assert!(snapshot.fatal.is_none());
    }

    #[test]
    fn test_resize_moves_derived_bounds_next_tick() {
        let mut session = playing_session();
        let wide = TickInput {
            thrusting: false,
            dt: DT,
            viewport: Vec2::new(1920.0, 1080.0),
        };
        session.tick(&wide);
        assert_eq!(session.state.vessel.pos.x, 1920.0 * 0.15);
    }
}
