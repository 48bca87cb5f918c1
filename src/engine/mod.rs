//! Spin state machine and the rotation-to-outcome mapping.
//!
//! ```text
//!        spin()               poll() after RESOLVE_DELAY
//! Idle ──────────► Spinning ──────────────────────────► Resolved
//!  ▲                  │ cancel_pending()                   │
//!  └──────────────────┴──────────────── dismiss() ◄────────┘
//! ```
//!
//! A spin snapshots the active options when it starts and resolves against
//! that snapshot, so edits made to the list mid-spin cannot move the pointer
//! onto a different slice.

mod random;
mod timer;

pub use random::{FULL_TURN, RandomSource, SeededRandom, ThreadRandom};
pub use timer::{Deferred, RESOLVE_DELAY};

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::options::{MIN_ACTIVE_TO_SPIN, OptionId, WheelOption};

/// Extra full turns added to every spin so the wheel always visibly moves.
pub const MIN_SPIN_DEGREES: u64 = 5 * FULL_TURN as u64;

/// Largest rotation accepted on restore. Leaves room for billions of spins.
const ROTATION_CEILING: u64 = u64::MAX / 2;

/// Why a spin request was refused. Neither case changes any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpinRejected {
    #[error("a spin is already in progress")]
    AlreadySpinning,
    #[error("need at least 2 active items to spin, have {active}")]
    NotEnoughActive { active: usize },
}

/// The option the pointer came to rest on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub id: OptionId,
    pub text: String,
    /// Position within the active snapshot (i.e. the slice index)
    pub slice: usize,
}

/// An in-flight spin.
#[derive(Debug, Clone)]
pub struct PendingSpin {
    pub from_angle: u64,
    pub target_angle: u64,
    snapshot: Vec<WheelOption>,
    timer: Deferred,
}

impl PendingSpin {
    /// Active options captured when the spin started.
    pub fn snapshot(&self) -> &[WheelOption] {
        &self.snapshot
    }

    pub fn timer(&self) -> &Deferred {
        &self.timer
    }
}

#[derive(Debug, Clone, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning(PendingSpin),
    Resolved(Winner),
}

/// What the caller needs to animate a freshly started spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTicket {
    pub from_angle: u64,
    pub target_angle: u64,
    pub due: Instant,
}

/// Owns the cumulative rotation and the spin lifecycle.
#[derive(Debug, Clone)]
pub struct SpinEngine {
    rotation: u64,
    phase: SpinPhase,
    delay: Duration,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinEngine {
    pub fn new() -> Self {
        Self::with_rotation(0)
    }

    /// Start from a previously saved cumulative rotation.
    ///
    /// Values too large to keep growing are folded to the same angle within
    /// one turn; the wheel looks identical.
    pub fn with_rotation(rotation: u64) -> Self {
        let rotation = if rotation > ROTATION_CEILING {
            warn!(rotation, "saved rotation out of range, folding to one turn");
            rotation % u64::from(FULL_TURN)
        } else {
            rotation
        };
        Self {
            rotation,
            phase: SpinPhase::Idle,
            delay: RESOLVE_DELAY,
        }
    }

    /// Cumulative rotation in degrees. Never decreases.
    pub fn rotation(&self) -> u64 {
        self.rotation
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    pub fn pending(&self) -> Option<&PendingSpin> {
        match &self.phase {
            SpinPhase::Spinning(pending) => Some(pending),
            _ => None,
        }
    }

    /// The resolved winner, only while not spinning.
    pub fn winner(&self) -> Option<&Winner> {
        match &self.phase {
            SpinPhase::Resolved(winner) => Some(winner),
            _ => None,
        }
    }

    /// Start a spin over `active`, which must be the currently enabled
    /// options in list order.
    ///
    /// Draws the random offset, advances the cumulative rotation and clears
    /// any previous winner, all before returning.
    pub fn spin(
        &mut self,
        active: Vec<WheelOption>,
        rng: &mut dyn RandomSource,
        now: Instant,
    ) -> Result<SpinTicket, SpinRejected> {
        if self.is_spinning() {
            debug!("engine:spin rejected, already spinning");
            return Err(SpinRejected::AlreadySpinning);
        }
        if active.len() < MIN_ACTIVE_TO_SPIN {
            debug!(active = active.len(), "engine:spin rejected, not enough active");
            return Err(SpinRejected::NotEnoughActive {
                active: active.len(),
            });
        }

        let offset = rng.offset() % FULL_TURN;
        let from_angle = self.rotation;
        let target_angle = target_angle(from_angle, offset);
        let timer = Deferred::schedule(now, self.delay);
        self.rotation = target_angle;

        info!(
            offset,
            from_angle,
            target_angle,
            active = active.len(),
            "engine:spin"
        );

        self.phase = SpinPhase::Spinning(PendingSpin {
            from_angle,
            target_angle,
            snapshot: active,
            timer,
        });

        Ok(SpinTicket {
            from_angle,
            target_angle,
            due: timer.due(),
        })
    }

    /// Fire the deferred resolution if it is due.
    ///
    /// Returns the winner on the call that resolves the spin, `None`
    /// otherwise.
    pub fn poll(&mut self, now: Instant) -> Option<&Winner> {
        let due = match &self.phase {
            SpinPhase::Spinning(pending) => pending.timer.is_due(now),
            _ => false,
        };
        if !due {
            return None;
        }

        let SpinPhase::Spinning(pending) = std::mem::take(&mut self.phase) else {
            return None;
        };
        let slice = winning_index(pending.target_angle, pending.snapshot.len());
        let option = &pending.snapshot[slice];
        info!(slice, text = %option.text, angle = pending.target_angle, "engine:resolved");
        self.phase = SpinPhase::Resolved(Winner {
            id: option.id,
            text: option.text.clone(),
            slice,
        });
        self.winner()
    }

    /// Clear the winner banner. Returns the winner that was showing.
    pub fn dismiss(&mut self) -> Option<Winner> {
        match std::mem::take(&mut self.phase) {
            SpinPhase::Resolved(winner) => Some(winner),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Drop an in-flight spin without resolving it.
    ///
    /// The rotation keeps its advanced value so the wheel never turns back.
    pub fn cancel_pending(&mut self) -> bool {
        match &self.phase {
            SpinPhase::Spinning(pending) => {
                info!(target_angle = pending.target_angle, "engine:cancelled");
                self.phase = SpinPhase::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Rotation after a spin that drew `offset`.
pub fn target_angle(previous: u64, offset: u32) -> u64 {
    previous + MIN_SPIN_DEGREES + u64::from(offset)
}

/// Index of the slice under the pointer once the wheel is at `angle`.
///
/// Slice 0 starts at 12 o'clock and slices run clockwise; the wheel turns
/// clockwise as `angle` grows, so the pointer reads the wheel at
/// `(360 - angle mod 360) mod 360`. The result is clamped to `[0, n - 1]`.
/// Returns 0 for an empty wheel.
pub fn winning_index(angle: u64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let turn = u64::from(FULL_TURN);
    let pointer = (turn - angle % turn) % turn;
    // floor(pointer / (360 / n)) without float rounding at slice boundaries
    let index = (pointer * n as u64 / turn) as usize;
    index.min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionList;
    use std::collections::VecDeque;

    /// Replays a fixed list of offsets.
    struct FixedOffsets(VecDeque<u32>);

    impl FixedOffsets {
        fn new(offsets: &[u32]) -> Self {
            Self(offsets.iter().copied().collect())
        }
    }

    impl RandomSource for FixedOffsets {
        fn offset(&mut self) -> u32 {
            self.0.pop_front().unwrap_or(0)
        }
    }

    fn active_of(texts: &[&str]) -> Vec<WheelOption> {
        let mut list = OptionList::new();
        for text in texts {
            list.add(text);
        }
        list.active()
    }

    fn spin_and_resolve(engine: &mut SpinEngine, active: Vec<WheelOption>, offset: u32) -> Winner {
        let now = Instant::now();
        engine
            .spin(active, &mut FixedOffsets::new(&[offset]), now)
            .unwrap();
        engine.poll(now + RESOLVE_DELAY).cloned().unwrap()
    }

    #[test]
    fn test_winning_index_in_range() {
        for n in 2..=40 {
            for angle in (0..2000u64).step_by(7) {
                let idx = winning_index(angle, n);
                assert!(idx < n, "angle {angle} n {n} gave {idx}");
            }
        }
    }

    #[test]
    fn test_winning_index_is_deterministic() {
        assert_eq!(winning_index(1937, 5), winning_index(1937, 5));
    }

    #[test]
    fn test_winning_index_pointer_at_zero_is_first_slice() {
        // 1800 mod 360 == 0: the wheel sits where it started and the
        // pointer is at the leading edge of slice 0
        assert_eq!(winning_index(1800, 2), 0);
        assert_eq!(winning_index(0, 6), 0);
    }

    #[test]
    fn test_winning_index_runs_counter_to_rotation() {
        // Turning 90 degrees clockwise brings the last quarter under the pointer
        assert_eq!(winning_index(90, 4), 3);
        assert_eq!(winning_index(1800 + 90, 4), 3);
        assert_eq!(winning_index(270, 4), 1);
        assert_eq!(winning_index(1, 2), 1);
        assert_eq!(winning_index(180, 2), 1);
        assert_eq!(winning_index(181, 2), 0);
    }

    #[test]
    fn test_winning_index_uniform_over_all_offsets() {
        for n in [2usize, 3, 4, 5, 6, 8, 9, 10, 12] {
            let mut counts = vec![0usize; n];
            for offset in 0..360u64 {
                counts[winning_index(1800 + offset, n)] += 1;
            }
            assert!(counts.iter().all(|c| *c == 360 / n), "n {n}: {counts:?}");
        }
    }

    #[test]
    fn test_winner_frequency_is_uniform() {
        let n = 7;
        let trials = 70_000;
        let mut rng = SeededRandom::new(42);
        let mut counts = vec![0usize; n];
        let mut angle = 0u64;
        for _ in 0..trials {
            angle = target_angle(angle, rng.offset());
            counts[winning_index(angle, n)] += 1;
        }
        let expected = trials as f64 / n as f64;
        for count in counts {
            assert!(
                (count as f64 - expected).abs() < expected * 0.05,
                "count {count} too far from {expected}"
            );
        }
    }

    #[test]
    fn test_spin_two_options_offset_zero() {
        let mut engine = SpinEngine::new();
        let winner = spin_and_resolve(&mut engine, active_of(&["A", "B"]), 0);
        assert_eq!(engine.rotation(), 1800);
        assert_eq!(winner.text, "A");
        assert_eq!(winner.slice, 0);
    }

    #[test]
    fn test_spin_two_options_small_offset_lands_on_second() {
        let mut engine = SpinEngine::new();
        let winner = spin_and_resolve(&mut engine, active_of(&["A", "B"]), 10);
        assert_eq!(engine.rotation(), 1810);
        assert_eq!(winner.text, "B");
    }

    #[test]
    fn test_rotation_strictly_increases() {
        let mut engine = SpinEngine::new();
        let mut last = engine.rotation();
        for offset in [0, 359, 0, 180, 1] {
            spin_and_resolve(&mut engine, active_of(&["A", "B", "C"]), offset);
            assert!(engine.rotation() > last);
            assert!(engine.rotation() >= last + MIN_SPIN_DEGREES);
            last = engine.rotation();
        }
    }

    #[test]
    fn test_spin_rejected_with_one_active() {
        let mut engine = SpinEngine::with_rotation(500);
        let err = engine
            .spin(active_of(&["A"]), &mut FixedOffsets::new(&[5]), Instant::now())
            .unwrap_err();
        assert_eq!(err, SpinRejected::NotEnoughActive { active: 1 });
        assert_eq!(engine.rotation(), 500);
        assert!(matches!(engine.phase(), SpinPhase::Idle));
    }

    #[test]
    fn test_spin_rejected_while_spinning() {
        let mut engine = SpinEngine::new();
        let now = Instant::now();
        engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[5]), now)
            .unwrap();
        let err = engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[9]), now)
            .unwrap_err();
        assert_eq!(err, SpinRejected::AlreadySpinning);
        assert_eq!(engine.rotation(), 1805);
    }

    #[test]
    fn test_no_winner_before_delay() {
        let mut engine = SpinEngine::new();
        let now = Instant::now();
        engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[5]), now)
            .unwrap();
        assert!(engine.poll(now + Duration::from_millis(2999)).is_none());
        assert!(engine.is_spinning());
        assert!(engine.winner().is_none());
        assert!(engine.poll(now + RESOLVE_DELAY).is_some());
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_poll_resolves_only_once() {
        let mut engine = SpinEngine::new();
        let now = Instant::now();
        engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[5]), now)
            .unwrap();
        assert!(engine.poll(now + RESOLVE_DELAY).is_some());
        assert!(engine.poll(now + RESOLVE_DELAY * 2).is_none());
        assert!(engine.winner().is_some());
    }

    #[test]
    fn test_resolves_against_snapshot() {
        let mut list = OptionList::new();
        for text in ["A", "B", "C", "D"] {
            list.add(text);
        }
        let mut engine = SpinEngine::new();
        let now = Instant::now();
        // 90 degrees over 4 slices lands on the last one
        engine
            .spin(list.active(), &mut FixedOffsets::new(&[90]), now)
            .unwrap();

        // Mutate the live list mid-spin
        list.toggle(0);
        list.delete(3);

        let winner = engine.poll(now + RESOLVE_DELAY).unwrap();
        assert_eq!(winner.text, "D");
        assert_eq!(winner.slice, 3);
    }

    #[test]
    fn test_new_spin_clears_winner() {
        let mut engine = SpinEngine::new();
        spin_and_resolve(&mut engine, active_of(&["A", "B"]), 0);
        assert!(engine.winner().is_some());
        engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[0]), Instant::now())
            .unwrap();
        assert!(engine.winner().is_none());
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut engine = SpinEngine::new();
        spin_and_resolve(&mut engine, active_of(&["A", "B"]), 0);
        let winner = engine.dismiss().unwrap();
        assert_eq!(winner.text, "A");
        assert!(matches!(engine.phase(), SpinPhase::Idle));
        assert!(engine.dismiss().is_none());
    }

    #[test]
    fn test_dismiss_does_not_touch_in_flight_spin() {
        let mut engine = SpinEngine::new();
        let now = Instant::now();
        engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[0]), now)
            .unwrap();
        assert!(engine.dismiss().is_none());
        assert!(engine.is_spinning());
        assert!(engine.poll(now + RESOLVE_DELAY).is_some());
    }

    #[test]
    fn test_cancel_pending_keeps_rotation() {
        let mut engine = SpinEngine::new();
        let now = Instant::now();
        engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[42]), now)
            .unwrap();
        assert!(engine.cancel_pending());
        assert!(matches!(engine.phase(), SpinPhase::Idle));
        assert_eq!(engine.rotation(), 1842);
        assert!(engine.poll(now + RESOLVE_DELAY).is_none());
        assert!(!engine.cancel_pending());
    }

    #[test]
    fn test_huge_saved_rotation_is_folded() {
        let saved = 18_446_744_073_709_551_000;
        let mut engine = SpinEngine::with_rotation(saved);
        assert_eq!(engine.rotation(), saved % 360);

        let ticket = engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[10]), Instant::now())
            .unwrap();
        assert_eq!(ticket.from_angle, saved % 360);
        assert_eq!(ticket.target_angle, saved % 360 + 1810);
    }

    #[test]
    fn test_ordinary_saved_rotation_is_kept() {
        assert_eq!(SpinEngine::with_rotation(1830).rotation(), 1830);
    }

    #[test]
    fn test_ticket_describes_spin() {
        let mut engine = SpinEngine::with_rotation(100);
        let now = Instant::now();
        let ticket = engine
            .spin(active_of(&["A", "B"]), &mut FixedOffsets::new(&[20]), now)
            .unwrap();
        assert_eq!(ticket.from_angle, 100);
        assert_eq!(ticket.target_angle, 1920);
        assert_eq!(ticket.due, now + RESOLVE_DELAY);
    }
}
