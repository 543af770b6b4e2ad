//! Per-session job state with supersede semantics.
//!
//! Each job owns a [`JobSlot`]. Starting a job hands out a [`Ticket`] and bumps
//! the slot's generation; a result settled with an older ticket is dropped, so
//! the slot only ever shows the most recent run.

use clickforge_core::{AnalysisResult, GeneratedCombo, ScriptResult};
use clickforge_error::ClickforgeResult;
use tracing::debug;

use crate::COMBO_COUNT;

/// The three studio jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum JobKind {
    /// Title + thumbnail analysis
    #[display("analysis")]
    Analysis,
    /// Combo ideas and thumbnails
    #[display("combos")]
    Combos,
    /// Script writing
    #[display("script")]
    Script,
}

/// What a slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotState<T> {
    /// Nothing started yet
    #[default]
    Idle,
    /// A run is in flight
    Loading,
    /// Last run succeeded
    Ready(T),
    /// Last run failed; holds the display message
    Failed(String),
}

/// Proof that a run was started; required to settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    kind: JobKind,
    generation: u64,
}

impl Ticket {
    /// Job this ticket belongs to.
    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// Run counter at the time the ticket was issued.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Loading flag, result and error for one job.
///
/// # Examples
///
/// ```
/// use clickforge_studio::{JobKind, JobSlot, SlotState};
///
/// let mut slot: JobSlot<String> = JobSlot::new(JobKind::Script);
/// let first = slot.begin();
/// let second = slot.begin();
///
/// assert!(slot.settle(second, Ok("fresh".to_string())));
/// assert!(!slot.settle(first, Ok("stale".to_string())));
/// assert_eq!(slot.state(), &SlotState::Ready("fresh".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct JobSlot<T> {
    kind: JobKind,
    generation: u64,
    state: SlotState<T>,
}

impl<T> JobSlot<T> {
    /// Empty slot for a job.
    pub fn new(kind: JobKind) -> Self {
        Self {
            kind,
            generation: 0,
            state: SlotState::Idle,
        }
    }

    /// Start a run: clear the previous result and error and mark loading.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = SlotState::Loading;
        debug!(job = %self.kind, generation = self.generation, "Job started");
        Ticket {
            kind: self.kind,
            generation: self.generation,
        }
    }

    /// Record the outcome of a run.
    ///
    /// Returns `false` and leaves the slot untouched when the ticket belongs
    /// to another job or to a run that has since been superseded.
    pub fn settle(&mut self, ticket: Ticket, outcome: ClickforgeResult<T>) -> bool {
        if ticket.kind != self.kind || ticket.generation != self.generation {
            debug!(
                job = %self.kind,
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded result"
            );
            return false;
        }
        self.state = match outcome {
            Ok(value) => SlotState::Ready(value),
            Err(e) => SlotState::Failed(e.user_message()),
        };
        true
    }

    /// Which job this slot holds.
    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// Current state.
    pub fn state(&self) -> &SlotState<T> {
        &self.state
    }

    /// Whether a run is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SlotState::Loading)
    }

    /// Result of the last successful run, if it is still current.
    pub fn result(&self) -> Option<&T> {
        match &self.state {
            SlotState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Display message of the last failed run, if it is still current.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SlotState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Everything a presentation shell displays for one user.
///
/// Jobs are independent: starting one clears only its own slot.
#[derive(Debug, Clone)]
pub struct Session {
    analysis: JobSlot<AnalysisResult>,
    combos: JobSlot<[GeneratedCombo; COMBO_COUNT]>,
    script: JobSlot<ScriptResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// All slots idle.
    pub fn new() -> Self {
        Self {
            analysis: JobSlot::new(JobKind::Analysis),
            combos: JobSlot::new(JobKind::Combos),
            script: JobSlot::new(JobKind::Script),
        }
    }

    /// Analysis slot.
    pub fn analysis(&self) -> &JobSlot<AnalysisResult> {
        &self.analysis
    }

    /// Mutable analysis slot.
    pub fn analysis_mut(&mut self) -> &mut JobSlot<AnalysisResult> {
        &mut self.analysis
    }

    /// Combos slot.
    pub fn combos(&self) -> &JobSlot<[GeneratedCombo; COMBO_COUNT]> {
        &self.combos
    }

    /// Mutable combos slot.
    pub fn combos_mut(&mut self) -> &mut JobSlot<[GeneratedCombo; COMBO_COUNT]> {
        &mut self.combos
    }

    /// Script slot.
    pub fn script(&self) -> &JobSlot<ScriptResult> {
        &self.script
    }

    /// Mutable script slot.
    pub fn script_mut(&mut self) -> &mut JobSlot<ScriptResult> {
        &mut self.script
    }

    /// Whether any job is in flight.
    pub fn is_busy(&self) -> bool {
        self.analysis.is_loading() || self.combos.is_loading() || self.script.is_loading()
    }
}
