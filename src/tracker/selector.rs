//! Sequential single-object candidate selection.

use tracing::{debug, info, trace, warn};

use crate::tracker::candidate::{Candidate, FrameCandidates};
use crate::tracker::gating::{self, RejectReason, SelectorConfig};
use crate::tracker::track_state::TrackState;
use crate::trajectory::SparseTrajectory;

/// Outcome of selecting over one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub chosen: Option<Candidate>,
    /// Candidates that survived every gate
    pub survivors: usize,
    /// Index into the frame's candidate list and the gate that dropped it
    pub rejected: Vec<(usize, RejectReason)>,
}

/// Picks at most one candidate per frame: nearest to the previous pick, or
/// the most confident one while nothing has been picked yet.
#[derive(Debug, Clone, Default)]
pub struct CandidateSelector {
    config: SelectorConfig,
}

impl CandidateSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select for a single frame. The returned state is `state` unchanged when
    /// nothing survives gating.
    pub fn select(&self, frame_index: usize, frame: &FrameCandidates, state: TrackState) -> (Selection, TrackState) {
        let mut selection = Selection::default();
        let mut survivors = Vec::with_capacity(frame.candidates.len());

        for (idx, cand) in frame.candidates.iter().enumerate() {
            match gating::gate(cand, &frame.exclusions, &self.config) {
                Ok(()) => survivors.push(*cand),
                Err(reason) => {
                    trace!(frame_index, idx, %reason, "candidate rejected");
                    selection.rejected.push((idx, reason));
                }
            }
        }
        selection.survivors = survivors.len();

        let chosen = match state.previous_center {
            Some(prev) => survivors.iter().min_by(|a, b| {
                let da = nalgebra::distance_squared(&a.bbox.center(), &prev);
                let db = nalgebra::distance_squared(&b.bbox.center(), &prev);
                da.total_cmp(&db).then_with(|| b.confidence.total_cmp(&a.confidence))
            }),
            // First pick: highest confidence, earliest wins ties.
            None => survivors.iter().min_by(|a, b| b.confidence.total_cmp(&a.confidence)),
        }
        .copied();

        let next_state = match chosen {
            Some(cand) => {
                debug!(frame_index, x1 = cand.bbox.x1, y1 = cand.bbox.y1, confidence = cand.confidence, "candidate chosen");
                TrackState {
                    previous_center: Some(cand.bbox.center()),
                    last_frame: Some(frame_index),
                }
            }
            None => {
                debug!(frame_index, candidates = frame.candidates.len(), "no candidate survived");
                state
            }
        };

        selection.chosen = chosen;
        (selection, next_state)
    }

    /// Fold the selector over a whole video, in frame order, starting from an
    /// empty [`TrackState`].
    pub fn run(&self, frames: &[FrameCandidates]) -> SparseTrajectory {
        self.run_from(frames, TrackState::new()).0
    }

    /// Same as [`run`](Self::run) but from an explicit initial state, also
    /// returning the final state.
    pub fn run_from(&self, frames: &[FrameCandidates], initial: TrackState) -> (SparseTrajectory, TrackState) {
        let mut slots = Vec::with_capacity(frames.len());
        let final_state = frames.iter().enumerate().fold(initial, |state, (frame_index, frame)| {
            let (selection, next) = self.select(frame_index, frame, state);
            slots.push(selection.chosen.map(|c| c.bbox));
            next
        });

        let trajectory = SparseTrajectory::from_slots(slots);
        if trajectory.observed_count() == 0 {
            warn!(frames = trajectory.len(), "object never observed");
        } else {
            info!(
                frames = trajectory.len(),
                observed = trajectory.observed_count(),
                "candidate selection finished"
            );
        }
        (trajectory, final_state)
    }
}
