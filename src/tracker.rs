mod candidate;
mod gating;
mod rect;
mod selector;
mod track_state;

pub use candidate::{Candidate, FrameCandidates};
pub use gating::{RejectReason, SelectorConfig, gate};
pub use rect::Rect;
pub use selector::{CandidateSelector, Selection};
pub use track_state::TrackState;
