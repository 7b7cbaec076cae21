//! Game rules: the matching rule, the solver, and scoring.
//!
//! - `is_set` / `cards_form_set`: per-feature all-same-or-all-different
//! - `find_set`: exhaustive search over the display window
//! - `ScoreTracker`: time-weighted reward, flat penalty
//!
//! Time is injected through `Clock` so scoring is testable.

pub mod matching;
pub mod scoring;

pub use matching::{cards_form_set, completing_attributes, find_set, is_set};
pub use scoring::{Clock, ManualClock, ScoreTracker, SystemClock, BASE_POINTS, PIVOT_SECS};
