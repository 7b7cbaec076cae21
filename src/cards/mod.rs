//! Card system: attributes, selection state, instances.
//!
//! ## Key Types
//!
//! - `Attributes`: shape, color, fill, count
//! - `Selection`: four-state highlight with sticky `Mismatch`/`Match`
//! - `Card`: identity + attributes + selection

pub mod attributes;
pub mod selection;
pub mod instance;

pub use attributes::{Attributes, Color, Count, Feature, Fill, Shape, DECK_SIZE, VALUES_PER_FEATURE};
pub use selection::Selection;
pub use instance::Card;
