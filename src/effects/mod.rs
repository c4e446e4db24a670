//! Effects - the pure logic behind each animated component
//!
//! Nothing here touches the DOM. Components feed observations in
//! (visibility ratios, scroll geometry, viewport width) and get inline
//! styles back.

pub mod expand;
pub mod reveal;
pub mod stagger;

pub use expand::{ExpandRange, ExpandStyle};
pub use reveal::{RevealPhase, RevealPreset};
pub use stagger::{HeadingLine, HeadingPlan, LineSlot, StaggerSchedule};
