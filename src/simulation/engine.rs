//! High-level runtime engine settings
//!
//! Selects the input-driven body, collision-triggered attachment, and the
//! optional soft-wall clamp applied after gravitational integration

use super::states::BodyId;

#[derive(Debug, Clone)]
pub struct Engine {
    pub player: Option<BodyId>, // input-driven root body, if any
    pub attach_on_contact: bool, // katamari behavior: collisions become attachments
    pub boundary_clamp: bool, // soft wall on gravitational positions
    pub boundary: f64, // half-extent of the clamp box
}
