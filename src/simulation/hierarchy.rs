//! Runtime attachment hierarchy.
//!
//! Bodies form a forest: collision-triggered attachment freezes the child's
//! pose relative to its new parent, and world transforms are recomputed
//! top-down every tick by composing that frozen matrix with the parent's
//! freshly computed world transform.
//!
//! Attachment is monotonic: a body attaches at most once and is never
//! detached or re-parented, so the forest stays acyclic by construction.

use super::states::{BodyId, MotionMode, NMat4, System};
use super::transform::{decompose_trs, local_matrix};

/// Upper bound on parent-chain length. Cycles are impossible by
/// construction; the bound keeps a corrupted chain from recursing forever.
pub const MAX_DEPTH: usize = 64;

/// Outcome of an attachment request. Every rejection leaves the system
/// untouched, so callers can assert on the reason instead of diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachResult {
    Attached,
    SelfAttach,
    AlreadyAttached,
    WouldCycle,
}

/// World transform of `id`, composed up the parent chain.
///
/// For roots this is just the body's own translation * rotation * scale; for
/// attached bodies it is `world(parent) * relative`, recursively.
pub fn world_transform(sys: &System, id: BodyId) -> NMat4 {
    world_transform_bounded(sys, id, MAX_DEPTH)
}

fn world_transform_bounded(sys: &System, id: BodyId, depth: usize) -> NMat4 {
    let b = &sys.bodies[id];
    match b.parent {
        Some(p) if depth > 0 => world_transform_bounded(sys, p, depth - 1) * b.relative,
        _ => local_matrix(b),
    }
}

/// Attach `child` to `parent`.
///
/// The child's current world pose is frozen in the parent's local frame, so
/// composing `world(parent) * relative` right after the call reproduces the
/// child's world transform exactly (modulo floating point). The relation is
/// permanent: no detach, no re-anchor.
pub fn attach(sys: &mut System, child: BodyId, parent: BodyId) -> AttachResult {
    if child == parent {
        return AttachResult::SelfAttach;
    }
    if sys.bodies[child].parent.is_some() {
        return AttachResult::AlreadyAttached;
    }

    // Walking up from the new parent must not reach the child
    let mut cursor = Some(parent);
    for _ in 0..=MAX_DEPTH {
        match cursor {
            Some(id) if id == child => return AttachResult::WouldCycle,
            Some(id) => cursor = sys.bodies[id].parent,
            None => break,
        }
    }

    let child_world = world_transform(sys, child);
    let parent_world = world_transform(sys, parent);
    let relative = parent_world
        .try_inverse()
        .unwrap_or_else(NMat4::identity)
        * child_world;

    let b = &mut sys.bodies[child];
    b.parent = Some(parent);
    b.relative = relative;
    b.mode = MotionMode::Attached;
    sys.bodies[parent].children.push(child);

    AttachResult::Attached
}

/// Refresh every cached world transform, depth-first from each root.
///
/// Runs once per tick, after attachments are processed and before rendering.
/// Attached bodies get their position re-derived from the composed matrix;
/// root positions are authoritative and stay untouched.
pub fn propagate_transforms(sys: &mut System) {
    for id in 0..sys.bodies.len() {
        if sys.bodies[id].parent.is_none() {
            propagate_node(sys, id, None);
        }
    }
}

fn propagate_node(sys: &mut System, id: BodyId, parent_world: Option<NMat4>) {
    let world = match parent_world {
        Some(pw) => pw * sys.bodies[id].relative,
        None => local_matrix(&sys.bodies[id]),
    };

    if parent_world.is_some() {
        let (_, _, translation) = decompose_trs(&world);
        sys.bodies[id].x = translation;
    }
    sys.bodies[id].world = world;

    let children = sys.bodies[id].children.clone();
    for c in children {
        propagate_node(sys, c, Some(world));
    }
}
