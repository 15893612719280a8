//! Sphere-sphere collision queries against an attachment cluster.

use super::states::{BodyId, NVec3, System};

/// Result of a successful probe: the cluster member that was hit and the
/// world-space attachment point on its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub body: BodyId,
    pub point: NVec3,
}

/// Probe `other` against `probe` and its attached subtree.
///
/// Returns the first touching member in depth-first pre-order, so a grown
/// cluster catches bodies with any of its members and the winner is
/// deterministic. A body that already has a parent is never a candidate,
/// and a body cannot collide with itself. Pure query: attachment is the
/// caller's move.
pub fn check_collision(sys: &System, probe: BodyId, other: BodyId) -> Option<Contact> {
    if other == probe || sys.bodies[other].parent.is_some() {
        return None;
    }
    probe_subtree(sys, probe, other)
}

fn probe_subtree(sys: &System, node: BodyId, other: BodyId) -> Option<Contact> {
    let a = &sys.bodies[node];
    let b = &sys.bodies[other];

    let diff = b.x - a.x;
    let dist_sq = diff.norm_squared();
    let reach = a.radius + b.radius;

    // Strict inequality: touching exactly at the combined radius is a miss
    if dist_sq < reach * reach {
        let dist = dist_sq.sqrt();
        // Coincident centers have no direction; fall back to +X
        let direction = if dist > f64::EPSILON {
            diff / dist
        } else {
            NVec3::x()
        };
        return Some(Contact {
            body: node,
            point: a.x + direction * a.radius,
        });
    }

    for &c in &a.children {
        if let Some(contact) = probe_subtree(sys, c, other) {
            return Some(contact);
        }
    }
    None
}
