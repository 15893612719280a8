//! TRS matrix helpers for the transform hierarchy.
//!
//! Builds root world matrices (translation * rotation * uniform scale) and
//! splits propagated matrices back into scale/rotation/translation. The
//! decomposition floors degenerate scale axes so a collapsed transform
//! cannot turn into NaN further down the tree.

use nalgebra::{Matrix3, Rotation3};

use super::states::{Body, NMat4, NQuat, NVec3};

/// Scale axes below this are clamped before normalization.
pub const MIN_SCALE: f64 = 1e-9;

/// World matrix of a body ignoring any parent: translation * rotation *
/// uniform scale, with the body radius as the scale factor.
pub fn local_matrix(b: &Body) -> NMat4 {
    NMat4::new_translation(&b.x) * b.rotation.to_homogeneous() * NMat4::new_scaling(b.radius)
}

/// Split an affine TRS matrix into (scale, rotation, translation).
pub fn decompose_trs(m: &NMat4) -> (NVec3, NQuat, NVec3) {
    let translation = NVec3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);

    let mut axes = [
        NVec3::new(m[(0, 0)], m[(1, 0)], m[(2, 0)]),
        NVec3::new(m[(0, 1)], m[(1, 1)], m[(2, 1)]),
        NVec3::new(m[(0, 2)], m[(1, 2)], m[(2, 2)]),
    ];
    let mut scale = NVec3::new(axes[0].norm(), axes[1].norm(), axes[2].norm());

    // A collapsed axis gets replaced by its basis vector at the floor scale,
    // which keeps the division below finite and the rotation orthonormal
    let basis = [NVec3::x(), NVec3::y(), NVec3::z()];
    for k in 0..3 {
        if scale[k] < MIN_SCALE {
            scale[k] = MIN_SCALE;
            axes[k] = basis[k] * MIN_SCALE;
        }
    }

    let rot = Matrix3::from_columns(&[
        axes[0] / scale.x,
        axes[1] / scale.y,
        axes[2] / scale.z,
    ]);
    let rotation = NQuat::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rot));

    (scale, rotation, translation)
}
