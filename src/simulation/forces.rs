//! Force / acceleration contributors for the gravitational core
//!
//! Defines the acceleration trait and accumulator, including direct
//! pairwise Newtonian gravity with a minimum-distance floor

use crate::simulation::states::{MotionMode, NVec3, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Direct pairwise Newtonian gravity (n^2 sum) with a distance floor
///
/// Only gravitational-mode bodies attract or feel attraction. The floor
/// replaces the separation in the force law once bodies get closer than
/// `min_distance`, so near-overlaps stay finite instead of blowing up
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // separation floor
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            if bi.mode != MotionMode::Gravitational {
                continue;
            }
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                if bj.mode != MotionMode::Gravitational {
                    continue;
                }

                // r is the displacement vector from i to j.
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r.
                let r = bj.x - xi;
                let dist = r.norm();
                if dist <= f64::EPSILON {
                    // Coincident centers have no defined direction; skip
                    continue;
                }

                // Floored separation: the magnitude uses
                //   d = max(|r|, min_distance)
                // while the direction stays the true r-hat
                let d = dist.max(self.min_distance);

                // coef folds together G, the 1/d^2 law, and the 1/|r|
                // needed to normalize r:
                //   a_i = G * m_j / d^2 * r / |r|
                let coef = self.g / (d * d * dist);

                // -------------------------
                // Apply Newton's law:
                // a_i +=  G * m_j * r / (d^2 |r|)
                // a_j += -G * m_i * r / (d^2 |r|)
                // (equal and opposite)
                // -------------------------

                // Acceleration on body i due to body j:
                // direction: along +r (toward j)
                // magnitude scaled by mass of j
                out[i] += coef * bj.m * r;

                // Acceleration on body j due to body i:
                // direction: along -r (toward i)
                // magnitude scaled by mass of i
                out[j] -= coef * mi * r;
            }
        }
    }
}
