//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - the pairwise separation floor and gravitational constant (`min_distance`, `g`),
//! - deterministic seed for procedural scenes

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub min_distance: f64, // pairwise separation floor
    pub g: f64, // gravitational constant
    pub seed: f64, // deterministic seed
}
