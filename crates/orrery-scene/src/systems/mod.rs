pub mod asteroids;
pub mod layout;
pub mod planets;
pub mod rng;
#[cfg(feature = "vectors")]
pub mod vector;
