// extensions/mod.rs
//
// Geometry helpers with no dependency on the scene model.
// Layout systems build on these; hosts can use them directly.

pub mod scale;
pub mod transform;

pub use scale::{lerp, LinearScale};
pub use transform::{fmt_num, TransformChain, TransformOp};
