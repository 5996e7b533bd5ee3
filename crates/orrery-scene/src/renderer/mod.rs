pub mod svg;
#[cfg(feature = "vectors")]
pub mod tessellate;

pub use svg::{render_document, render_svg};
#[cfg(feature = "vectors")]
pub use tessellate::tessellate_frame;
