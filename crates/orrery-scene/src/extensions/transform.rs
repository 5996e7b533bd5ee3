// extensions/transform.rs
//
// Ordered 2D transform lists, SVG semantics.
// A chain renders to a `transform` attribute and composes to one affine
// matrix; both read the ops in the same order, so they never disagree.
//
// Usage:
//   let chain = TransformChain::new()
//       .skew_x(30.0)
//       .rotate(-50.0)
//       .translate(900.0, 0.0);
//   let attr = chain.to_svg();              // "skewX(30) rotate(-50) translate(900 0)"
//   let p = chain.apply(DVec2::ZERO);       // where the local origin lands

use std::fmt::Write;

use glam::{DAffine2, DVec2};

/// One SVG transform function. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Horizontal shear by `angle` degrees.
    SkewX(f64),
    /// Rotation about the local origin.
    Rotate(f64),
    /// Rotation about `(cx, cy)`.
    RotateAbout { angle: f64, cx: f64, cy: f64 },
    Translate(f64, f64),
    /// Uniform scale.
    Scale(f64),
}

impl TransformOp {
    /// Matrix form of this op.
    pub fn to_affine(self) -> DAffine2 {
        match self {
            TransformOp::SkewX(angle) => DAffine2::from_cols(
                DVec2::X,
                DVec2::new(angle.to_radians().tan(), 1.0),
                DVec2::ZERO,
            ),
            TransformOp::Rotate(angle) => DAffine2::from_angle(angle.to_radians()),
            TransformOp::RotateAbout { angle, cx, cy } => {
                let pivot = DVec2::new(cx, cy);
                DAffine2::from_translation(pivot)
                    * DAffine2::from_angle(angle.to_radians())
                    * DAffine2::from_translation(-pivot)
            }
            TransformOp::Translate(x, y) => DAffine2::from_translation(DVec2::new(x, y)),
            TransformOp::Scale(s) => DAffine2::from_scale(DVec2::splat(s)),
        }
    }

    fn write_svg(self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            TransformOp::SkewX(a) => write!(out, "skewX({})", fmt_num(a)),
            TransformOp::Rotate(a) => write!(out, "rotate({})", fmt_num(a)),
            TransformOp::RotateAbout { angle, cx, cy } => write!(
                out,
                "rotate({} {} {})",
                fmt_num(angle),
                fmt_num(cx),
                fmt_num(cy)
            ),
            TransformOp::Translate(x, y) => write!(out, "translate({} {})", fmt_num(x), fmt_num(y)),
            TransformOp::Scale(s) => write!(out, "scale({})", fmt_num(s)),
        };
    }
}

/// Format a coordinate for SVG output: at most 6 decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 1_000_000.0).round() / 1_000_000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Ordered list of transform ops.
///
/// SVG applies a transform list right to left to a point: the last op
/// touches the point first. `compose` multiplies left to right, which gives
/// exactly that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformChain {
    ops: Vec<TransformOp>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn skew_x(self, angle: f64) -> Self {
        self.push(TransformOp::SkewX(angle))
    }

    pub fn rotate(self, angle: f64) -> Self {
        self.push(TransformOp::Rotate(angle))
    }

    pub fn rotate_about(self, angle: f64, cx: f64, cy: f64) -> Self {
        self.push(TransformOp::RotateAbout { angle, cx, cy })
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        self.push(TransformOp::Translate(x, y))
    }

    pub fn scale(self, s: f64) -> Self {
        self.push(TransformOp::Scale(s))
    }

    /// The ops in application order as written.
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Single matrix equivalent to the whole chain.
    pub fn compose(&self) -> DAffine2 {
        self.ops
            .iter()
            .fold(DAffine2::IDENTITY, |acc, op| acc * op.to_affine())
    }

    /// Map a local point into the parent coordinate space.
    pub fn apply(&self, p: DVec2) -> DVec2 {
        self.compose().transform_point2(p)
    }

    /// Render as an SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            op.write_svg(&mut out);
        }
        out
    }
}
