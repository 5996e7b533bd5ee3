//! Lyon tessellation of the scene's shapes into a flat triangle list.
//!
//! Shapes are described in their local coordinates and pushed through the
//! current transform as vertices are emitted, which mirrors the way the SVG
//! output nests `transform` attributes. Stroke widths are therefore in local
//! units too, the same as an SVG `stroke-width` under a transform.

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, DAffine2, Vec2};
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::api::config::hex_rgb;

const TOLERANCE: f32 = 0.5;

/// Per-vertex data: position then straight RGBA.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(pos: Vec2, color: VectorColor) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// RGBA color, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from a `#RRGGBB` palette entry.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_rgb(hex).map(|[r, g, b]| Self::rgb(r, g, b))
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

struct FillVertexCtor {
    color: VectorColor,
    transform: Affine2,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::new(self.transform.transform_point2(Vec2::new(p.x, p.y)), self.color)
    }
}

struct StrokeVertexCtor {
    color: VectorColor,
    transform: Affine2,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::new(self.transform.transform_point2(Vec2::new(p.x, p.y)), self.color)
    }
}

/// Tessellators plus the output vertex buffer.
///
/// Cleared before each render pass and refilled in paint order.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    transform: Affine2,
}

impl VectorState {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
            transform: Affine2::IDENTITY,
        }
    }

    /// Drop all vertices and reset the transform.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.transform = Affine2::IDENTITY;
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (read from JS linear memory).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    /// Transform applied to every vertex emitted from now on.
    pub fn set_transform(&mut self, transform: DAffine2) {
        self.transform = Affine2::from_cols_array(&transform.to_cols_array().map(|v| v as f32));
    }

    pub fn reset_transform(&mut self) {
        self.transform = Affine2::IDENTITY;
    }

    /// Expand indexed geometry into the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    pub fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let ctor = FillVertexCtor {
            color,
            transform: self.transform,
        };
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, ctor),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("vector: fill tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        if width <= 0.0 {
            return;
        }
        let ctor = StrokeVertexCtor {
            color,
            transform: self.transform,
        };
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, ctor),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("vector: stroke tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(pos.x, pos.y));
        builder.line_to(point(pos.x + width, pos.y));
        builder.line_to(point(pos.x + width, pos.y + height));
        builder.line_to(point(pos.x, pos.y + height));
        builder.close();
        self.fill_path(&builder.build(), color);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        self.fill_path(&circle_path(center, radius), color);
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        self.stroke_path(&circle_path(center, radius), width, color);
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

fn circle_path(center: Vec2, radius: f32) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn color_from_palette_hex() {
        let c = VectorColor::from_hex("#BB4430").unwrap();
        assert!((c.r - 187.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 68.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 48.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
        assert!(VectorColor::from_hex("nope").is_none());
    }

    #[test]
    fn fill_rect_is_two_triangles() {
        let mut state = VectorState::new();
        state.fill_rect(Vec2::ZERO, 100.0, 50.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 6);
    }

    #[test]
    fn transform_moves_vertices() {
        let mut state = VectorState::new();
        state.set_transform(DAffine2::from_translation(DVec2::new(1000.0, 0.0)));
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        assert!(state.vertices().iter().all(|v| v.x >= 1000.0 && v.x <= 1010.0));

        state.clear();
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        assert!(state.vertices().iter().all(|v| v.x <= 10.0));
    }

    #[test]
    fn circles_stay_within_radius() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::new(50.0, 50.0), 25.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
        for v in state.vertices() {
            let d = Vec2::new(v.x - 50.0, v.y - 50.0).length();
            assert!(d <= 25.0 + TOLERANCE);
        }
    }

    #[test]
    fn degenerate_shapes_produce_nothing() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::WHITE);
        state.stroke_circle(Vec2::ZERO, 10.0, 0.0, VectorColor::WHITE);
        state.fill_rect(Vec2::ZERO, 0.0, 5.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }
}
