//! The three geometry generators: a quad, an axis-aligned box, and an
//! ellipse fan. All of them are total functions over their numeric
//! inputs: nothing is validated, degenerate and non-finite values flow
//! straight into the output arrays.

use crate::data;

use std::borrow::Cow;
use std::f32::consts::TAU;

/// GPU primitive assembly mode for a generated geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveMode {
    TriangleStrip,
    TriangleList,
    TriangleFan,
}

/// Flat vertex attribute arrays plus an optional index list.
///
/// Extent-independent attributes borrow the shared tables in [`data`];
/// anything derived from caller input is owned. The borrowed tables are
/// immutable statics, so sharing a `Geometry` across threads is safe.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub mode: PrimitiveMode,
    /// 3 components per vertex.
    pub positions: Cow<'static, [f32]>,
    /// 3 components per vertex.
    pub normals: Cow<'static, [f32]>,
    /// 2 components per vertex.
    pub texcoords: Cow<'static, [f32]>,
    pub indices: Option<Cow<'static, [u16]>>,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, |indices| indices.len())
    }
}

/// Builds a 4-vertex quad spanning the corners `(xa, ya)` and
/// `(xb, yb)` at z = 0, as a triangle strip with no indices.
///
/// A zero-area quad is not rejected.
pub fn plane(xa: f32, ya: f32, xb: f32, yb: f32) -> Geometry {
    #[rustfmt::skip]
    let positions = vec![
        xa, ya, 0.0,
        xa, yb, 0.0,
        xb, ya, 0.0,
        xb, yb, 0.0,
    ];

    Geometry {
        mode: PrimitiveMode::TriangleStrip,
        positions: Cow::Owned(positions),
        normals: Cow::Borrowed(&data::PLANE_NORMALS),
        texcoords: Cow::Borrowed(&data::PLANE_TEXCOORDS),
        indices: None,
    }
}

/// Builds an axis-aligned box between the opposite corners
/// `(xa, ya, za)` and `(xb, yb, zb)` as an indexed triangle list: four
/// vertices per face, faces ordered +X, +Y, +Z, -X, -Y, -Z, wound for
/// outward-facing normals.
///
/// Only the positions depend on the extents. Normals, texcoords, and
/// indices are the shared tables in [`data`], so successive calls
/// return geometries whose constant attributes alias the same storage.
/// Inverted or zero extents are not rejected.
pub fn cuboid(xa: f32, ya: f32, za: f32, xb: f32, yb: f32, zb: f32) -> Geometry {
    #[rustfmt::skip]
    let positions = vec![
        xb, yb, zb,   xb, ya, zb,   xb, ya, za,   xb, yb, za, // +X
        xb, yb, zb,   xb, yb, za,   xa, yb, za,   xa, yb, zb, // +Y
        xb, yb, zb,   xa, yb, zb,   xa, ya, zb,   xb, ya, zb, // +Z
        xa, yb, zb,   xa, yb, za,   xa, ya, za,   xa, ya, zb, // -X
        xa, ya, za,   xb, ya, za,   xb, ya, zb,   xa, ya, zb, // -Y
        xb, ya, za,   xa, ya, za,   xa, yb, za,   xb, yb, za, // -Z
    ];

    Geometry {
        mode: PrimitiveMode::TriangleList,
        positions: Cow::Owned(positions),
        normals: Cow::Borrowed(&data::BOX_NORMALS),
        texcoords: Cow::Borrowed(&data::BOX_TEXCOORDS),
        indices: Some(Cow::Borrowed(&data::BOX_INDICES)),
    }
}

/// Builds a triangle fan approximating an ellipse with the given radii:
/// a center vertex, `num_segments` boundary steps of `2π / num_segments`
/// each, and a final boundary vertex at θ = 2π duplicating the first to
/// close the fan. Total vertex count is `num_segments + 2`.
///
/// The center vertex is fully zeroed: position `(0, 0, 0)`, normal
/// `(0, 0, 0)`, texcoord `(0, 0)`.
///
/// `num_segments == 0` is unspecified; the angle step divides by zero
/// and the boundary comes out NaN.
pub fn ellipse(x_radius: f32, y_radius: f32, num_segments: u32) -> Geometry {
    let vertex_count = num_segments as usize + 2;
    let step = TAU / num_segments as f32;

    // Slot 0 is the center vertex; it keeps the zero fill.
    let mut positions = vec![0.0; vertex_count * 3];
    let mut normals = vec![0.0; vertex_count * 3];
    let mut texcoords = vec![0.0; vertex_count * 2];

    for k in 0..=num_segments as usize {
        let theta = k as f32 * step;
        let (st, ct) = theta.sin_cos();
        let v = k + 1;

        positions[v * 3] = ct * x_radius;
        positions[v * 3 + 1] = st * y_radius;
        normals[v * 3 + 2] = 1.0;
        texcoords[v * 2] = ct * 0.5 + 0.5;
        texcoords[v * 2 + 1] = st * 0.5 + 0.5;
    }

    Geometry {
        mode: PrimitiveMode::TriangleFan,
        positions: Cow::Owned(positions),
        normals: Cow::Owned(normals),
        texcoords: Cow::Owned(texcoords),
        indices: None,
    }
}
