//! Static vertex-buffer geometry for GL-class renderers: a quad, an
//! axis-aligned box, and an ellipse fan, generated as flat attribute
//! arrays and uploadable as the named attributes `position`, `normal`,
//! and `texcoord`.

pub mod data;
pub mod geometry;
pub mod render;

pub use geometry::{cuboid, ellipse, plane, Geometry, PrimitiveMode};
pub use render::{gl_primitive, Attribute, Buffer, Context, Problem, VertexBuffer};
