use crate::geometry::{Geometry, PrimitiveMode};

use glow::HasContext;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use thiserror::Error;

pub type Context = Rc<glow::Context>;
type Result<T> = std::result::Result<T, Problem>;

#[derive(Error, Debug)]
pub enum Problem {
    #[error("Cannot create buffer: {0}")]
    CannotCreateBuffer(String),

    #[error("Unexpected data size. Expected: {expected:?}. Actual: {actual:?}")]
    WrongDataSize { expected: usize, actual: usize },

    #[error("No attribute named {0:?} on this vertex buffer")]
    UnknownAttribute(String),
}

/// A GL buffer and the element count it was uploaded with.
pub struct Buffer {
    #[allow(unused)]
    context: Context,
    pub id: glow::Buffer,
    pub size: usize,
    pub type_: u32,
}

impl Buffer {
    pub fn from_f32(context: &Context, data: &[f32], buffer_type: u32, usage: u32) -> Result<Self> {
        Self::from_bytes(context, bytemuck::cast_slice(data), data.len(), buffer_type, usage)
    }

    pub fn from_u16(context: &Context, data: &[u16], buffer_type: u32, usage: u32) -> Result<Self> {
        Self::from_bytes(context, bytemuck::cast_slice(data), data.len(), buffer_type, usage)
    }

    fn from_bytes(
        context: &Context,
        bytes: &[u8],
        size: usize,
        buffer_type: u32,
        usage: u32,
    ) -> Result<Self> {
        let id = unsafe {
            let buffer = context
                .create_buffer()
                .map_err(Problem::CannotCreateBuffer)?;
            context.bind_buffer(buffer_type, Some(buffer));
            context.buffer_data_u8_slice(buffer_type, bytes, usage);
            context.bind_buffer(buffer_type, None);
            buffer
        };

        Ok(Self {
            context: Rc::clone(context),
            id,
            size,
            type_: buffer_type,
        })
    }
}

/// A named vertex attribute: the backing buffer and its per-vertex
/// component count.
pub struct Attribute {
    pub buffer: Buffer,
    pub size: u32,
}

/// The buffer object handed back to callers: one GL buffer per named
/// attribute, an optional u16 index buffer, and the primitive mode the
/// vertices assemble under.
///
/// Shader and program management live outside this crate; callers look
/// up attribute locations in their own program and wire them with
/// [`VertexBuffer::bind_attribute`].
pub struct VertexBuffer {
    context: Context,
    mode: PrimitiveMode,
    attributes: FxHashMap<&'static str, Attribute>,
    indices: Option<Buffer>,
    vertex_count: Option<usize>,
}

impl VertexBuffer {
    pub fn new(context: &Context, mode: PrimitiveMode) -> Self {
        Self {
            context: Rc::clone(context),
            mode,
            attributes: FxHashMap::default(),
            indices: None,
            vertex_count: None,
        }
    }

    /// Uploads a geometry as the attributes `position`, `normal`, and
    /// `texcoord`, plus indices when the geometry carries them.
    pub fn from_geometry(context: &Context, geometry: &Geometry) -> Result<Self> {
        let mut vertex_buffer = Self::new(context, geometry.mode);
        vertex_buffer.create_attribute("position", &geometry.positions, 3)?;
        vertex_buffer.create_attribute("normal", &geometry.normals, 3)?;
        vertex_buffer.create_attribute("texcoord", &geometry.texcoords, 2)?;
        if let Some(indices) = &geometry.indices {
            vertex_buffer.create_indices(indices)?;
        }

        log::debug!(
            "Uploaded {} vertices, {} indices",
            geometry.vertex_count(),
            geometry.index_count()
        );

        Ok(vertex_buffer)
    }

    /// Uploads `data` as the attribute `name` with `size` components
    /// per vertex. Every attribute on a buffer must describe the same
    /// number of vertices.
    pub fn create_attribute(&mut self, name: &'static str, data: &[f32], size: u32) -> Result<()> {
        let vertex_count = data.len() / size as usize;
        match self.vertex_count {
            None => self.vertex_count = Some(vertex_count),
            Some(existing) if existing != vertex_count => {
                return Err(Problem::WrongDataSize {
                    expected: existing * size as usize,
                    actual: data.len(),
                });
            }
            Some(_) => {}
        }

        let buffer = Buffer::from_f32(&self.context, data, glow::ARRAY_BUFFER, glow::STATIC_DRAW)?;
        self.attributes.insert(name, Attribute { buffer, size });
        Ok(())
    }

    /// Uploads a u16 index list.
    pub fn create_indices(&mut self, data: &[u16]) -> Result<()> {
        let buffer = Buffer::from_u16(
            &self.context,
            data,
            glow::ELEMENT_ARRAY_BUFFER,
            glow::STATIC_DRAW,
        )?;
        self.indices = Some(buffer);
        Ok(())
    }

    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn indices(&self) -> Option<&Buffer> {
        self.indices.as_ref()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count.unwrap_or(0)
    }

    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, |buffer| buffer.size)
    }

    /// Points the attribute `name` at `location` in whatever program
    /// the caller has bound.
    pub fn bind_attribute(&self, name: &str, location: u32) -> Result<()> {
        let attribute = self
            .attributes
            .get(name)
            .ok_or_else(|| Problem::UnknownAttribute(name.to_string()))?;

        unsafe {
            self.context
                .bind_buffer(glow::ARRAY_BUFFER, Some(attribute.buffer.id));
            self.context.enable_vertex_attrib_array(location);
            self.context.vertex_attrib_pointer_f32(
                location,
                attribute.size as i32,
                glow::FLOAT,
                false,
                0,
                0,
            );
        }

        Ok(())
    }

    /// Issues the draw call. The caller is responsible for the program
    /// and attribute bindings beforehand.
    pub fn draw(&self) {
        unsafe {
            match &self.indices {
                Some(indices) => {
                    self.context
                        .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(indices.id));
                    self.context.draw_elements(
                        gl_primitive(self.mode),
                        indices.size as i32,
                        glow::UNSIGNED_SHORT,
                        0,
                    );
                }
                None => {
                    self.context
                        .draw_arrays(gl_primitive(self.mode), 0, self.vertex_count() as i32)
                }
            }
        }
    }
}

pub fn gl_primitive(mode: PrimitiveMode) -> u32 {
    match mode {
        PrimitiveMode::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveMode::TriangleList => glow::TRIANGLES,
        PrimitiveMode::TriangleFan => glow::TRIANGLE_FAN,
    }
}
