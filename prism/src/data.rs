// Shared lookup tables for the extent-independent parts of each
// geometry. Every generated geometry borrows these directly; callers
// must treat them as read-only.

#[rustfmt::skip]
pub static PLANE_NORMALS: [f32; 12] = [
    0.0, 0.0, 1.0,
    0.0, 0.0, 1.0,
    0.0, 0.0, 1.0,
    0.0, 0.0, 1.0,
];

#[rustfmt::skip]
pub static PLANE_TEXCOORDS: [f32; 8] = [
    0.0, 0.0,
    0.0, 1.0,
    1.0, 0.0,
    1.0, 1.0,
];

// Box faces are ordered +X, +Y, +Z, -X, -Y, -Z, four vertices each.

#[rustfmt::skip]
pub static BOX_NORMALS: [f32; 72] = [
     1.0,  0.0,  0.0,    1.0,  0.0,  0.0,    1.0,  0.0,  0.0,    1.0,  0.0,  0.0, // +X
     0.0,  1.0,  0.0,    0.0,  1.0,  0.0,    0.0,  1.0,  0.0,    0.0,  1.0,  0.0, // +Y
     0.0,  0.0,  1.0,    0.0,  0.0,  1.0,    0.0,  0.0,  1.0,    0.0,  0.0,  1.0, // +Z
    -1.0,  0.0,  0.0,   -1.0,  0.0,  0.0,   -1.0,  0.0,  0.0,   -1.0,  0.0,  0.0, // -X
     0.0, -1.0,  0.0,    0.0, -1.0,  0.0,    0.0, -1.0,  0.0,    0.0, -1.0,  0.0, // -Y
     0.0,  0.0, -1.0,    0.0,  0.0, -1.0,    0.0,  0.0, -1.0,    0.0,  0.0, -1.0, // -Z
];

// Per-face unit-square mapping, mirrored per axis sign to keep texture
// "up" consistent across faces.
#[rustfmt::skip]
pub static BOX_TEXCOORDS: [f32; 48] = [
    0.0, 1.0,   1.0, 1.0,   1.0, 0.0,   0.0, 0.0, // +X
    1.0, 1.0,   1.0, 0.0,   0.0, 0.0,   0.0, 1.0, // +Y
    0.0, 1.0,   1.0, 1.0,   1.0, 0.0,   0.0, 0.0, // +Z
    1.0, 1.0,   1.0, 0.0,   0.0, 0.0,   0.0, 1.0, // -X
    1.0, 0.0,   0.0, 0.0,   0.0, 1.0,   1.0, 1.0, // -Y
    1.0, 0.0,   0.0, 0.0,   0.0, 1.0,   1.0, 1.0, // -Z
];

// Two triangles per face.
#[rustfmt::skip]
pub static BOX_INDICES: [u16; 36] = [
     0,  1,  2,  0,  2,  3, // +X
     4,  5,  6,  4,  6,  7, // +Y
     8,  9, 10,  8, 10, 11, // +Z
    12, 13, 14, 12, 14, 15, // -X
    16, 17, 18, 16, 18, 19, // -Y
    20, 21, 22, 20, 22, 23, // -Z
];
