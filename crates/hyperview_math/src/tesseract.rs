//! Tesseract (4D hypercube) topology
//!
//! A tesseract has 16 vertices (all sign combinations of (±1, ±1, ±1, ±1)),
//! 32 edges, 24 square faces, and 8 cubic cells.
//!
//! The face table here is authored data for meshing: each entry is one square
//! face given in winding order, so that consecutive index pairs (wrapping) are
//! its edges and `(i0, i1, i3), (i1, i2, i3)` are its two triangles.
//!
//! The table lists 23 faces. The face with x = -1, y = -1 (vertices
//! 12, 13, 14, 15) is not present; its four edges are still covered by
//! neighbouring faces, so the wireframe is complete.

use crate::Vec4;

/// The 16 vertices of the unit tesseract
///
/// Vertex `i` has x, y, z, w negative where bits 3, 2, 1, 0 of `i` are set.
pub const TESSERACT_VERTICES: [Vec4; 16] = [
    Vec4::new( 1.0,  1.0,  1.0,  1.0), // 0  = 0b0000
    Vec4::new( 1.0,  1.0,  1.0, -1.0), // 1  = 0b0001
    Vec4::new( 1.0,  1.0, -1.0,  1.0), // 2  = 0b0010
    Vec4::new( 1.0,  1.0, -1.0, -1.0), // 3  = 0b0011
    Vec4::new( 1.0, -1.0,  1.0,  1.0), // 4  = 0b0100
    Vec4::new( 1.0, -1.0,  1.0, -1.0), // 5  = 0b0101
    Vec4::new( 1.0, -1.0, -1.0,  1.0), // 6  = 0b0110
    Vec4::new( 1.0, -1.0, -1.0, -1.0), // 7  = 0b0111
    Vec4::new(-1.0,  1.0,  1.0,  1.0), // 8  = 0b1000
    Vec4::new(-1.0,  1.0,  1.0, -1.0), // 9  = 0b1001
    Vec4::new(-1.0,  1.0, -1.0,  1.0), // 10 = 0b1010
    Vec4::new(-1.0,  1.0, -1.0, -1.0), // 11 = 0b1011
    Vec4::new(-1.0, -1.0,  1.0,  1.0), // 12 = 0b1100
    Vec4::new(-1.0, -1.0,  1.0, -1.0), // 13 = 0b1101
    Vec4::new(-1.0, -1.0, -1.0,  1.0), // 14 = 0b1110
    Vec4::new(-1.0, -1.0, -1.0, -1.0), // 15 = 0b1111
];

/// Square faces as vertex indices in winding order
pub const TESSERACT_CELLS: [[u32; 4]; 23] = [
    [0, 1, 5, 4],
    [0, 2, 6, 4],
    [0, 8, 12, 4],
    [0, 2, 3, 1],
    [0, 1, 9, 8],
    [0, 2, 10, 8],
    [1, 3, 7, 5],
    [1, 9, 13, 5],
    [1, 9, 11, 3],
    [2, 3, 7, 6],
    [11, 10, 2, 3],
    [2, 10, 14, 6],
    [3, 11, 15, 7],
    [4, 12, 13, 5],
    [4, 6, 14, 12],
    [4, 6, 7, 5],
    [5, 7, 15, 13],
    [7, 6, 14, 15],
    [8, 10, 14, 12],
    [8, 9, 13, 12],
    [9, 8, 10, 11],
    [9, 11, 15, 13],
    [10, 11, 15, 14],
];

/// The four 4D points of one face, in winding order
pub fn cell_points(cell: &[u32; 4]) -> [Vec4; 4] {
    [
        TESSERACT_VERTICES[cell[0] as usize],
        TESSERACT_VERTICES[cell[1] as usize],
        TESSERACT_VERTICES[cell[2] as usize],
        TESSERACT_VERTICES[cell[3] as usize],
    ]
}

/// Wireframe index buffer: four wrapped edges per face, two indices per edge
pub fn line_indices() -> Vec<u32> {
    let mut indices = Vec::with_capacity(TESSERACT_CELLS.len() * 8);
    for cell in &TESSERACT_CELLS {
        for k in 0..4 {
            indices.push(cell[k]);
            indices.push(cell[(k + 1) % 4]);
        }
    }
    indices
}

/// Filled index buffer: each face split into `(i0, i1, i3)` and `(i1, i2, i3)`
pub fn triangle_indices() -> Vec<u32> {
    let mut indices = Vec::with_capacity(TESSERACT_CELLS.len() * 6);
    for cell in &TESSERACT_CELLS {
        indices.extend_from_slice(&[cell[0], cell[1], cell[3], cell[1], cell[2], cell[3]]);
    }
    indices
}

/// Distinct edges across all faces, each as `[low, high]`, sorted
pub fn unique_edges() -> Vec<[u32; 2]> {
    let mut edges: Vec<[u32; 2]> = line_indices()
        .chunks_exact(2)
        .map(|pair| [pair[0].min(pair[1]), pair[0].max(pair[1])])
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}
