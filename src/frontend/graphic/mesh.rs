use super::data_type::Vertex;

/// vertices submitted by every draw call
pub const VERTEX_COUNT: usize = 72;

pub const CUBE_VERTEX_COUNT: usize = 36;
pub const TETRAHEDRON_VERTEX_COUNT: usize = 12;
const GEOMETRY_VERTEX_COUNT: usize = CUBE_VERTEX_COUNT + TETRAHEDRON_VERTEX_COUNT;

const fn v(position: [f32; 3], normal: [f32; 3], texture: [f32; 2]) -> Vertex {
    Vertex::new(position, normal, texture)
}

//          0        3
//       7        4 <-- top-right-near
// bottom
// left
// far ---> 1        2
//       6        5
#[rustfmt::skip]
const GEOMETRY: [Vertex; GEOMETRY_VERTEX_COUNT] = [
    // cube, -Z
    v([-0.25, -0.25, -0.25], [ 0.0,  0.0, -1.0], [1.0, 0.0]), // 1
    v([-0.25,  0.25, -0.25], [ 0.0,  0.0, -1.0], [1.0, 1.0]), // 0
    v([ 0.25, -0.25, -0.25], [ 0.0,  0.0, -1.0], [0.0, 0.0]), // 2
    v([ 0.25,  0.25, -0.25], [ 0.0,  0.0, -1.0], [0.0, 1.0]), // 3
    v([ 0.25, -0.25, -0.25], [ 0.0,  0.0, -1.0], [0.0, 0.0]), // 2
    v([-0.25,  0.25, -0.25], [ 0.0,  0.0, -1.0], [1.0, 1.0]), // 0
    // +X
    v([ 0.25, -0.25, -0.25], [ 1.0,  0.0,  0.0], [1.0, 0.0]), // 2
    v([ 0.25,  0.25, -0.25], [ 1.0,  0.0,  0.0], [1.0, 1.0]), // 3
    v([ 0.25, -0.25,  0.25], [ 1.0,  0.0,  0.0], [0.0, 0.0]), // 5
    v([ 0.25,  0.25,  0.25], [ 1.0,  0.0,  0.0], [0.0, 1.0]), // 4
    v([ 0.25, -0.25,  0.25], [ 1.0,  0.0,  0.0], [0.0, 0.0]), // 5
    v([ 0.25,  0.25, -0.25], [ 1.0,  0.0,  0.0], [1.0, 1.0]), // 3
    // +Z
    v([ 0.25, -0.25,  0.25], [ 0.0,  0.0,  1.0], [1.0, 0.0]), // 5
    v([ 0.25,  0.25,  0.25], [ 0.0,  0.0,  1.0], [1.0, 1.0]), // 4
    v([-0.25, -0.25,  0.25], [ 0.0,  0.0,  1.0], [0.0, 0.0]), // 6
    v([-0.25,  0.25,  0.25], [ 0.0,  0.0,  1.0], [0.0, 1.0]), // 7
    v([-0.25, -0.25,  0.25], [ 0.0,  0.0,  1.0], [0.0, 0.0]), // 6
    v([ 0.25,  0.25,  0.25], [ 0.0,  0.0,  1.0], [1.0, 1.0]), // 4
    // -X
    v([-0.25, -0.25,  0.25], [-1.0,  0.0,  0.0], [1.0, 0.0]), // 6
    v([-0.25,  0.25,  0.25], [-1.0,  0.0,  0.0], [1.0, 1.0]), // 7
    v([-0.25, -0.25, -0.25], [-1.0,  0.0,  0.0], [0.0, 0.0]), // 1
    v([-0.25,  0.25, -0.25], [-1.0,  0.0,  0.0], [0.0, 1.0]), // 0
    v([-0.25, -0.25, -0.25], [-1.0,  0.0,  0.0], [0.0, 0.0]), // 1
    v([-0.25,  0.25,  0.25], [-1.0,  0.0,  0.0], [1.0, 1.0]), // 7
    // -Y
    v([ 0.25, -0.25, -0.25], [ 0.0, -1.0,  0.0], [1.0, 0.0]), // 2
    v([ 0.25, -0.25,  0.25], [ 0.0, -1.0,  0.0], [1.0, 1.0]), // 5
    v([-0.25, -0.25, -0.25], [ 0.0, -1.0,  0.0], [0.0, 0.0]), // 1
    v([-0.25, -0.25,  0.25], [ 0.0, -1.0,  0.0], [0.0, 1.0]), // 6
    v([-0.25, -0.25, -0.25], [ 0.0, -1.0,  0.0], [0.0, 0.0]), // 1
    v([ 0.25, -0.25,  0.25], [ 0.0, -1.0,  0.0], [1.0, 1.0]), // 5
    // +Y
    v([ 0.25,  0.25,  0.25], [ 0.0,  1.0,  0.0], [1.0, 0.0]), // 4
    v([ 0.25,  0.25, -0.25], [ 0.0,  1.0,  0.0], [1.0, 1.0]), // 3
    v([-0.25,  0.25,  0.25], [ 0.0,  1.0,  0.0], [0.0, 0.0]), // 7
    v([-0.25,  0.25, -0.25], [ 0.0,  1.0,  0.0], [0.0, 1.0]), // 0
    v([-0.25,  0.25,  0.25], [ 0.0,  1.0,  0.0], [0.0, 0.0]), // 7
    v([ 0.25,  0.25, -0.25], [ 0.0,  1.0,  0.0], [1.0, 1.0]), // 3

    // tetrahedron
    v([2.0,  0.5, -0.2887], [ 0.0,    0.0, -1.0   ], [1.0, 0.0]),
    v([1.5, -0.5, -0.2887], [ 0.0,    0.0, -1.0   ], [0.0, 1.0]),
    v([2.5, -0.5, -0.2887], [ 0.0,    0.0, -1.0   ], [0.0, 0.0]),

    v([2.0,  0.5, -0.2887], [ 0.8165, 0.0,  0.5774], [1.0, 0.0]),
    v([2.5, -0.5, -0.2887], [ 0.8165, 0.0,  0.5774], [0.0, 1.0]),
    v([2.0,  0.0,  0.5774], [ 0.8165, 0.0,  0.5774], [0.0, 0.0]),

    v([2.5, -0.5, -0.2887], [-0.8165, 0.0,  0.5774], [1.0, 0.0]),
    v([1.5, -0.5, -0.2887], [-0.8165, 0.0,  0.5774], [0.0, 1.0]),
    v([2.0,  0.0,  0.5774], [-0.8165, 0.0,  0.5774], [0.0, 0.0]),

    v([1.5, -0.5, -0.2887], [ 0.0,    0.0, -1.0   ], [1.0, 0.0]),
    v([2.0,  0.5, -0.2887], [ 0.0,    0.0, -1.0   ], [0.0, 1.0]),
    v([2.0,  0.0,  0.5774], [ 0.0,    0.0, -1.0   ], [0.0, 0.0]),
];

// zero-area filler collapsed onto the tetrahedron apex, rasterises nothing
const DEGENERATE: Vertex = v([2.0, 0.0, 0.5774], [0.0, 0.0, 1.0], [0.0, 0.0]);

const fn scene() -> [Vertex; VERTEX_COUNT] {
    let mut table = [DEGENERATE; VERTEX_COUNT];
    let mut i = 0;
    while i < GEOMETRY_VERTEX_COUNT {
        table[i] = GEOMETRY[i];
        i += 1;
    }
    table
}

/// The cube followed by the tetrahedron as a plain triangle list.
pub static VERTICES: [Vertex; VERTEX_COUNT] = scene();
