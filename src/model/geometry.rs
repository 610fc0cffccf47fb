use super::vertex::ColorVertex;

pub type Rgb = [f32; 3];

/// Edge length of the cube primitive. Every box in the scene is this cube
/// scaled by its pose, so a scale of 2.0 spans one world unit.
pub const CUBE_EDGE: f32 = 0.5;

/// Corner positions of each cube face, counter-clockwise from outside.
/// Face order: back (z=0), right (x=edge), front (z=edge), left (x=0),
/// top (y=edge), bottom (y=0).
const CUBE_FACES: [[[f32; 3]; 4]; 6] = {
    const E: f32 = CUBE_EDGE;
    [
        [[0.0, 0.0, 0.0], [E, 0.0, 0.0], [E, E, 0.0], [0.0, E, 0.0]],
        [[E, 0.0, 0.0], [E, E, 0.0], [E, 0.0, E], [E, E, E]],
        [[0.0, 0.0, E], [E, 0.0, E], [E, E, E], [0.0, E, E]],
        [[0.0, 0.0, E], [0.0, E, E], [0.0, E, 0.0], [0.0, 0.0, 0.0]],
        [[E, E, E], [E, E, 0.0], [0.0, E, 0.0], [0.0, E, E]],
        [[0.0, 0.0, 0.0], [E, 0.0, 0.0], [E, 0.0, E], [0.0, 0.0, E]],
    ]
};

/// Two triangles per face, relative to the face's first vertex.
const CUBE_FACE_INDICES: [[u32; 6]; 6] = [
    [0, 3, 2, 2, 1, 0],
    [0, 1, 3, 3, 2, 0],
    [0, 1, 2, 2, 3, 0],
    [0, 1, 2, 2, 3, 0],
    [0, 1, 2, 2, 3, 0],
    [0, 1, 2, 2, 3, 0],
];

/// CPU side geometry, uploaded once per mesh kind.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<ColorVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// A cube with its origin at one corner and one colour per face.
    pub fn cube(face_colors: [Rgb; 6]) -> Self {
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (face, color) in face_colors.iter().enumerate() {
            let base = vertices.len() as u32;
            vertices.extend(
                CUBE_FACES[face]
                    .iter()
                    .map(|&position| ColorVertex::new(position, *color)),
            );
            indices.extend(CUBE_FACE_INDICES[face].iter().map(|i| base + i));
        }

        Self { vertices, indices }
    }

    pub fn solid_cube(color: Rgb) -> Self {
        Self::cube([color; 6])
    }

    /// Open-topped cylinder of radius 1 spanning y in [-1, 1], centred on the
    /// y axis. The side wall uses `side`, the bottom disc uses `cap`.
    ///
    /// Vertex layout: top ring, bottom ring (side colour), bottom ring (cap
    /// colour), cap centre.
    pub fn cylinder(segments: u32, side: Rgb, cap: Rgb) -> Self {
        let segments = segments.max(3);
        let ring = |y: f32, color: Rgb| {
            (0..segments).map(move |i| {
                let theta = std::f32::consts::TAU * i as f32 / segments as f32;
                let (sin, cos) = theta.sin_cos();
                ColorVertex::new([cos, y, sin], color)
            })
        };

        let mut vertices: Vec<ColorVertex> = ring(1.0, side).collect();
        vertices.extend(ring(-1.0, side));
        vertices.extend(ring(-1.0, cap));
        vertices.push(ColorVertex::new([0.0, -1.0, 0.0], cap));

        let top = 0;
        let bottom = segments;
        let cap_ring = 2 * segments;
        let centre = 3 * segments;

        let mut indices = Vec::with_capacity(9 * segments as usize);
        for i in 0..segments {
            let next = (i + 1) % segments;
            indices.extend_from_slice(&[
                top + i,
                bottom + next,
                top + next,
                bottom + next,
                top + i,
                bottom + i,
            ]);
        }
        for i in 0..segments {
            let next = (i + 1) % segments;
            indices.extend_from_slice(&[centre, cap_ring + i, cap_ring + next]);
        }

        Self { vertices, indices }
    }
}
