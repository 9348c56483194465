use std::fmt;

/// A vertex position, stored as the coordinate text it was read from.
///
/// Equality is exact text equality: `0` and `0.0` are different vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    coords: [String; 3],
}

impl Vertex {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Vertex {
            coords: [x.into(), y.into(), z.into()],
        }
    }

    pub fn x(&self) -> &str {
        &self.coords[0]
    }

    pub fn y(&self) -> &str {
        &self.coords[1]
    }

    pub fn z(&self) -> &str {
        &self.coords[2]
    }

    pub fn coords(&self) -> [&str; 3] {
        [self.x(), self.y(), self.z()]
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.z())
    }
}

/// Three corners, held by value rather than by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    corners: [Vertex; 3],
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Triangle { corners: [a, b, c] }
    }

    pub fn corners(&self) -> &[Vertex; 3] {
        &self.corners
    }
}

/// A parsed mesh. `vertices` is in file order and still contains duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}
