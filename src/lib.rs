//! Merges vertices of a triangulated OBJ mesh that share the exact same
//! coordinate text, and renumbers the faces against the merged vertex list.
//!
//! ```
//! let out = objweld::weld("v 0 0 0\nv 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap();
//! assert_eq!(out, "v 0 0 0\nv 1 0 0\n\nf 1 1 2\n");
//! ```

pub mod error;
pub mod model;
mod obj;
mod weld;
mod write;

use std::io::Write;

pub use self::error::{Error, Malformation, RecordKind, Result};
pub use self::model::{Mesh, Triangle, Vertex};
pub use self::obj::{parse_lines, parse_obj, parse_reader, FacePolicy, ParseOptions};
pub use self::weld::CanonicalTable;
pub use self::write::{obj_lines, write_obj};

/// Counts describing one weld run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WeldStats {
    pub input_vertices: usize,
    pub output_vertices: usize,
    pub triangles: usize,
}

impl WeldStats {
    pub fn merged(&self) -> usize {
        self.input_vertices.saturating_sub(self.output_vertices)
    }
}

/// A deduplicated mesh, ready to be written.
#[derive(Debug, Clone)]
pub struct Welded {
    pub table: CanonicalTable,
    pub triangles: Vec<Triangle>,
    pub stats: WeldStats,
}

impl Welded {
    pub fn new(mesh: Mesh) -> Self {
        let table = CanonicalTable::build(&mesh.vertices);
        let stats = WeldStats {
            input_vertices: mesh.vertices.len(),
            output_vertices: table.len(),
            triangles: mesh.triangles.len(),
        };
        Welded {
            table,
            triangles: mesh.triangles,
            stats,
        }
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        obj_lines(&self.table, &self.triangles)
    }

    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        write_obj(&self.table, &self.triangles, out)
    }
}

pub fn weld(input: &str) -> Result<String> {
    weld_with(input, &ParseOptions::default())
}

pub fn weld_with(input: &str, options: &ParseOptions) -> Result<String> {
    let welded = Welded::new(parse_obj(input, options)?);
    let mut out = Vec::new();
    welded.write_to(&mut out)?;
    // every token came from a &str, so the output is valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Line-in, line-out form of [`weld_with`]. The separator is an empty string.
pub fn weld_lines<I, S>(lines: I, options: &ParseOptions) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Welded::new(parse_lines(lines, options)?).lines()
}
