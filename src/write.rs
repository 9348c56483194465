use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Triangle;
use crate::weld::CanonicalTable;

/// Resolves every triangle up front so that nothing is emitted for a mesh
/// that cannot be written completely.
fn resolve_faces(table: &CanonicalTable, triangles: &[Triangle]) -> Result<Vec<[usize; 3]>> {
    triangles
        .iter()
        .map(|triangle| {
            table.resolve(triangle).ok_or_else(|| {
                let missing = triangle
                    .corners()
                    .iter()
                    .find(|v| table.index_of(v).is_none())
                    .cloned()
                    .unwrap_or_else(|| triangle.corners()[0].clone());
                Error::UnknownVertex(missing)
            })
        })
        .collect()
}

fn face_line([a, b, c]: [usize; 3]) -> String {
    format!("f {} {} {}", a + 1, b + 1, c + 1)
}

/// The output as lines: vertex block, one empty line, face block.
pub fn obj_lines(table: &CanonicalTable, triangles: &[Triangle]) -> Result<Vec<String>> {
    let faces = resolve_faces(table, triangles)?;

    let mut lines = Vec::with_capacity(table.len() + 1 + faces.len());
    lines.extend(table.iter().map(|v| format!("v {}", v)));
    lines.push(String::new());
    lines.extend(faces.into_iter().map(face_line));
    Ok(lines)
}

pub fn write_obj<W: Write>(table: &CanonicalTable, triangles: &[Triangle], mut out: W) -> Result<()> {
    let faces = resolve_faces(table, triangles)?;

    for v in table {
        writeln!(out, "v {}", v)?;
    }
    writeln!(out)?;
    for face in &faces {
        writeln!(out, "{}", face_line(*face))?;
    }
    out.flush()?;

    debug!(vertices = table.len(), faces = faces.len(), "wrote mesh");
    Ok(())
}
