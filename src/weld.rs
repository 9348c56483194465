use std::collections::{hash_map::Entry, HashMap};

use tracing::debug;

use crate::model::{Triangle, Vertex};

/// The duplicate-free vertex list, in order of first occurrence.
///
/// Deduplication and lookup go through the same map, so a vertex that was
/// merged away always resolves to the slot it was merged into.
#[derive(Debug, Clone, Default)]
pub struct CanonicalTable {
    vertices: Vec<Vertex>,
    slots: HashMap<Vertex, usize>,
}

impl CanonicalTable {
    pub fn build<'v, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'v Vertex>,
    {
        let mut table = CanonicalTable::default();
        let mut seen = 0;
        for vertex in vertices {
            seen += 1;
            if let Entry::Vacant(slot) = table.slots.entry(vertex.clone()) {
                slot.insert(table.vertices.len());
                table.vertices.push(vertex.clone());
            }
        }
        debug!(
            input = seen,
            output = table.vertices.len(),
            "built canonical vertex table"
        );
        table
    }

    /// 0-based position of `vertex`.
    pub fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.slots.get(vertex).copied()
    }

    /// 0-based positions of the corners of `triangle`, in corner order.
    pub fn resolve(&self, triangle: &Triangle) -> Option<[usize; 3]> {
        let [a, b, c] = triangle.corners();
        Some([self.index_of(a)?, self.index_of(b)?, self.index_of(c)?])
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<'t> IntoIterator for &'t CanonicalTable {
    type Item = &'t Vertex;
    type IntoIter = std::slice::Iter<'t, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
