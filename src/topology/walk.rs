use super::{EdgeId, TopologyStore};

/// Iterator over the edges of one face loop, in traversal order from `first`.
#[derive(Debug, Clone)]
pub struct FaceEdges<'a> {
    store: &'a TopologyStore,
    first: Option<EdgeId>,
    current: Option<EdgeId>,
    remaining: usize,
}

impl<'a> FaceEdges<'a> {
    pub(super) fn new(store: &'a TopologyStore, first: Option<EdgeId>) -> Self {
        Self {
            store,
            first,
            current: first,
            remaining: store.edge_count(),
        }
    }
}

impl Iterator for FaceEdges<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let current = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        self.current = self
            .store
            .edge(current)
            .ok()
            .and_then(|e| e.next)
            .filter(|next| Some(*next) != self.first);
        Some(current)
    }
}
