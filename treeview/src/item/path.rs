//! Index paths into a forest.

use std::fmt;

/// Position of a node inside a forest, as child indices from the top level.
///
/// `[2]` is the third top-level node, `[2, 0]` its first child. Paths are
/// non-owning: they stay valid as long as the forest keeps its shape, which
/// holds for the lifetime of a filter view since only flags are mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of a top-level node.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Path of the parent node, `None` for top-level nodes.
    pub fn parent(&self) -> Option<Self> {
        match self.0.len() {
            0 | 1 => None,
            len => Some(Self(self.0[..len - 1].to_vec())),
        }
    }

    /// Append the given indices.
    pub fn join(&self, rest: &[usize]) -> Self {
        let mut indices = self.0.clone();
        indices.extend_from_slice(rest);
        Self(indices)
    }

    /// Child indices, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth (0 for top-level nodes).
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Check if the path addresses nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for NodePath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for NodePath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_parent() {
        let path = NodePath::root(1).child(3);
        assert_eq!(path.indices(), &[1, 3]);
        assert_eq!(path.depth(), 1);
        assert_eq!(path.parent(), Some(NodePath::root(1)));
        assert_eq!(NodePath::root(1).parent(), None);
    }

    #[test]
    fn test_join() {
        let path = NodePath::root(0).join(&[2, 1]);
        assert_eq!(path, NodePath::from([0, 2, 1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(NodePath::from([0, 2, 1]).to_string(), "/0/2/1");
    }
}
