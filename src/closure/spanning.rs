struct TreeNode {
  vertex: usize,
  children: Vec<usize>,
}

/// One vertex's private spanning tree over its descendants.
///
/// Nodes live in a flat arena; `slots` maps a vertex to its node so that both
/// membership and node lookup are O(1).
pub struct SpanningTree {
  slots: Vec<Option<usize>>,
  nodes: Vec<TreeNode>,
}

impl SpanningTree {
  /// A tree holding only `root`, which trivially reaches itself.
  pub fn new(root: usize, len: usize) -> Self {
    let mut slots = vec![None; len];
    slots[root] = Some(0);
    Self {
      slots,
      nodes: vec![TreeNode { vertex: root, children: vec![] }],
    }
  }

  pub fn root(&self) -> usize {
    self.nodes[0].vertex
  }

  pub fn contains(&self, vertex: usize) -> bool {
    self.slots[vertex].is_some()
  }

  /// Number of vertices in the tree, root included.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Children of `vertex` in this tree; empty if `vertex` is absent.
  pub fn children(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
    self.slots[vertex]
      .into_iter()
      .flat_map(move |node| self.nodes[node].children.iter().map(move |&child| self.nodes[child].vertex))
  }

  /// Hangs `vertex` under `parent`. `parent` must be present, `vertex` must not.
  pub fn graft(&mut self, parent: usize, vertex: usize) {
    debug_assert!(!self.contains(vertex));
    let Some(parent_node) = self.slots[parent] else {
      panic!("graft under {} which is not in the tree of {}", parent, self.root());
    };
    let node = self.nodes.len();
    self.nodes.push(TreeNode { vertex, children: vec![] });
    self.nodes[parent_node].children.push(node);
    self.slots[vertex] = Some(node);
  }

  /// `(parent, child)` vertex pairs of every tree edge.
  pub fn tree_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.nodes.iter().flat_map(move |node| {
      node.children.iter().map(move |&child| (node.vertex, self.nodes[child].vertex))
    })
  }
}
