/// Traversal progress of a node during one comparison's in-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
  Unvisited,
  VisitingLeft,
  VisitingRight,
  Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Left,
  Right,
}

struct TreeNode {
  children: [Option<usize>; 2],
  depth: usize,
  state: VisitState,
  epoch: u64,
}

impl TreeNode {
  fn new(depth: usize) -> Self {
    Self { children: [None; 2], depth, state: VisitState::Unvisited, epoch: 0 }
  }
}

/// The implicit infinite complete binary tree, materialised only where an
/// element has been pushed. Missing children are empty subtrees.
///
/// States are stamped with the epoch that wrote them; a stamp from any other
/// epoch reads as `Unvisited`. Epochs start at 1.
pub struct Tree {
  nodes: Vec<TreeNode>,
}

impl Tree {
  pub const ROOT: usize = 0;

  pub fn new() -> Self {
    Self { nodes: vec![TreeNode::new(0)] }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn child(&self, node: usize, side: Side) -> Option<usize> {
    self.nodes[node].children[side as usize]
  }

  /// The child on `side`, materialised if it does not exist yet.
  pub fn grow(&mut self, node: usize, side: Side) -> usize {
    if let Some(child) = self.child(node, side) {
      return child;
    }
    let child = self.nodes.len();
    self.nodes.push(TreeNode::new(self.nodes[node].depth + 1));
    self.nodes[node].children[side as usize] = Some(child);
    child
  }

  pub fn depth(&self, node: usize) -> usize {
    self.nodes[node].depth
  }

  pub fn state(&self, node: usize, epoch: u64) -> VisitState {
    let node = &self.nodes[node];
    if node.epoch == epoch {
      node.state
    } else {
      VisitState::Unvisited
    }
  }

  pub fn set_state(&mut self, node: usize, state: VisitState, epoch: u64) {
    let node = &mut self.nodes[node];
    node.state = state;
    node.epoch = epoch;
  }
}

impl Default for Tree {
  fn default() -> Self {
    Self::new()
  }
}
