use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::cell::Cell;
use super::op::Op;
use crate::error::CellGradError;

/// Stable identity of a cell: its slot in the arena plus the arena epoch the
/// slot was filled in.
///
/// Two distinct cells never share an id, even when they hold equal values.
/// The epoch tells a live cell apart from a stale handle whose slot was
/// released by [`Graph::release`] and later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    index: usize,
    epoch: u32,
}

impl CellId {
    /// Get the raw arena index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

/// One arena slot.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) epoch: u32,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op, epoch: u32) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            epoch,
            label: None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    pub(crate) nodes: Vec<Node>,
    epoch: u32,
}

impl Arena {
    /// Returns the node behind `id` if the handle is still live.
    pub(crate) fn live(&self, id: CellId) -> Option<&Node> {
        self.nodes.get(id.index).filter(|node| node.epoch == id.epoch)
    }

    pub(crate) fn live_mut(&mut self, id: CellId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index).filter(|node| node.epoch == id.epoch)
    }

    fn push(&mut self, value: f64, op: Op) -> CellId {
        let id = CellId {
            index: self.nodes.len(),
            epoch: self.epoch,
        };
        self.nodes.push(Node::new(value, op, self.epoch));
        id
    }

    pub(crate) fn id_at(&self, index: usize) -> CellId {
        CellId {
            index,
            epoch: self.nodes[index].epoch,
        }
    }
}

/// Checkpoint of the arena length, see [`Graph::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    len: usize,
}

impl Mark {
    /// Number of cells that survive a release to this mark.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// An index-based arena holding every cell of one computation graph.
///
/// `Graph` is a cheap handle (`Rc`) to the arena: clones refer to the same
/// cells. Cells are appended in creation order, so every operand sits at a
/// lower index than the cells that consume it and the graph is acyclic by
/// construction.
///
/// The arena is single-threaded. One graph belongs to one forward/backward
/// cycle (or to one training loop, with per-cycle temporaries dropped through
/// [`Graph::mark`] / [`Graph::release`]).
///
/// # Example
///
/// ```rust
/// use cellgrad_core::Graph;
///
/// let graph = Graph::new();
/// let a = graph.leaf(2.0);
/// let b = graph.leaf(-3.0);
/// let c = graph.leaf(10.0);
/// let d = a.mul(&b)?.add(&c)?;
/// d.backward()?;
/// assert_eq!(d.value(), 4.0);
/// assert_eq!(a.grad(), -3.0);
/// # Ok::<(), cellgrad_core::CellGradError>(())
/// ```
#[derive(Clone, Default)]
pub struct Graph {
    inner: Rc<RefCell<Arena>>,
}

impl Graph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a raw number into a new leaf cell.
    pub fn leaf(&self, value: f64) -> Cell {
        self.record(value, Op::Leaf)
    }

    /// Creates a learnable parameter.
    ///
    /// Parameters are ordinary leaves; the separate constructor documents
    /// intent at the call site. Only leaves accept [`Cell::set_value`].
    pub fn parameter(&self, value: f64) -> Cell {
        self.leaf(value)
    }

    /// Wraps every number of `values` into its own leaf.
    pub fn leaves(&self, values: &[f64]) -> Vec<Cell> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Number of cells currently stored in the arena.
    pub fn len(&self) -> usize {
        self.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Captures the current arena length.
    ///
    /// Typical use: create the model parameters, take a mark, then run each
    /// forward/backward/step cycle followed by `release(mark)`.
    pub fn mark(&self) -> Mark {
        Mark { len: self.len() }
    }

    /// Drops every cell created after `mark` and returns how many were dropped.
    ///
    /// Handles to released cells become stale: ops fail with
    /// [`CellGradError::ContractError`] and accessors panic. Cells created
    /// before the mark are untouched.
    pub fn release(&self, mark: Mark) -> usize {
        let mut arena = self.borrow_mut();
        let current = arena.nodes.len();
        if mark.len > current {
            log::warn!(
                "Graph::release: mark ({}) is beyond the arena length ({}); nothing to release.",
                mark.len,
                current
            );
            return 0;
        }
        let released = current - mark.len;
        if released > 0 {
            arena.nodes.truncate(mark.len);
            arena.epoch = arena.epoch.wrapping_add(1);
        }
        log::debug!("Graph::release: dropped {} cells, {} remain", released, mark.len);
        released
    }

    /// Resets the gradient of every cell in the arena to 0.
    pub fn zero_grad(&self) {
        for node in self.borrow_mut().nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    /// `true` if both handles point at the same arena.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn as_ptr(&self) -> *const RefCell<Arena> {
        Rc::as_ptr(&self.inner)
    }

    /// Appends a cell produced by `op` and returns its handle.
    pub(crate) fn record(&self, value: f64, op: Op) -> Cell {
        let id = self.borrow_mut().push(value, op);
        Cell::from_parts(self.clone(), id)
    }

    /// Checks that `id` is still live and returns its arena index.
    pub(crate) fn resolve(&self, id: CellId, operation: &str) -> Result<usize, CellGradError> {
        match self.borrow().live(id) {
            Some(_) => Ok(id.index),
            None => Err(CellGradError::contract(
                operation,
                format!(
                    "cell #{} (epoch {}) was released from its graph",
                    id.index, id.epoch
                ),
            )),
        }
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Arena> {
        self.inner.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Arena> {
        self.inner.borrow_mut()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("cells", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
