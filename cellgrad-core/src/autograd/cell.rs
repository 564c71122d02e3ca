use std::fmt;
use std::hash::{Hash, Hasher};

use super::backward;
use super::graph::{CellId, Graph, Node};
use crate::error::CellGradError;

/// Handle to one scalar node of a computation [`Graph`].
///
/// Cloning a `Cell` clones the handle, not the node: every clone reads and
/// writes the same value/gradient slot. Equality and hashing are by identity
/// (graph + [`CellId`]), never by value.
///
/// The plain accessors (`value`, `grad`, `zero_grad`, ...) panic on a stale
/// handle, i.e. a cell dropped by [`Graph::release`]. Operations on a stale
/// cell return [`CellGradError::ContractError`] instead.
#[derive(Clone)]
pub struct Cell {
    graph: Graph,
    id: CellId,
}

impl Cell {
    pub(crate) fn from_parts(graph: Graph, id: CellId) -> Self {
        Cell { graph, id }
    }

    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        let arena = self.graph.borrow();
        match arena.live(self.id) {
            Some(node) => f(node),
            None => panic!(
                "stale cell handle #{} (epoch {}): the cell was released from its graph",
                self.id.index(),
                self.id.epoch()
            ),
        }
    }

    fn with_node_mut<R>(&self, f: impl FnOnce(&mut Node) -> R) -> R {
        let mut arena = self.graph.borrow_mut();
        match arena.live_mut(self.id) {
            Some(node) => f(node),
            None => panic!(
                "stale cell handle #{} (epoch {}): the cell was released from its graph",
                self.id.index(),
                self.id.epoch()
            ),
        }
    }

    /// The forward-computed value.
    ///
    /// # Panics
    /// Panics if the cell was released from its graph.
    pub fn value(&self) -> f64 {
        self.with_node(|node| node.value)
    }

    /// The accumulated gradient (d root / d self after a backward pass).
    ///
    /// # Panics
    /// Panics if the cell was released from its graph.
    pub fn grad(&self) -> f64 {
        self.with_node(|node| node.grad)
    }

    /// Resets the gradient accumulator to 0.
    ///
    /// # Panics
    /// Panics if the cell was released from its graph.
    pub fn zero_grad(&self) {
        self.with_node_mut(|node| node.grad = 0.0)
    }

    /// Overwrites the value of a leaf (used by optimizers to update parameters).
    ///
    /// # Errors
    /// `ContractError` if the cell is not a leaf or is stale.
    pub fn set_value(&self, value: f64) -> Result<(), CellGradError> {
        let mut arena = self.graph.borrow_mut();
        let node = arena.live_mut(self.id).ok_or_else(|| {
            CellGradError::contract("set_value", "the cell was released from its graph")
        })?;
        if !node.op.is_leaf() {
            return Err(CellGradError::contract(
                "set_value",
                format!("cell #{} is the result of `{}`, only leaves can be updated", self.id.index(), node.op),
            ));
        }
        node.value = value;
        Ok(())
    }

    /// `true` if the cell has no operands (input or parameter).
    pub fn is_leaf(&self) -> bool {
        self.with_node(|node| node.op.is_leaf())
    }

    /// Diagnostic label of the producing operation (`"+"`, `"tanh"`, ...), empty for leaves.
    pub fn op_tag(&self) -> String {
        self.with_node(|node| node.op.to_string())
    }

    /// The direct inputs of this cell, deduplicated by identity.
    pub fn operands(&self) -> Vec<Cell> {
        let arena = self.graph.borrow();
        let node = match arena.live(self.id) {
            Some(node) => node,
            None => return Vec::new(),
        };
        let mut operands: Vec<Cell> = Vec::with_capacity(2);
        for index in node.op.operands().into_iter().flatten() {
            let id = arena.id_at(index);
            if operands.iter().all(|c| c.id != id) {
                operands.push(Cell::from_parts(self.graph.clone(), id));
            }
        }
        operands
    }

    pub fn label(&self) -> Option<String> {
        self.with_node(|node| node.label.clone())
    }

    /// Attaches a human-readable name, shown by `Debug`.
    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.with_node_mut(|node| node.label = Some(label))
    }

    /// Builder-style [`Cell::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// The graph this cell lives in.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// `false` once the cell was released from its graph.
    pub fn is_live(&self) -> bool {
        self.graph.borrow().live(self.id).is_some()
    }

    /// Runs the backward pass with this cell as root. See [`backward::backward`].
    pub fn backward(&self) -> Result<(), CellGradError> {
        backward::backward(self)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.graph.ptr_eq(&other.graph) && self.id == other.id
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.graph.as_ptr().hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.graph.borrow();
        match arena.live(self.id) {
            Some(node) => {
                let mut s = f.debug_struct("Cell");
                s.field("id", &self.id.index())
                    .field("value", &node.value)
                    .field("grad", &node.grad);
                if !node.op.is_leaf() {
                    s.field("op", &node.op.to_string());
                }
                if let Some(label) = &node.label {
                    s.field("label", label);
                }
                s.finish()
            }
            None => write!(f, "Cell(#{}, released)", self.id.index()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.graph.borrow();
        match arena.live(self.id) {
            Some(node) => write!(f, "Cell(value={}, grad={})", node.value, node.grad),
            None => write!(f, "Cell(released)"),
        }
    }
}
