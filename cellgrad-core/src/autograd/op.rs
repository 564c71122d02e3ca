use std::fmt;

use super::graph::Node;

/// The operation record stored alongside every cell of the arena.
///
/// Each variant carries the arena indices of its operands (and the exponent
/// constant for `Pow`). Together with the forward value of the cell this is
/// everything the local derivative rule in [`Op::propagate`] needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input or parameter. Absorbs gradient, propagates nothing.
    Leaf,
    Add(usize, usize),
    Mul(usize, usize),
    /// Power with a plain constant exponent.
    Pow(usize, f64),
    Exp(usize),
    Ln(usize),
    Tanh(usize),
    Relu(usize),
}

impl Op {
    /// Arena indices of the direct inputs, in recording order.
    ///
    /// A cell multiplied by itself (`a * a`) reports its operand twice; the
    /// local rule relies on it to push both contributions.
    pub fn operands(&self) -> [Option<usize>; 2] {
        match *self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Pow(a, _) | Op::Exp(a) | Op::Ln(a) | Op::Tanh(a) | Op::Relu(a) => [Some(a), None],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Applies the local derivative rule of the cell that owns this record.
    ///
    /// `out_value` and `out_grad` are the owning cell's forward value and its
    /// fully accumulated gradient. Contributions are *added* to the operands'
    /// gradients: a cell consumed by several others collects one term per
    /// consumer.
    pub(crate) fn propagate(&self, out_value: f64, out_grad: f64, nodes: &mut [Node]) {
        match *self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                nodes[a].grad += out_grad;
                nodes[b].grad += out_grad;
            }
            Op::Mul(a, b) => {
                let (va, vb) = (nodes[a].value, nodes[b].value);
                nodes[a].grad += out_grad * vb;
                nodes[b].grad += out_grad * va;
            }
            Op::Pow(a, k) => {
                // a^0 is constant; 0^(k-1) would be inf and give NaN.
                if k != 0.0 {
                    let va = nodes[a].value;
                    nodes[a].grad += out_grad * k * va.powf(k - 1.0);
                }
            }
            Op::Exp(a) => {
                nodes[a].grad += out_grad * out_value;
            }
            Op::Ln(a) => {
                let va = nodes[a].value;
                nodes[a].grad += out_grad * (1.0 / va);
            }
            Op::Tanh(a) => {
                nodes[a].grad += out_grad * (1.0 - out_value * out_value);
            }
            Op::Relu(a) => {
                // Subgradient 0 at the kink.
                if out_value > 0.0 {
                    nodes[a].grad += out_grad;
                }
            }
        }
    }
}

/// Diagnostic tag of the operation (`+`, `*`, `**3`, `tanh`, ...). Leaves print
/// as an empty string.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow(_, k) => write!(f, "**{}", k),
            Op::Exp(_) => write!(f, "exp"),
            Op::Ln(_) => write!(f, "ln"),
            Op::Tanh(_) => write!(f, "tanh"),
            Op::Relu(_) => write!(f, "relu"),
        }
    }
}
