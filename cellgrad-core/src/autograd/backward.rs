use super::cell::Cell;
use super::graph::Node;
use crate::error::CellGradError;

/// Post-order of the sub-graph reachable from `root`.
///
/// Iterative depth-first traversal over operand edges. The visited set is a
/// `Vec<bool>` indexed by arena slot: every reachable cell sits at an index
/// `<= root`, so it is sized to `root + 1`. Each reachable cell appears exactly
/// once, after all of its operands.
pub(crate) fn post_order(nodes: &[Node], root: usize) -> Vec<usize> {
    let mut visited = vec![false; root + 1];
    let mut order = Vec::new();
    // (index, operands already pushed)
    let mut stack: Vec<(usize, bool)> = vec![(root, false)];

    while let Some((index, expanded)) = stack.pop() {
        if expanded {
            order.push(index);
            continue;
        }
        if visited[index] {
            continue;
        }
        visited[index] = true;
        stack.push((index, true));
        for operand in nodes[index].op.operands().into_iter().rev().flatten() {
            if !visited[operand] {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("post_order: {} cells reachable from #{}", order.len(), root);
    order
}

/// Returns the cells reachable from `root` in topological order: every cell
/// after all of its operands, `root` last.
///
/// # Errors
/// `ContractError` if `root` was released from its graph.
pub fn topological_order(root: &Cell) -> Result<Vec<Cell>, CellGradError> {
    let graph = root.graph();
    let root_index = graph.resolve(root.id(), "topological_order")?;
    let arena = graph.borrow();
    Ok(post_order(&arena.nodes, root_index)
        .into_iter()
        .map(|index| Cell::from_parts(graph.clone(), arena.id_at(index)))
        .collect())
}

/// Performs the backward pass starting from `root`.
///
/// Sets `root`'s gradient to 1, then fires the local derivative rule of every
/// reachable cell exactly once, in reverse topological order. Reverse
/// post-order guarantees that all consumers of a cell have pushed their
/// contribution before the cell's own rule runs, so cells with fan-out see
/// their fully accumulated gradient.
///
/// Gradients are accumulated, never assigned (except the root's): call
/// `zero_grad` between independent passes.
///
/// # Errors
/// `ContractError` if `root` was released from its graph. A successfully
/// built graph cannot fail during backward.
pub fn backward(root: &Cell) -> Result<(), CellGradError> {
    let graph = root.graph();
    let root_index = graph.resolve(root.id(), "backward")?;
    let mut arena = graph.borrow_mut();
    let nodes = &mut arena.nodes;

    let order = post_order(nodes, root_index);
    log::debug!("backward: {} cells reachable from root #{}", order.len(), root_index);

    nodes[root_index].grad = 1.0;
    for &index in order.iter().rev() {
        let node = &nodes[index];
        let (op, value, grad) = (node.op, node.value, node.grad);
        op.propagate(value, grad, nodes);
    }
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
