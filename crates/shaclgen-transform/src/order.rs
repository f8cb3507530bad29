//! Dependency order of object types
//!
//! Uses petgraph for the parent graph.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use shaclgen_ast::{Ast, ObjectTypeId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::OrderError;

/// Object type ids ordered so that every parent precedes its children
///
/// Kahn's algorithm over edges from each object type to its parents. Among
/// the object types that are ready at the same time, the one registered
/// first in the AST goes first.
pub fn sort_object_types(ast: &Ast) -> Result<Vec<ObjectTypeId>, OrderError> {
    let mut graph: DiGraph<ObjectTypeId, ()> = DiGraph::new();
    let nodes: Vec<NodeIndex> = ast.object_type_ids().map(|id| graph.add_node(id)).collect();
    for id in ast.object_type_ids() {
        for parent in &ast.object_type(id).parent_object_types {
            graph.update_edge(nodes[id.0], nodes[parent.0], ());
        }
    }

    // parents not yet emitted, per object type
    let mut pending: Vec<usize> = nodes
        .iter()
        .map(|&node| graph.neighbors_directed(node, Direction::Outgoing).count())
        .collect();
    let mut ready: BinaryHeap<Reverse<usize>> = pending
        .iter()
        .enumerate()
        .filter(|(_, &count)| count == 0)
        .map(|(index, _)| Reverse(index))
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(Reverse(index)) = ready.pop() {
        order.push(graph[nodes[index]]);
        for child in graph.neighbors_directed(nodes[index], Direction::Incoming) {
            let child = child.index();
            pending[child] -= 1;
            if pending[child] == 0 {
                ready.push(Reverse(child));
            }
        }
    }

    if order.len() < nodes.len() {
        let cycle = pending
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(index, _)| ast.object_type(ObjectTypeId(index)).name.sanitized_name.clone())
            .collect();
        return Err(OrderError::Cycle(cycle));
    }
    Ok(order)
}
