//! Aggregate clusters from composition edges
//!
//! Nodes are the model's business types (node index == model position).
//! An edge `A → B` means a property of `A` holds `B`, directly or as the
//! element of a collection, or carries existing relationship metadata
//! targeting `B`. Only relationship-eligible kinds are edge targets.

use super::type_lookup::TypeLookup;
use crate::features::relationships::{AggregateClusters, ClusterMembership};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::trace;

/// Compute cluster membership for every type of the lookup's model.
///
/// Each root owns itself. Walks from a root never pass through another
/// root. A type reached from exactly one root is its member, a type reached
/// from several is shared.
pub fn build_clusters(lookup: &TypeLookup<'_>, collection_types: &[String]) -> AggregateClusters {
    let model = lookup.model();
    let graph = composition_graph(lookup, collection_types);

    let is_root: Vec<bool> = model.iter().map(|ty| ty.is_aggregate_root()).collect();
    let mut reached_by: Vec<Vec<usize>> = vec![Vec::new(); model.len()];

    for (root, _) in is_root.iter().enumerate().filter(|(_, root)| **root) {
        let mut visited = vec![false; model.len()];
        visited[root] = true;
        let mut stack = vec![NodeIndex::new(root)];
        while let Some(node) = stack.pop() {
            for next in graph.neighbors(node) {
                let position = next.index();
                if visited[position] || is_root[position] {
                    continue;
                }
                visited[position] = true;
                reached_by[position].push(root);
                stack.push(next);
            }
        }
    }

    let mut clusters = AggregateClusters::new();
    for (position, ty) in model.iter().enumerate() {
        let membership = if is_root[position] {
            ClusterMembership::Root
        } else {
            match reached_by[position].as_slice() {
                [] => continue,
                [root] => ClusterMembership::Member(model.types()[*root].qualified_name.clone()),
                _ => ClusterMembership::Shared,
            }
        };
        trace!("cluster {} -> {:?}", ty.qualified_name, membership);
        clusters.insert(ty.qualified_name.clone(), membership);
    }
    clusters
}

fn composition_graph(lookup: &TypeLookup<'_>, collection_types: &[String]) -> DiGraph<usize, ()> {
    let model = lookup.model();
    let mut graph = DiGraph::with_capacity(model.len(), model.len());
    for position in 0..model.len() {
        graph.add_node(position);
    }

    for (source, ty) in model.iter().enumerate() {
        for property in &ty.properties {
            if ty.is_identity_property(property) {
                continue;
            }
            let element = property.type_ref.shape(collection_types).element;
            let declared = lookup
                .resolve(element)
                .filter(|target| target.kind.is_relationship_target());
            let existing = property
                .relationship
                .as_ref()
                .and_then(|relationship| lookup.resolve_name(&relationship.target));

            for target in declared.into_iter().chain(existing) {
                if let Some(target) = model.position(&target.qualified_name) {
                    if target != source {
                        graph.update_edge(NodeIndex::new(source), NodeIndex::new(target), ());
                    }
                }
            }
        }
    }
    graph
}
