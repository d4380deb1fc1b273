//! Pre-resolved, read-only inputs of the relationship classifier

use super::cluster_builder::build_clusters;
use super::type_lookup::TypeLookup;
use crate::domain::{BusinessType, TypeModel};
use crate::features::relationships::AggregateClusters;

/// Everything a relationship decision may consult, built once per pass
#[derive(Debug)]
pub struct RelationshipContext<'m> {
    lookup: TypeLookup<'m>,
    clusters: AggregateClusters,
    roots: Vec<&'m BusinessType>,
}

impl<'m> RelationshipContext<'m> {
    pub fn new(model: &'m TypeModel, collection_types: &[String]) -> Self {
        let lookup = TypeLookup::new(model);
        let clusters = build_clusters(&lookup, collection_types);
        let roots = model.aggregate_roots().collect();
        Self {
            lookup,
            clusters,
            roots,
        }
    }

    pub fn lookup(&self) -> &TypeLookup<'m> {
        &self.lookup
    }

    pub fn model(&self) -> &'m TypeModel {
        self.lookup.model()
    }

    pub fn clusters(&self) -> &AggregateClusters {
        &self.clusters
    }

    /// Aggregate roots in model order
    pub fn roots(&self) -> &[&'m BusinessType] {
        &self.roots
    }
}
