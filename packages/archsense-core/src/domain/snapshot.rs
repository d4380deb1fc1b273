//! Frozen model snapshot handed to generators

use super::business_type::BusinessType;
use super::kinds::PortDirection;
use super::model::{PortModel, TypeModel};
use super::port::{ApplicationService, Port};
use super::views::{PortView, ServiceView, TypeView};
use crate::errors::Result;
use serde::Serialize;
use std::sync::Arc;

/// All classified elements of one compilation.
///
/// Only the pipeline creates snapshots, after enrichment. Cloning is cheap and
/// every clone shares the same frozen models.
#[derive(Debug, Clone)]
pub struct ModelSnapshot {
    types: Arc<TypeModel>,
    ports: Arc<PortModel>,
    services: Arc<[ApplicationService]>,
}

#[derive(Serialize)]
struct SnapshotExport<'a> {
    types: &'a [BusinessType],
    ports: &'a [Port],
    services: &'a [ApplicationService],
}

impl ModelSnapshot {
    pub(crate) fn freeze(
        types: Arc<TypeModel>,
        ports: Arc<PortModel>,
        services: Vec<ApplicationService>,
    ) -> Self {
        Self {
            types,
            ports,
            services: services.into(),
        }
    }

    /// Same ports and services over another type model
    pub(crate) fn with_type_model(&self, types: Arc<TypeModel>) -> Self {
        Self {
            types,
            ports: Arc::clone(&self.ports),
            services: Arc::clone(&self.services),
        }
    }

    pub fn type_named(&self, qualified_name: &str) -> Option<TypeView<'_>> {
        self.types.get(qualified_name).map(TypeView::new)
    }

    pub fn types(&self) -> impl Iterator<Item = TypeView<'_>> {
        self.types.iter().map(TypeView::new)
    }

    pub fn aggregate_roots(&self) -> impl Iterator<Item = TypeView<'_>> {
        self.types.aggregate_roots().map(TypeView::new)
    }

    /// Members of the cluster rooted at `root`, the root included
    pub fn cluster_members<'a>(&'a self, root: &'a str) -> impl Iterator<Item = TypeView<'a>> + 'a {
        self.types()
            .filter(move |t| t.aggregate_root() == Some(root))
    }

    pub fn port_named(&self, qualified_name: &str) -> Option<PortView<'_>> {
        self.ports.get(qualified_name).map(PortView::new)
    }

    pub fn ports(&self, direction: PortDirection) -> impl Iterator<Item = PortView<'_>> {
        self.ports.with_direction(direction).map(PortView::new)
    }

    pub fn inbound_ports(&self) -> impl Iterator<Item = PortView<'_>> {
        self.ports(PortDirection::Inbound)
    }

    pub fn outbound_ports(&self) -> impl Iterator<Item = PortView<'_>> {
        self.ports(PortDirection::Outbound)
    }

    pub fn services(&self) -> impl Iterator<Item = ServiceView<'_>> {
        let ports = self.ports.as_ref();
        self.services.iter().map(move |s| ServiceView::new(s, ports))
    }

    /// Services implementing the inbound port `port`
    pub fn services_implementing<'a>(
        &'a self,
        port: &'a str,
    ) -> impl Iterator<Item = ServiceView<'a>> + 'a {
        self.services().filter(move |s| s.implements(port))
    }

    /// Shared handle to the enriched type model
    pub fn type_model(&self) -> &Arc<TypeModel> {
        &self.types
    }

    pub fn port_model(&self) -> &Arc<PortModel> {
        &self.ports
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }

    /// Snapshot as a JSON tree, for embedding in a larger document
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.export())?)
    }

    fn export(&self) -> SnapshotExport<'_> {
        SnapshotExport {
            types: self.types.types(),
            ports: self.ports.ports(),
            services: &self.services,
        }
    }
}
