//! Repository-match detection
//!
//! A business type has a repository when some OUTBOUND port either
//! - is named `<TypeSimpleName><suffix>` for a configured repository suffix, or
//! - carries a repository marker attribute and manages the type (mentions it
//!   in an operation signature or a super-interface type argument).

use crate::config::ClassificationConfig;
use crate::domain::{BusinessType, Port, PortModel};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RepositoryMatcher {
    config: Arc<ClassificationConfig>,
}

impl RepositoryMatcher {
    pub fn new(config: Arc<ClassificationConfig>) -> Self {
        Self { config }
    }

    /// First outbound port (model order) acting as `ty`'s repository
    pub fn find_match<'p>(&self, ty: &BusinessType, ports: &'p PortModel) -> Option<&'p Port> {
        ports.outbound().find(|port| self.is_repository_for(port, ty))
    }

    pub fn has_match(&self, ty: &BusinessType, ports: &PortModel) -> bool {
        self.find_match(ty, ports).is_some()
    }

    fn is_repository_for(&self, port: &Port, ty: &BusinessType) -> bool {
        self.named_after(port, ty) || self.marked_for(port, ty)
    }

    fn named_after(&self, port: &Port, ty: &BusinessType) -> bool {
        let port_name = port.simple_name();
        let type_name = ty.simple_name();
        port_name.len() > type_name.len()
            && port_name.is_char_boundary(type_name.len())
            && port_name[..type_name.len()].eq_ignore_ascii_case(type_name)
            && self
                .config
                .repository_suffixes
                .iter()
                .any(|suffix| port_name[type_name.len()..].eq_ignore_ascii_case(suffix))
    }

    fn marked_for(&self, port: &Port, ty: &BusinessType) -> bool {
        port.attributes
            .find_any(&self.config.repository_markers)
            .is_some()
            && port.manages(&ty.qualified_name)
    }
}
