//! Structural facts produced by the extraction collaborator

use crate::domain::{ApplicationService, BusinessType, PortFact};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything extraction produced for one compilation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    #[serde(default)]
    pub types: Vec<BusinessType>,
    #[serde(default)]
    pub ports: Vec<PortFact>,
    #[serde(default)]
    pub services: Vec<ApplicationService>,
}

impl ExtractedFacts {
    pub fn new(
        types: Vec<BusinessType>,
        ports: Vec<PortFact>,
        services: Vec<ApplicationService>,
    ) -> Self {
        Self {
            types,
            ports,
            services,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.ports.is_empty() && self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusinessTypeKind, PortDirection};

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"{
            "types": [
                {
                    "qualified_name": "com.shop.order.Order",
                    "kind": "ENTITY",
                    "properties": [
                        {
                            "name": "items",
                            "type_ref": {
                                "qualified_name": "java.util.List",
                                "type_arguments": [{ "qualified_name": "com.shop.order.OrderItem" }]
                            },
                            "declaring_type": "com.shop.order.Order"
                        }
                    ],
                    "attributes": [{ "name": "jakarta.persistence.Entity" }]
                }
            ],
            "ports": [
                { "qualified_name": "com.shop.order.OrderRepository", "declared_direction": "OUTBOUND" }
            ]
        }"#;
        let facts = ExtractedFacts::from_json(json).unwrap();
        assert_eq!(facts.types.len(), 1);
        assert_eq!(facts.types[0].kind, BusinessTypeKind::Entity);
        assert!(facts.types[0].attributes.contains("jakarta.persistence.Entity"));
        assert_eq!(
            facts.types[0].properties[0].type_ref.type_arguments[0].qualified_name,
            "com.shop.order.OrderItem"
        );
        assert_eq!(facts.ports[0].declared_direction, Some(PortDirection::Outbound));
        assert!(facts.services.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ExtractedFacts::from_json("{ \"types\": 3 }").is_err());
    }
}
