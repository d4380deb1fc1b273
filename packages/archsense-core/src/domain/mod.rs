/*
 * Domain Layer - Semantic model of an analyzed application
 *
 * HEXAGONAL ARCHITECTURE:
 * - Pure data: business types, ports, services
 * - No heuristics live here; classification is in features/
 * - Snapshot + views are the only surface generators see
 */

pub mod business_type;
pub mod kinds;
pub mod model;
pub mod port;
pub mod snapshot;
pub mod views;

pub use business_type::{BusinessType, Identity, Property, RelationshipMetadata};
pub use kinds::{BusinessTypeKind, PortDirection, RelationKind};
pub use model::{ModelStage, PortModel, TypeModel};
pub use port::{ApplicationService, OperationSignature, Parameter, Port, PortFact};
pub use snapshot::ModelSnapshot;
pub use views::{PortView, PropertyView, ServiceView, TypeView};
