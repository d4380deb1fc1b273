/// Port Direction Feature
///
/// Decides whether a boundary interface is inbound (driving) or outbound
/// (driven) from its name and namespace.
///
/// ## Rules (first match wins, case-insensitive)
/// 1. Inbound namespace token
/// 2. Outbound namespace token
/// 3. Inbound name suffix
/// 4. Outbound name suffix
/// 5. Default: OUTBOUND
///
/// ## Architecture
/// - **Domain**: DirectionRule (which rule fired)
/// - **Ports**: PortDirectionResolver trait
/// - **Infrastructure**: HeuristicDirectionResolver
/// - **Application**: resolve_ports (facts → ports, decided once)
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
