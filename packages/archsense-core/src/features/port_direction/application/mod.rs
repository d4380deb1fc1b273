pub mod resolve_ports;

pub use resolve_ports::resolve_ports;
