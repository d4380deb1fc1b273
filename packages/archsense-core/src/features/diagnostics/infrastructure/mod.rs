pub mod counting_sink;
pub mod tracing_sink;

pub use counting_sink::CountingSink;
pub use tracing_sink::TracingSink;
