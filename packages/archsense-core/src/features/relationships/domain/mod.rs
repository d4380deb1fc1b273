pub mod clusters;
pub mod outcome;

pub use clusters::*;
pub use outcome::*;
