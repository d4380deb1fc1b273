pub mod heuristic_resolver;

pub use heuristic_resolver::HeuristicDirectionResolver;
