pub mod resolver;
pub mod scopes;

pub use resolver::{DEFAULT_SCALA_VERSION, SbtConfigResolver};
