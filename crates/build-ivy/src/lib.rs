pub mod resolver;

pub use resolver::{DEFAULT_SCOPE, IvyConfigResolver, IvyOptions};
