use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical reason a set of dependency jars is needed.
///
/// Build systems define their own named scopes ("provided", "optional", ...);
/// each adapter maps a purpose to the scope set that satisfies it. The set of
/// purposes is closed: anything outside compile/runtime/test is a contract
/// violation and is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Compile,
    Runtime,
    Test,
}

impl Purpose {
    /// All purposes, in the order adapters resolve them.
    pub const ALL: [Purpose; 3] = [Purpose::Compile, Purpose::Runtime, Purpose::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Compile => "compile",
            Purpose::Runtime => "runtime",
            Purpose::Test => "test",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
