//! Globally unique entity names.

use std::fmt;
use std::str::FromStr;

use cactusview_error::Error;

/// A globally unique name for a net, end, atom, chain, or instance.
///
/// Names are opaque 64-bit values handed out by whatever produced the
/// alignment; their canonical string form is the decimal rendering, which
/// is stable and injective and doubles as the DOT node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(u64);

impl Name {
    pub fn new(value: u64) -> Self {
        Name(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Name)
            .map_err(|e| {
                Error::invalid_argument(format!("'{}' is not a valid name", s))
                    .with_operation("name::parse")
                    .set_source(e)
            })
    }
}

impl From<u64> for Name {
    fn from(value: u64) -> Self {
        Name(value)
    }
}
