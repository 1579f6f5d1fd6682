//! Line identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a railway line.
///
/// The core consults nothing else about a line: whether loop semantics
/// apply, and which naming convention governs its directions, are keyed on
/// the id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u32);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", LineId(11302)), "11302");
    }

    #[test]
    fn equality() {
        assert_eq!(LineId(11302), LineId(11302));
        assert_ne!(LineId(11302), LineId(11623));
    }
}
