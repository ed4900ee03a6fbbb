use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker for operations that succeed without producing a value.
///
/// Every `Unit` compares equal to every other, so callers only ever test
/// the outcome's tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_interchangeable() {
        assert_eq!(Unit, Unit);
        assert_eq!(Unit::default(), Unit);
        assert_eq!(Unit.to_string(), "Unit");
    }
}
