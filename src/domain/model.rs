use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A single value belonging to one input set. The value is trimmed on
/// construction and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SetElement {
    value: String,
    set_name: String,
}

impl SetElement {
    pub fn new(value: &str, set_name: &str) -> Self {
        Self {
            value: value.trim().to_string(),
            set_name: set_name.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn is_numeric(&self) -> bool {
        self.value.parse::<f64>().is_ok()
    }

    /// Numeric form of the value, parsed on demand. Never cached.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.parse::<f64>().ok()
    }
}

// Equality is defined by value alone; the originating set is provenance,
// not identity. Two elements with the same text from different sets are equal.
impl PartialEq for SetElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SetElement {}

impl Hash for SetElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for SetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One ordered combination `(first, second)` in a Cartesian product. Both
/// members are required by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedPair {
    first: SetElement,
    second: SetElement,
}

impl OrderedPair {
    pub fn new(first: SetElement, second: SetElement) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &SetElement {
        &self.first
    }

    pub fn second(&self) -> &SetElement {
        &self.second
    }

    pub fn is_numeric_pair(&self) -> bool {
        self.first.is_numeric() && self.second.is_numeric()
    }

    /// Sum of both members, defined only when both are numeric.
    pub fn sum(&self) -> Option<f64> {
        Some(self.first.numeric_value()? + self.second.numeric_value()?)
    }

    /// Product of both members, defined only when both are numeric.
    pub fn product(&self) -> Option<f64> {
        Some(self.first.numeric_value()? * self.second.numeric_value()?)
    }

    /// Provenance form, e.g. `(1 ∈ A, x ∈ B)`.
    pub fn detailed(&self) -> String {
        format!(
            "({} ∈ {}, {} ∈ {})",
            self.first.value(),
            self.first.set_name(),
            self.second.value(),
            self.second.set_name()
        )
    }
}

impl fmt::Display for OrderedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first.value(), self.second.value())
    }
}

/// Counters over a generated product, derived in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductStatistics {
    pub total_pairs: usize,
    pub numeric_pairs: usize,
    pub non_numeric_pairs: usize,
}

impl fmt::Display for ProductStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total pairs: {}", self.total_pairs)?;
        writeln!(f, "Numeric pairs: {}", self.numeric_pairs)?;
        write!(f, "Non-numeric pairs: {}", self.non_numeric_pairs)
    }
}
