// Domain layer: core value types. No I/O, no external dependencies beyond serde.

pub mod model;
