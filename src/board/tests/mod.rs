//! Board and game rule tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-count enumeration against reference totals
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
