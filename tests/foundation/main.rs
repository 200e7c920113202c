//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: EntityKind, EntityRef, Region, and Error.

mod errors;
mod kinds;
mod regions;
