//! Integration tests for Layer 1: DataVals
//!
//! Tests for the DataVals decoder: positional schemas, keyed fields,
//! nested dependent values, and fail-closed error reporting.

mod failures;
mod schemas;
