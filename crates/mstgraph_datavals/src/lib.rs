//! Decoder for DataVals, the compact parameter strings embedded in
//! function and skill level records.
//!
//! # Architecture
//!
//! ```text
//! "[1000,3,3,300,HideMiss:1]"  +  context: FuncType::AddState
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Positional("1000"), ..., Keyed("HideMiss", "1")]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SCHEMA REGISTRY │  → position 0 = Rate, 1 = Turn, 2 = Count, 3 = Value
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VOCABULARY    │  → HideMiss is a scalar field
//! └─────────────────┘
//!          │
//!          ▼
//!   { Rate: 1000, Turn: 3, Count: 3, Value: 300, HideMiss: 1 }
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Bracket-aware splitting into positional and keyed entries
//! - [`vocabulary`] - The fixed set of field names and their value shapes
//! - [`func_type`] - Function types, the context that selects a schema
//! - [`schema`] - Per-type positional schemas
//! - [`value`] - Decoded output
//! - [`parser`] - The decoder itself

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod func_type;
pub mod parser;
pub mod schema;
pub mod tokenizer;
pub mod value;
pub mod vocabulary;

pub use func_type::FuncType;
pub use parser::{Decoder, decode, decode_with_code};
pub use schema::{SchemaRegistry, Slot};
pub use value::{DataVal, DataVals};
pub use vocabulary::{FieldName, FieldShape};
