//! The DataVals decoder.
//!
//! Decoding fails closed: an unknown key, a missing value or a
//! non-integer token is an error, never a silently dropped field. A
//! positional value the context's schema does not name is still kept,
//! by position, on the decoded [`DataVals`].

use std::sync::{Arc, LazyLock};

use mstgraph_foundation::{DecodeFailure, Result};

use crate::func_type::FuncType;
use crate::schema::SchemaRegistry;
use crate::tokenizer::{Entry, Rejected, Tokenizer};
use crate::value::{DataVal, DataVals};
use crate::vocabulary::{FieldName, FieldShape};

static STANDARD: LazyLock<Arc<SchemaRegistry>> =
    LazyLock::new(|| Arc::new(SchemaRegistry::standard()));

/// Decodes `raw` with the standard schema table.
///
/// `context` selects the positional schema; `None` uses the default.
///
/// # Errors
///
/// Returns a decode error naming `raw` and the offending token.
pub fn decode(raw: &str, context: Option<FuncType>) -> Result<DataVals> {
    Decoder::standard().decode(raw, context)
}

/// Decodes DataVals strings against a schema registry.
#[derive(Clone, Debug)]
pub struct Decoder {
    registry: Arc<SchemaRegistry>,
}

impl Decoder {
    /// Creates a decoder over a custom registry.
    #[must_use]
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// A decoder sharing the standard registry.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            registry: Arc::clone(&STANDARD),
        }
    }

    /// The registry in use.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Decodes one DataVals string.
    ///
    /// # Errors
    ///
    /// Returns a decode error naming `raw` and the offending token.
    pub fn decode(&self, raw: &str, context: Option<FuncType>) -> Result<DataVals> {
        self.decode_level(raw, context, false)
            .map_err(|rejected| rejected.into_error(raw))
    }

    fn decode_level<'a>(
        &self,
        text: &'a str,
        context: Option<FuncType>,
        nested: bool,
    ) -> std::result::Result<DataVals, Rejected<'a>> {
        let schema = self.registry.schema_for(context);
        let mut vals = DataVals::new();

        // Keyed entries still occupy a position.
        for (position, entry) in Tokenizer::entries(text)?.into_iter().enumerate() {
            let (field, value) = match entry {
                Entry::Keyed { key, value } => {
                    let field = FieldName::lookup(key)
                        .ok_or(Rejected::new(key, DecodeFailure::UnknownField))?;
                    if value.is_empty() {
                        return Err(Rejected::new(key, DecodeFailure::MissingValue));
                    }
                    (field, value)
                }
                Entry::Positional(token) => {
                    // A bare field name is a keyed entry that lost its value.
                    if FieldName::lookup(token).is_some() {
                        return Err(Rejected::new(token, DecodeFailure::MissingValue));
                    }
                    match schema.get(position).copied().flatten() {
                        Some(field) => (field, token),
                        None => {
                            vals.insert_unmapped(position, integer_value(token)?);
                            continue;
                        }
                    }
                }
            };

            let decoded = match field.shape() {
                FieldShape::Scalar => {
                    let items = parse_integers(value)?;
                    match items.as_slice() {
                        [single] => DataVal::Int(*single),
                        _ => return Err(Rejected::new(value, DecodeFailure::ExpectedScalar)),
                    }
                }
                FieldShape::List => DataVal::List(parse_integers(value)?),
                FieldShape::Nested => {
                    if nested {
                        return Err(Rejected::new(value, DecodeFailure::NestingTooDeep));
                    }
                    DataVal::Nested(self.decode_level(value, None, true)?)
                }
            };

            if !vals.insert(field, decoded) {
                return Err(Rejected::new(field.as_str(), DecodeFailure::DuplicateField));
            }
        }

        Ok(vals)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::standard()
    }
}

/// A value with no field to give it a shape: one integer stays scalar.
fn integer_value(value: &str) -> std::result::Result<DataVal, Rejected<'_>> {
    let items = parse_integers(value)?;
    Ok(match items[..] {
        [single] => DataVal::Int(single),
        _ => DataVal::List(items),
    })
}

/// Parses a `/`-delimited integer list. Every piece must be an integer.
fn parse_integers(value: &str) -> std::result::Result<Vec<i64>, Rejected<'_>> {
    value
        .split('/')
        .map(|piece| {
            let piece = piece.trim();
            piece.parse::<i64>().map_err(|_| {
                let token = if piece.is_empty() { value } else { piece };
                Rejected::new(token, DecodeFailure::InvalidInteger)
            })
        })
        .collect()
}

/// Convenience for callers holding an upstream numeric type code.
///
/// # Errors
///
/// Returns a decode error naming `raw` and the offending token.
pub fn decode_with_code(raw: &str, code: i32) -> Result<DataVals> {
    decode(raw, FuncType::from_code(code))
}
