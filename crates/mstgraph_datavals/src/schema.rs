//! Positional schemas: which field each positional slot decodes into.
//!
//! The meaning of `[1000,3,3,300]` depends entirely on the function type
//! consuming it. A [`SchemaRegistry`] maps each function type to an
//! ordered slot list; types without an entry use the registry's default
//! schema. The table is data, not code, so deployments can extend or
//! override it as upstream documents new types.

use std::collections::HashMap;

use crate::func_type::FuncType;
use crate::vocabulary::FieldName;

/// One positional slot: a field, or a reserved position kept unnamed.
pub type Slot = Option<FieldName>;

/// The positional schema shared by the damage-vs-trait NP family.
const DAMAGE_NP_INDIVIDUAL: &[Slot] = &[
    Some(FieldName::Rate),
    Some(FieldName::Value),
    Some(FieldName::Target),
    Some(FieldName::Correction),
];

const ADD_STATE: &[Slot] = &[
    Some(FieldName::Rate),
    Some(FieldName::Turn),
    Some(FieldName::Count),
    Some(FieldName::Value),
    Some(FieldName::UseRate),
    Some(FieldName::Value2),
];

const SUB_STATE: &[Slot] = &[
    Some(FieldName::Rate),
    Some(FieldName::Value),
    Some(FieldName::Value2),
];

const EVENT_DROP_UP: &[Slot] = &[Some(FieldName::Individuality), Some(FieldName::AddCount)];

const EVENT_DROP_RATE_UP: &[Slot] = &[Some(FieldName::Individuality), Some(FieldName::RateCount)];

const EVENT_POINT_UP: &[Slot] = &[
    Some(FieldName::Individuality),
    Some(FieldName::Value),
    Some(FieldName::EventId),
];

// Slot 0 carries an upstream class filter with no field name.
const CLASS_DROP_UP: &[Slot] = &[None, Some(FieldName::RateCount), Some(FieldName::EventId)];

const ENEMY_ENCOUNT: &[Slot] = &[
    Some(FieldName::Rate),
    Some(FieldName::Individuality),
    Some(FieldName::RateCount),
];

const DEFAULT: &[Slot] = &[
    Some(FieldName::Rate),
    Some(FieldName::Value),
    Some(FieldName::Target),
];

/// Maps function types to their positional schemas.
#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    /// Schema for types without an entry, and for absent context.
    default: Vec<Slot>,
    /// Per-type schemas.
    by_type: HashMap<FuncType, Vec<Slot>>,
}

impl SchemaRegistry {
    /// Creates a registry with only a default schema.
    #[must_use]
    pub fn new(default: Vec<Slot>) -> Self {
        Self {
            default,
            by_type: HashMap::new(),
        }
    }

    /// The table of schemas known for the upstream dataset.
    #[must_use]
    pub fn standard() -> Self {
        let families: [(&[FuncType], &[Slot]); 8] = [
            (
                &[
                    FuncType::DamageNpIndividual,
                    FuncType::DamageNpStateIndividual,
                    FuncType::DamageNpStateIndividualFix,
                    FuncType::DamageNpIndividualSum,
                    FuncType::DamageNpRare,
                    FuncType::DamageNpAndCheckIndividuality,
                    FuncType::DamageNpHpratioLow,
                    FuncType::DamageNpHpratioHigh,
                ],
                DAMAGE_NP_INDIVIDUAL,
            ),
            (&[FuncType::AddState, FuncType::AddStateShort], ADD_STATE),
            (&[FuncType::SubState], SUB_STATE),
            (&[FuncType::EventDropUp], EVENT_DROP_UP),
            (&[FuncType::EventDropRateUp], EVENT_DROP_RATE_UP),
            (&[FuncType::EventPointUp, FuncType::EventPointRateUp], EVENT_POINT_UP),
            (&[FuncType::ClassDropUp], CLASS_DROP_UP),
            (
                &[FuncType::EnemyEncountCopyRateUp, FuncType::EnemyEncountRateUp],
                ENEMY_ENCOUNT,
            ),
        ];

        let mut registry = Self::new(DEFAULT.to_vec());
        for (types, slots) in families {
            for &func_type in types {
                registry.by_type.insert(func_type, slots.to_vec());
            }
        }
        registry
    }

    /// Returns a registry with `slots` registered for `func_type`,
    /// replacing any existing schema for that type.
    #[must_use]
    pub fn with_schema(mut self, func_type: FuncType, slots: Vec<Slot>) -> Self {
        self.by_type.insert(func_type, slots);
        self
    }

    /// Returns a registry with a different default schema.
    #[must_use]
    pub fn with_default(mut self, slots: Vec<Slot>) -> Self {
        self.default = slots;
        self
    }

    /// Resolves the schema for a context. `None` selects the default.
    #[must_use]
    pub fn schema_for(&self, context: Option<FuncType>) -> &[Slot] {
        context
            .and_then(|ft| self.by_type.get(&ft))
            .unwrap_or(&self.default)
    }

    /// Returns true if `func_type` has its own schema.
    #[must_use]
    pub fn has_schema(&self, func_type: FuncType) -> bool {
        self.by_type.contains_key(&func_type)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
