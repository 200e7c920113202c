//! The fixed vocabulary of DataVals field names.
//!
//! Every keyed entry must name one of these fields, and every positional
//! schema is built from them. Each field declares the value shape it
//! accepts.

use std::fmt;

use serde::{Serialize, Serializer};

/// The value shape a field accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldShape {
    /// A single integer.
    Scalar,
    /// A `/`-delimited list of integers.
    List,
    /// A nested DataVals string, decoded one level deep.
    Nested,
}

macro_rules! vocabulary {
    ($($field:ident => $shape:ident,)*) => {
        /// A known DataVals field name.
        ///
        /// Ordering follows declaration order, which is also the order
        /// decoded fields serialize in.
        #[allow(missing_docs)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum FieldName {
            $($field,)*
        }

        impl FieldName {
            /// Every field, in declaration order.
            pub const ALL: &'static [FieldName] = &[$(FieldName::$field,)*];

            /// The field's name as it appears in DataVals strings.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$field => stringify!($field),)*
                }
            }

            /// The value shape this field accepts.
            #[must_use]
            pub const fn shape(self) -> FieldShape {
                match self {
                    $(Self::$field => FieldShape::$shape,)*
                }
            }

            /// Looks up a field by its exact name.
            #[must_use]
            pub fn lookup(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($field) => Some(Self::$field),)*
                    // Older datasets number the dependent-function key.
                    "DependFuncVals1" => Some(Self::DependFuncVals),
                    _ => None,
                }
            }
        }
    };
}

vocabulary! {
    Rate => Scalar,
    Turn => Scalar,
    Count => Scalar,
    Value => Scalar,
    Value2 => Scalar,
    UseRate => Scalar,
    Target => Scalar,
    Correction => Scalar,
    ParamAdd => Scalar,
    ParamMax => Scalar,
    HideMiss => Scalar,
    OnField => Scalar,
    HideNoEffect => Scalar,
    Unaffected => Scalar,
    ShowState => Scalar,
    AuraEffectId => Scalar,
    ActSet => Scalar,
    ActSetWeight => Scalar,
    ShowQuestNoEffect => Scalar,
    CheckDead => Scalar,
    RatioHPHigh => Scalar,
    RatioHPLow => Scalar,
    SetPassiveFrame => Scalar,
    ProcPassive => Scalar,
    ProcActive => Scalar,
    HideParam => Scalar,
    SkillID => Scalar,
    SkillLV => Scalar,
    ShowCardOnly => Scalar,
    EffectSummon => Scalar,
    RatioHPRangeHigh => Scalar,
    RatioHPRangeLow => Scalar,
    TargetList => List,
    OpponentOnly => Scalar,
    StatusEffectId => Scalar,
    EndBattle => Scalar,
    LoseBattle => Scalar,
    AddIndividualty => Scalar,
    AddLinkageTargetIndividualty => Scalar,
    SameBuffLimitTargetIndividuality => Scalar,
    SameBuffLimitNum => Scalar,
    CheckDuplicate => Scalar,
    OnFieldCount => Scalar,
    TargetRarityList => List,
    DependFuncId => Scalar,
    InvalidHide => Scalar,
    OutEnemyNpcId => Scalar,
    InEnemyNpcId => Scalar,
    OutEnemyPosition => Scalar,
    IgnoreIndividuality => Scalar,
    StarHigher => Scalar,
    ChangeTDCommandType => Scalar,
    ShiftNpcId => Scalar,
    DisplayLastFuncInvalidType => Scalar,
    AndCheckIndividualityList => List,
    WinBattleNotRelatedSurvivalStatus => Scalar,
    ForceSelfInstantDeath => Scalar,
    ChangeMaxBreakGauge => Scalar,
    ParamAddMaxValue => Scalar,
    ParamAddMaxCount => Scalar,
    LossHpChangeDamage => Scalar,
    IncludePassiveIndividuality => Scalar,
    MotionChange => Scalar,
    PopLabelDelay => Scalar,
    NoTargetNoAct => Scalar,
    CardIndex => Scalar,
    CardIndividuality => Scalar,
    WarBoardTakeOverBuff => Scalar,
    Individuality => Scalar,
    EventId => Scalar,
    AddCount => Scalar,
    RateCount => Scalar,
    DependFuncVals => Nested,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
