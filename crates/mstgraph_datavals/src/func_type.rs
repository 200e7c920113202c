//! Function types: the context that selects a positional schema.

use std::fmt;
use std::str::FromStr;

use mstgraph_foundation::Error;
use serde::{Serialize, Serializer};

macro_rules! func_types {
    ($($variant:ident = $code:literal => $name:literal,)*) => {
        /// A function effect type, identified upstream by a numeric code.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum FuncType {
            $(
                #[doc = concat!("`", $name, "` (code ", stringify!($code), ")")]
                $variant,
            )*
        }

        impl FuncType {
            /// Every known function type.
            pub const ALL: &'static [FuncType] = &[$(FuncType::$variant,)*];

            /// The upstream numeric code.
            #[must_use]
            pub const fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Resolves a numeric code; unknown codes yield `None`.
            #[must_use]
            pub const fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The camelCase display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

func_types! {
    None = 0 => "none",
    AddState = 1 => "addState",
    SubState = 2 => "subState",
    Damage = 3 => "damage",
    DamageNp = 4 => "damageNp",
    GainStar = 5 => "gainStar",
    GainHp = 6 => "gainHp",
    GainNp = 7 => "gainNp",
    LossNp = 8 => "lossNp",
    ShortenSkill = 9 => "shortenSkill",
    ExtendSkill = 10 => "extendSkill",
    ReleaseState = 11 => "releaseState",
    LossHp = 12 => "lossHp",
    InstantDeath = 13 => "instantDeath",
    DamageNpPierce = 14 => "damageNpPierce",
    DamageNpIndividual = 15 => "damageNpIndividual",
    AddStateShort = 16 => "addStateShort",
    GainHpPer = 17 => "gainHpPer",
    DamageNpStateIndividual = 18 => "damageNpStateIndividual",
    HastenNpturn = 19 => "hastenNpturn",
    DelayNpturn = 20 => "delayNpturn",
    DamageNpHpratioHigh = 21 => "damageNpHpratioHigh",
    DamageNpHpratioLow = 22 => "damageNpHpratioLow",
    CardReset = 23 => "cardReset",
    ReplaceMember = 24 => "replaceMember",
    LossHpSafe = 25 => "lossHpSafe",
    DamageNpCounter = 26 => "damageNpCounter",
    DamageNpStateIndividualFix = 27 => "damageNpStateIndividualFix",
    DamageNpSafe = 28 => "damageNpSafe",
    CallServant = 29 => "callServant",
    PtShuffle = 30 => "ptShuffle",
    LossStar = 31 => "lossStar",
    ChangeServant = 32 => "changeServant",
    ChangeBg = 33 => "changeBg",
    DamageValue = 34 => "damageValue",
    Withdraw = 35 => "withdraw",
    FixCommandcard = 36 => "fixCommandcard",
    ShortenBuffturn = 37 => "shortenBuffturn",
    ExtendBuffturn = 38 => "extendBuffturn",
    ShortenBuffcount = 39 => "shortenBuffcount",
    ExtendBuffcount = 40 => "extendBuffcount",
    ChangeBgm = 41 => "changeBgm",
    DisplayBuffstring = 42 => "displayBuffstring",
    Resurrection = 43 => "resurrection",
    GainNpBuffIndividualSum = 44 => "gainNpBuffIndividualSum",
    SetSystemAliveFlag = 45 => "setSystemAliveFlag",
    ForceInstantDeath = 46 => "forceInstantDeath",
    DamageNpRare = 47 => "damageNpRare",
    GainNpFromTargets = 48 => "gainNpFromTargets",
    GainHpFromTargets = 49 => "gainHpFromTargets",
    LossHpPer = 50 => "lossHpPer",
    LossHpPerSafe = 51 => "lossHpPerSafe",
    ShortenUserEquipSkill = 52 => "shortenUserEquipSkill",
    QuickChangeBg = 53 => "quickChangeBg",
    ShiftServant = 54 => "shiftServant",
    DamageNpAndCheckIndividuality = 55 => "damageNpAndCheckIndividuality",
    AbsorbNpturn = 56 => "absorbNpturn",
    OverwriteDeadType = 57 => "overwriteDeadType",
    ForceAllBuffNoact = 58 => "forceAllBuffNoact",
    BreakGaugeUp = 59 => "breakGaugeUp",
    BreakGaugeDown = 60 => "breakGaugeDown",
    ExpUp = 101 => "expUp",
    QpUp = 102 => "qpUp",
    DropUp = 103 => "dropUp",
    FriendPointUp = 104 => "friendPointUp",
    EventDropUp = 105 => "eventDropUp",
    EventDropRateUp = 106 => "eventDropRateUp",
    EventPointUp = 107 => "eventPointUp",
    EventPointRateUp = 108 => "eventPointRateUp",
    TransformServant = 109 => "transformServant",
    QpDropUp = 110 => "qpDropUp",
    ServantFriendshipUp = 111 => "servantFriendshipUp",
    UserEquipExpUp = 112 => "userEquipExpUp",
    ClassDropUp = 113 => "classDropUp",
    EnemyEncountCopyRateUp = 114 => "enemyEncountCopyRateUp",
    EnemyEncountRateUp = 115 => "enemyEncountRateUp",
    EnemyProbDown = 116 => "enemyProbDown",
    GetRewardGift = 117 => "getRewardGift",
    SendSupportFriendPoint = 118 => "sendSupportFriendPoint",
    MovePosition = 119 => "movePosition",
    Revival = 120 => "revival",
    DamageNpIndividualSum = 121 => "damageNpIndividualSum",
    DamageValueSafe = 122 => "damageValueSafe",
    FriendPointUpDuplicate = 123 => "friendPointUpDuplicate",
    MoveState = 124 => "moveState",
    ChangeBgmCostume = 125 => "changeBgmCostume",
}

impl FuncType {
    /// Returns true when a function of this type stores trait IDs in its
    /// `vals` column rather than the IDs of buffs it applies.
    #[must_use]
    pub const fn vals_are_traits(self) -> bool {
        matches!(
            self,
            Self::SubState
                | Self::EventDropUp
                | Self::EventDropRateUp
                | Self::EventPointUp
                | Self::EventPointRateUp
                | Self::EnemyEncountCopyRateUp
                | Self::EnemyEncountRateUp
        )
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FuncType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for FuncType {
    type Err = Error;

    /// Accepts a numeric code, a camelCase name, or an UPPER_SNAKE name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| {
                Error::invalid_argument(format!("unknown function type code: {code}"))
            });
        }
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|ft| ft.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::invalid_argument(format!("unknown function type: {s}")))
    }
}
