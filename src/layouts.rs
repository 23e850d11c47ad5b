use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Number of effort tiers per layout (weights 1, 1.5, 2, 3, 4, 5).
pub const TIER_COUNT: usize = 6;

/// The layout catalog. Variants are declared in report order, which is
/// the order `Layout::iter()` yields them.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Layout {
    #[strum(serialize = "QWERTY")]
    Qwerty,
    Asset,
    Capewell,
    Colemak,
    Colemacs,
    Dvorak,
    Klausler,
    Minimak,
    Norman,
    #[strum(serialize = "QGMLWY")]
    Qgmlwy,
    Workman,
}

/// One effort tier: a weight and the keys assigned to it. Lower weight
/// means less typing effort.
#[derive(Debug, Clone, Copy)]
pub struct EffortTier {
    pub weight: f64,
    pub keys: &'static str,
}

/// Per-layout effort assignment. Tiers are stored ascending by weight;
/// lookups take the first tier containing the character, so a key
/// listed twice resolves to its cheaper tier.
#[derive(Debug, Clone, Copy)]
pub struct EffortTable {
    pub tiers: [EffortTier; TIER_COUNT],
}

impl EffortTable {
    /// Effort weight for `ch`, or `None` when the table does not assign
    /// it a tier. Unassigned characters contribute nothing to a score.
    pub fn tier_for(&self, ch: char) -> Option<f64> {
        self.tiers
            .iter()
            .find(|tier| tier.keys.contains(ch))
            .map(|tier| tier.weight)
    }
}

const fn tier(weight: f64, keys: &'static str) -> EffortTier {
    EffortTier { weight, keys }
}

// Known quirks in the effort data, kept as-is: Dvorak lists 'b' in
// tiers 3 and 5 and has no 'x'; Colemacs lists 'x' in tiers 3 and 4
// and has no 'c'. First-match lookup makes the duplicates harmless.

static QWERTY: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "sdfjkl"),
        tier(1.5, "a;"),
        tier(2.0, "weiovm"),
        tier(3.0, "rughcn,"),
        tier(4.0, "qtpzx./"),
        tier(5.0, "by"),
    ],
};

static ASSET: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "setnio"),
        tier(1.5, "ar"),
        tier(2.0, "wjulvm"),
        tier(3.0, "fpdhck,"),
        tier(4.0, "qzxg;./"),
        tier(5.0, "by"),
    ],
};

static CAPEWELL: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "aeihtn"),
        tier(1.5, "so"),
        tier(2.0, ",.grvm"),
        tier(3.0, "pfcudlw"),
        tier(4.0, "'zxykb;"),
        tier(5.0, "qj"),
    ],
};

static COLEMAK: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "rstnei"),
        tier(1.5, "ao"),
        tier(2.0, "wfyuvm"),
        tier(3.0, "pldhck,"),
        tier(4.0, "qg;zx./"),
        tier(5.0, "bj"),
    ],
};

static COLEMACS: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "aendoi"),
        tier(1.5, "rs"),
        tier(2.0, "wtlfym"),
        tier(3.0, "puhbkjx"),
        tier(4.0, "qg;z,x/"),
        tier(5.0, ".v"),
    ],
};

static DVORAK: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "eouhtn"),
        tier(1.5, "as"),
        tier(2.0, ",.crkm"),
        tier(3.0, "pgdijbw"),
        tier(4.0, "'yl;qvz"),
        tier(5.0, "bf"),
    ],
};

static KLAUSLER: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "aeinth"),
        tier(1.5, "os"),
        tier(2.0, ",umf;v"),
        tier(3.0, "yl'drxg"),
        tier(4.0, "kqcbj.p"),
        tier(5.0, "zw"),
    ],
};

static MINIMAK: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "strneo"),
        tier(1.5, "ap"),
        tier(2.0, "wdilvm"),
        tier(3.0, "fughcj,"),
        tier(4.0, "qk;zx./"),
        tier(5.0, "by"),
    ],
};

static NORMAN: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "setnio"),
        tier(1.5, "ar"),
        tier(2.0, "wdhlvm"),
        tier(3.0, "fgyucp,"),
        tier(4.0, "qzxk;./"),
        tier(5.0, "bj"),
    ],
};

static QGMLWY: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "stnaeo"),
        tier(1.5, "dh"),
        tier(2.0, "gmubvp"),
        tier(3.0, "lfrick,"),
        tier(4.0, "zxqw;./"),
        tier(5.0, "jy"),
    ],
};

static WORKMAN: EffortTable = EffortTable {
    tiers: [
        tier(1.0, "shtneo"),
        tier(1.5, "ai"),
        tier(2.0, "drcupl"),
        tier(3.0, "wfgymk,"),
        tier(4.0, "qb;zx./"),
        tier(5.0, "vj"),
    ],
};

impl Layout {
    /// Resolves a layout name, falling back to [`Layout::Norman`] for
    /// anything unrecognized. Matching is exact and case-sensitive, so
    /// "qwerty" and "" both resolve to Norman.
    pub fn resolve(name: &str) -> Layout {
        Layout::from_str(name).unwrap_or(Layout::Norman)
    }

    /// The static effort table for this layout.
    pub fn effort_table(self) -> &'static EffortTable {
        match self {
            Self::Qwerty => &QWERTY,
            Self::Asset => &ASSET,
            Self::Capewell => &CAPEWELL,
            Self::Colemak => &COLEMAK,
            Self::Colemacs => &COLEMACS,
            Self::Dvorak => &DVORAK,
            Self::Klausler => &KLAUSLER,
            Self::Minimak => &MINIMAK,
            Self::Norman => &NORMAN,
            Self::Qgmlwy => &QGMLWY,
            Self::Workman => &WORKMAN,
        }
    }
}
