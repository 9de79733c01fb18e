use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::household::{HouseholdKeys, OVERFLOW_KEY};
use super::money::Amount;

const OVERFLOW_INCOME: i64 = 132925;
const SINGLE_PARENT_OVERFLOW_INCOME: i64 = 151051;
const OVERFLOW_NET_WORTH: i64 = 6920230;

/// Guaranteed monthly income per household key (IMV 2024-2025), in cents.
const GUARANTEED_MONTHLY_INCOME: &[(&str, i64)] = &[
    ("1a0m", 60421),
    ("1a1m", 86995),
    ("1a2m", 113569),
    ("1a3m", 140143),
    ("1a4m", 166717),
    ("2a0m", 78547),
    ("2a1m", 96673),
    ("2a2m", 123247),
    ("2a3m", 149821),
    ("3a0m", 96673),
    ("3a1m", 114799),
    ("3a2m", 141373),
    ("4a0m", 114799),
    ("4a1m", 132925),
    (OVERFLOW_KEY, OVERFLOW_INCOME),
    ("mono_1a1m", 91840),
    ("mono_1a2m", 118414),
    ("mono_1a3m", 144988),
    ("mono_1a4m", 171562),
    ("mono_2a0m", 78547),
    ("mono_2a1m", 114799),
    ("mono_2a2m", 141373),
    ("mono_3a0m", 96673),
    ("mono_3a1m", 132925),
    ("mono_4a0m", 114799),
    ("mono_4a1m", 151051),
    ("mono_mas", SINGLE_PARENT_OVERFLOW_INCOME),
];

/// Annual net-worth ceiling per household key, in cents.
const NET_WORTH_LIMIT: &[(&str, i64)] = &[
    ("1a0m", 2035362),
    ("1a1m", 3256579),
    ("1a2m", 4477796),
    ("1a3m", 5699013),
    ("1a4m", 6920230),
    ("2a0m", 3256579),
    ("2a1m", 4477796),
    ("2a2m", 5699013),
    ("2a3m", 6920230),
    ("3a0m", 4477796),
    ("3a1m", 5699013),
    ("3a2m", 6920230),
    ("4a0m", 5699013),
    ("4a1m", 6920230),
    (OVERFLOW_KEY, OVERFLOW_NET_WORTH),
];

/// Amounts resolved for one household.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseholdThresholds {
    pub guaranteed_income: Amount,
    pub net_worth_limit: Amount,
}

/// Immutable reference tables for the minimum-income program.
#[derive(Debug)]
pub struct BenefitTable {
    guaranteed_income: BTreeMap<&'static str, Amount>,
    net_worth_limit: BTreeMap<&'static str, Amount>,
}

impl BenefitTable {
    fn build() -> Self {
        let to_map = |rows: &[(&'static str, i64)]| {
            rows.iter()
                .map(|(key, cents)| (*key, Amount::from_cents(*cents)))
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            guaranteed_income: to_map(GUARANTEED_MONTHLY_INCOME),
            net_worth_limit: to_map(NET_WORTH_LIMIT),
        }
    }

    pub fn guaranteed_income(&self, key: &str) -> Option<Amount> {
        self.guaranteed_income.get(key).copied()
    }

    pub fn net_worth_limit(&self, key: &str) -> Option<Amount> {
        self.net_worth_limit.get(key).copied()
    }

    /// Resolve both amounts, falling back to the overflow buckets for unknown keys.
    pub fn resolve(&self, keys: &HouseholdKeys, single_parent: bool) -> HouseholdThresholds {
        let guaranteed_income = self
            .guaranteed_income(&keys.income_key)
            .unwrap_or(Amount::from_cents(if single_parent {
                SINGLE_PARENT_OVERFLOW_INCOME
            } else {
                OVERFLOW_INCOME
            }));
        let net_worth_limit = self
            .net_worth_limit(&keys.wealth_key)
            .unwrap_or(Amount::from_cents(OVERFLOW_NET_WORTH));

        HouseholdThresholds {
            guaranteed_income,
            net_worth_limit,
        }
    }
}

/// Process-wide table, built on first use and never mutated afterwards.
pub fn benefit_table() -> &'static BenefitTable {
    static TABLE: OnceLock<BenefitTable> = OnceLock::new();
    TABLE.get_or_init(BenefitTable::build)
}
