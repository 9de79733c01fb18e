use serde::{Deserialize, Serialize};

/// Household size from which every composition shares the overflow bucket.
pub const OVERFLOW_MEMBERS: u32 = 5;

pub(crate) const OVERFLOW_KEY: &str = "mas";
pub(crate) const SINGLE_PARENT_PREFIX: &str = "mono_";

/// Lookup keys into the guaranteed-income and net-worth tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseholdKeys {
    pub income_key: String,
    pub wealth_key: String,
}

/// Map a household composition onto benefit table keys.
///
/// A single parent without minors is looked up by the literal composition code with
/// no prefix: the single-parent supplement only exists when there are dependants.
/// Keys that fall outside the table are resolved by [`BenefitTable`](super::BenefitTable).
pub fn classify(adults: u32, minors: u32, single_parent: bool) -> HouseholdKeys {
    let composition = format!("{adults}a{minors}m");
    let bucket = if adults.saturating_add(minors) >= OVERFLOW_MEMBERS {
        OVERFLOW_KEY.to_string()
    } else {
        composition.clone()
    };

    let income_key = match (single_parent, minors) {
        (true, 0) => composition,
        (true, _) => format!("{SINGLE_PARENT_PREFIX}{bucket}"),
        (false, _) => bucket.clone(),
    };

    HouseholdKeys {
        income_key,
        wealth_key: bucket,
    }
}
