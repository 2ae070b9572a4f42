use crate::datasets::{Boss, Sidekick};
use crate::{Sum, from_iter, from_slice};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BossLoyalty {
    pub boss_name: String,
    pub sidekick_loyalty: u32,
}

/// Total loyalty each boss receives from their sidekicks, in boss order.
///
/// A sidekick name matching several sidekick records counts every one of them; a name
/// with no record adds nothing.
pub fn boss_loyalty(bosses: &IndexMap<String, Boss>, sidekicks: &[Sidekick]) -> Vec<BossLoyalty> {
    let loyalty = from_slice(sidekicks).map(|s| (s.name.clone(), s.loyalty_to_boss));
    from_iter(bosses.values().cloned())
        .map(|boss| BossLoyalty {
            boss_name: boss.name.clone(),
            sidekick_loyalty: from_slice(&boss.sidekicks)
                .map(|kick| (kick.name.clone(), ()))
                .lookup_sum(&loyalty)
                .map(|(_, (_, total))| *total)
                .combine_globally(Sum::<u32>::new()),
        })
        .collect_seq()
}
