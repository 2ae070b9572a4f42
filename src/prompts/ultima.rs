//! Ultima: weapon damage across the party.

use crate::datasets::{Character, Weapon};
use crate::{Count, PCollection, Sum, from_iter, from_slice};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WeaponTotals {
    pub damage: u32,
    pub range: u32,
}

fn arsenal(weapons: &IndexMap<String, Weapon>) -> PCollection<(String, Weapon)> {
    from_iter(weapons.iter().map(|(name, w)| (name.clone(), *w)))
}

/// Sum of every weapon's damage times the number of characters carrying it.
///
/// A character listing the same weapon twice carries it once.
pub fn total_damage(weapons: &IndexMap<String, Weapon>, characters: &[Character]) -> u64 {
    let carried = from_slice(characters)
        .flat_map(|c| from_slice(&c.weapons).distinct().collect_seq())
        .key_by(|w| w.clone())
        .combine_values(Count);
    arsenal(weapons)
        .join_inner(&carried)
        .map(|(_, (weapon, carriers))| u64::from(weapon.damage) * carriers)
        .combine_globally(Sum::<u64>::new())
}

/// Each character with the summed damage and range of the weapons they carry.
///
/// Weapon names missing from `weapons` are ignored.
pub fn characters_by_total(
    weapons: &IndexMap<String, Weapon>,
    characters: &[Character],
) -> Vec<(String, WeaponTotals)> {
    let arsenal = arsenal(weapons);
    from_slice(characters)
        .map(|c| {
            let totals = from_slice(&c.weapons)
                .map(|w| (w.clone(), ()))
                .join_inner(&arsenal)
                .fold(WeaponTotals::default(), |acc, (_, (_, w))| WeaponTotals {
                    damage: acc.damage + w.damage,
                    range: acc.range + w.range,
                });
            (c.name.clone(), totals)
        })
        .collect_seq()
}
