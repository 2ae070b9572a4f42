use anyhow::Result;
use indexmap::IndexMap;
use prototypes::Datasets;
use prototypes::datasets::{Boss, Sidekick, SidekickRef};
use prototypes::prompts::bosses::*;
use prototypes::testing::*;

#[test]
fn loyalty_per_boss() -> Result<()> {
    let data = Datasets::load()?;
    let totals: Vec<(String, u32)> = boss_loyalty(&data.bosses, &data.sidekicks)
        .into_iter()
        .map(|b| (b.boss_name, b.sidekick_loyalty))
        .collect();
    assert_collections_equal(
        &totals,
        &[
            ("Jafar".to_string(), 3),
            ("Ursula".to_string(), 20),
            ("Scar".to_string(), 16),
        ],
    );
    Ok(())
}

#[test]
fn duplicate_and_unknown_sidekicks() {
    let mut bosses = IndexMap::new();
    bosses.insert(
        "hades".to_string(),
        Boss {
            name: "Hades".to_string(),
            sidekicks: vec![
                SidekickRef { name: "Pain".to_string() },
                SidekickRef { name: "Cerberus".to_string() },
            ],
        },
    );
    let sidekick = |loyalty| Sidekick {
        name: "Pain".to_string(),
        boss: "Hades".to_string(),
        loyalty_to_boss: loyalty,
    };
    let totals = boss_loyalty(&bosses, &[sidekick(2), sidekick(5)]);
    assert_eq!(
        totals,
        vec![BossLoyalty {
            boss_name: "Hades".to_string(),
            sidekick_loyalty: 7
        }]
    );
    assert_eq!(boss_loyalty(&bosses, &[])[0].sidekick_loyalty, 0);
}
