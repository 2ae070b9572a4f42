use anyhow::Result;
use prototypes::Datasets;
use prototypes::prompts::cakes::*;
use prototypes::testing::*;

#[test]
fn stock_per_cake_projects_flavor_and_count() -> Result<()> {
    let data = Datasets::load()?;
    let stock = stock_per_cake(&data.cakes);
    assert_eq!(
        stock[0],
        CakeStock {
            flavor: "dark chocolate".to_string(),
            in_stock: 15
        }
    );
    assert_eq!(stock.len(), data.cakes.len());
    Ok(())
}

#[test]
fn only_in_stock_and_total() -> Result<()> {
    let data = Datasets::load()?;
    let available = only_in_stock(&data.cakes);
    let flavors: Vec<&str> = available.iter().map(|c| c.cake_flavor.as_str()).collect();
    assert_eq!(flavors, vec!["dark chocolate", "yellow", "red velvet", "honey"]);
    assert_all(&available, |c| c.in_stock > 0);

    assert_eq!(total_inventory(&data.cakes), 59);
    assert_eq!(total_inventory(&[]), 0);
    Ok(())
}

#[test]
fn toppings_dedup_in_first_seen_order() -> Result<()> {
    assert_eq!(all_toppings(&cakes_sharing_a_topping()), vec!["a", "b", "c"]);

    let data = Datasets::load()?;
    assert_eq!(
        all_toppings(&data.cakes),
        vec![
            "dutch process cocoa",
            "toasted sugar",
            "smoked sea salt",
            "berries",
            "edible flowers",
            "mixed berries",
            "whipped cream",
            "crystallized ginger",
            "toasted almonds",
        ]
    );
    Ok(())
}

#[test]
fn grocery_list_counts_cakes_per_topping() -> Result<()> {
    let data = Datasets::load()?;
    assert_index_map_eq(
        &grocery_list(&data.cakes),
        &[
            ("dutch process cocoa", 1),
            ("toasted sugar", 3),
            ("smoked sea salt", 3),
            ("berries", 2),
            ("edible flowers", 1),
            ("mixed berries", 1),
            ("whipped cream", 1),
            ("crystallized ginger", 1),
            ("toasted almonds", 1),
        ],
    );
    assert_index_map_eq(&grocery_list(&cakes_sharing_a_topping()), &[("a", 1), ("b", 2), ("c", 1)]);
    Ok(())
}
