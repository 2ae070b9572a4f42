//! Kitties: filter by color, sort by age, and age everyone in place.

use crate::datasets::Kitty;
use crate::from_slice;

/// Years added to every kitty by one call to [`grow_up`].
pub const GROW_UP_YEARS: u32 = 2;

/// Names of the orange kitties, in input order.
pub fn orange_kitty_names(kitties: &[Kitty]) -> Vec<String> {
    from_slice(kitties)
        .filter(|k| k.color == "orange")
        .map(|k| k.name.clone())
        .collect_seq()
}

/// A copy of `kitties` ordered oldest first. Kitties of the same age keep their order.
pub fn sort_by_age(kitties: &[Kitty]) -> Vec<Kitty> {
    from_slice(kitties).sort_by_key_desc(|k| k.age).collect_seq()
}

/// Add [`GROW_UP_YEARS`] to every kitty's age, in place.
///
/// This is the one exercise that mutates its input: the same records come back, and a
/// second call ages them again. Ages stop at `u32::MAX`.
///
/// ```
/// use prototypes::datasets::Kitty;
/// use prototypes::prompts::kitties::grow_up;
///
/// let mut kitties = vec![Kitty { name: "Tiger".into(), age: 5, color: "orange".into() }];
/// grow_up(&mut kitties);
/// assert_eq!(grow_up(&mut kitties)[0].age, 9);
/// ```
pub fn grow_up(kitties: &mut [Kitty]) -> &[Kitty] {
    for kitty in kitties.iter_mut() {
        kitty.age = kitty.age.saturating_add(GROW_UP_YEARS);
    }
    kitties
}
