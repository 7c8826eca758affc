use crate::hooks::Memo;

/// Spoons of spice and cups of milk for `drinkers` people.
pub fn spice_and_milk(drinkers: u32) -> f64 {
    f64::from(drinkers) / 2.0
}

/// Renders the recipe for `drinkers` people.
///
/// The derived quantity goes through `memo`, so it is only recomputed when
/// the drinker count changes.
pub fn render(drinkers: u32, memo: &mut Memo<u32, f64>) -> Vec<String> {
    let half = memo.get(drinkers, |d| spice_and_milk(*d));
    steps(drinkers, half)
}

fn steps(drinkers: u32, half: f64) -> Vec<String> {
    vec![
        format!("Boil {drinkers} cups of water."),
        format!("Add {drinkers} spoons of tea and {half} spoons of spice."),
        format!("Add {half} cups of milk to boil and sugar to taste."),
    ]
}
