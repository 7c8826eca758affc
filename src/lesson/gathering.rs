use crate::lesson::cups::cup;

/// Cups for guests `1..=count`.
///
/// `cups` is created inside this call, so pushing to it is local mutation:
/// nothing outside can observe it until it is returned.
pub fn tea_gathering(count: u32) -> Vec<String> {
    let mut cups = Vec::with_capacity(count as usize);
    for guest in 1..=count {
        cups.push(cup(guest));
    }
    cups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_cup_per_guest() {
        let cups = tea_gathering(4);
        assert_eq!(cups.len(), 4);
        assert_eq!(cups[0], "Tea cup for guest #1");
        assert_eq!(cups[3], "Tea cup for guest #4");
    }

    #[test]
    fn empty_gathering() {
        assert!(tea_gathering(0).is_empty());
    }

    #[test]
    fn repeated_calls_match() {
        assert_eq!(tea_gathering(3), tea_gathering(3));
    }
}
