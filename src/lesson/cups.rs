use std::cell::Cell;

/// Guest number shared by every [`impure_cup`] on the page.
///
/// Lives outside the component tree and is bumped while rendering, which is
/// exactly what makes `impure_cup` impure. It is owned by the app and passed
/// down by reference rather than being a free-standing static.
#[derive(Debug, Default)]
pub struct GuestCounter {
    value: Cell<u32>,
}

impl GuestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> u32 {
        let next = self.value.get().saturating_add(1);
        self.value.set(next);
        next
    }

    pub fn current(&self) -> u32 {
        self.value.get()
    }
}

/// Impure: every call changes `guests`, so the same call site shows a
/// different number on each render.
pub fn impure_cup(guests: &GuestCounter) -> String {
    let guest = guests.next();
    cup(guest)
}

/// Pure: output depends on `guest` only.
pub fn cup(guest: u32) -> String {
    format!("Tea cup for guest #{guest}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeaSetView {
    pub impure: Vec<String>,
    pub pure: Vec<String>,
}

/// Three impure cups next to three pure cups for guests 1 to 3.
pub fn tea_set(guests: &GuestCounter) -> TeaSetView {
    TeaSetView {
        impure: vec![impure_cup(guests), impure_cup(guests), impure_cup(guests)],
        pure: vec![cup(1), cup(2), cup(3)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_cup_is_stable() {
        assert_eq!(cup(7), cup(7));
        assert_eq!(cup(7), "Tea cup for guest #7");
    }

    #[test]
    fn impure_cup_counts_up() {
        let guests = GuestCounter::new();
        assert_eq!(impure_cup(&guests), "Tea cup for guest #1");
        assert_eq!(impure_cup(&guests), "Tea cup for guest #2");
        assert_eq!(guests.current(), 2);
    }

    #[test]
    fn second_tea_set_shows_different_impure_cups() {
        let guests = GuestCounter::new();
        let first = tea_set(&guests);
        let second = tea_set(&guests);
        assert_eq!(first.pure, second.pure);
        assert_ne!(first.impure, second.impure);
        assert_eq!(second.impure[0], "Tea cup for guest #4");
    }
}
