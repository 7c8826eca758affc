/// Dependencies of one post-render effect, as of the last commit.
///
/// The render pass never touches a slot. The commit step calls
/// [`EffectSlot::sync`] with the dependencies of the page it just drew and
/// runs the effect only when that returns `true`.
#[derive(Debug, Clone)]
pub struct EffectSlot<D> {
    committed: Option<D>,
    runs: usize,
}

impl<D: PartialEq> EffectSlot<D> {
    pub fn new() -> Self {
        Self {
            committed: None,
            runs: 0,
        }
    }

    /// Records `deps` as committed. Returns `true` when they differ from
    /// the previous commit; the first commit always counts as a change.
    pub fn sync(&mut self, deps: D) -> bool {
        if self.committed.as_ref() == Some(&deps) {
            return false;
        }
        self.committed = Some(deps);
        self.runs += 1;
        true
    }

    pub fn runs(&self) -> usize {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_commit_runs() {
        let mut slot = EffectSlot::new();
        assert!(slot.sync(false));
        assert_eq!(slot.runs(), 1);
    }

    #[test]
    fn unchanged_deps_skip() {
        let mut slot = EffectSlot::new();
        slot.sync(3u32);
        assert!(!slot.sync(3));
        assert!(slot.sync(4));
        assert!(!slot.sync(4));
        assert_eq!(slot.runs(), 2);
    }
}
