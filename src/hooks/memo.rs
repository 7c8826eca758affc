/// Cached result of a pure computation, keyed on its dependencies.
#[derive(Debug, Clone)]
pub struct Memo<D, T> {
    deps: Option<D>,
    value: Option<T>,
    computations: usize,
}

impl<D: PartialEq, T: Clone> Memo<D, T> {
    pub fn new() -> Self {
        Self {
            deps: None,
            value: None,
            computations: 0,
        }
    }

    /// Returns the cached value when `deps` equals the last dependencies,
    /// otherwise runs `compute` and caches its result.
    pub fn get(&mut self, deps: D, compute: impl FnOnce(&D) -> T) -> T {
        if let (Some(cached), Some(value)) = (&self.deps, &self.value) {
            if *cached == deps {
                return value.clone();
            }
        }
        let value = compute(&deps);
        self.computations += 1;
        self.deps = Some(deps);
        self.value = Some(value.clone());
        value
    }

    /// How many times the computation has actually run.
    pub fn computations(&self) -> usize {
        self.computations
    }
}
