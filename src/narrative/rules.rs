//! Ordered first-match rule ladders.

/// One rung of a ladder: a predicate and the output it produces.
pub struct Rule<C, T> {
    /// Whether this rule applies.
    pub when: fn(&C) -> bool,
    /// Output for a matching context.
    pub then: fn(&C) -> T,
}

/// Rules evaluated in order; the first whose predicate holds wins.
pub struct Ladder<C: 'static, T: 'static> {
    rules: &'static [Rule<C, T>],
}

impl<C, T> Ladder<C, T> {
    /// Build a ladder from a static rule list.
    pub const fn new(rules: &'static [Rule<C, T>]) -> Self {
        Self { rules }
    }

    /// Output of the first matching rule, if any matches.
    pub fn select(&self, ctx: &C) -> Option<T> {
        self.rules.iter().find(|rule| (rule.when)(ctx)).map(|rule| (rule.then)(ctx))
    }

    /// Number of rungs.
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the ladder has no rungs.
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Predicate for the final catch-all rung.
pub const fn always<C>(_: &C) -> bool {
    true
}
