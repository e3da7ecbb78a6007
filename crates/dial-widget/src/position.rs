/// The four stops of the dial, in the order they are laid out and cycled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DialPosition {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl DialPosition {
    pub const ALL: [DialPosition; 4] = [
        DialPosition::Off,
        DialPosition::Low,
        DialPosition::Medium,
        DialPosition::High,
    ];

    pub const fn ordinal(self) -> usize {
        match self {
            DialPosition::Off => 0,
            DialPosition::Low => 1,
            DialPosition::Medium => 2,
            DialPosition::High => 3,
        }
    }

    /// Wraps, so `from_ordinal(i + 4) == from_ordinal(i)`.
    pub const fn from_ordinal(i: usize) -> DialPosition {
        Self::ALL[i % Self::ALL.len()]
    }

    pub const fn next(self) -> DialPosition {
        match self {
            DialPosition::Off => DialPosition::Low,
            DialPosition::Low => DialPosition::Medium,
            DialPosition::Medium => DialPosition::High,
            DialPosition::High => DialPosition::Off,
        }
    }

    /// The last stop; activating it resets the dial.
    pub const fn is_terminal(self) -> bool {
        matches!(self, DialPosition::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_back_after_four_steps() {
        for start in DialPosition::ALL {
            let mut p = start;
            for _ in 0..4 {
                p = p.next();
            }
            assert_eq!(p, start);
        }
    }

    #[test]
    fn next_is_a_bijection() {
        let mut seen: Vec<_> = DialPosition::ALL.iter().map(|p| p.next()).collect();
        seen.sort_by_key(|p| p.ordinal());
        assert_eq!(seen, DialPosition::ALL.to_vec());
        assert_eq!(DialPosition::High.next(), DialPosition::Off);
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, p) in DialPosition::ALL.iter().enumerate() {
            assert_eq!(p.ordinal(), i);
            assert_eq!(DialPosition::from_ordinal(i), *p);
            assert_eq!(DialPosition::from_ordinal(i + 4), *p);
        }
        assert_eq!(DialPosition::default(), DialPosition::Off);
    }

    #[test]
    fn only_high_is_terminal() {
        let terminal: Vec<_> = DialPosition::ALL
            .into_iter()
            .filter(|p| p.is_terminal())
            .collect();
        assert_eq!(terminal, vec![DialPosition::High]);
    }
}
