use crate::ui::theme::Rgb;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A dark line color (magnitudes) and its bright partner (original signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub dark: Rgb,
    pub neon: Rgb,
}

pub const PAIRS: [ColorPair; 6] = [
    ColorPair { dark: (139, 0, 0), neon: (255, 0, 0) },
    ColorPair { dark: (0, 0, 139), neon: (0, 0, 255) },
    ColorPair { dark: (0, 100, 0), neon: (0, 128, 0) },
    ColorPair { dark: (139, 0, 139), neon: (255, 0, 255) },
    ColorPair { dark: (255, 140, 0), neon: (255, 165, 0) },
    ColorPair { dark: (0, 139, 139), neon: (0, 255, 255) },
];

/// Picks `count` pairs without repeating until every pair has been used once.
pub fn assign_pairs(count: usize, seed: u64) -> Vec<ColorPair> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut used = [false; PAIRS.len()];
    let mut out = Vec::with_capacity(count);

    for _ in 0..count {
        let mut available: Vec<usize> = (0..PAIRS.len()).filter(|&i| !used[i]).collect();
        if available.is_empty() {
            used = [false; PAIRS.len()];
            available = (0..PAIRS.len()).collect();
        }
        let Some(&pick) = available.choose(&mut rng) else { break };
        used[pick] = true;
        out.push(PAIRS[pick]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(pairs: &[ColorPair]) -> bool {
        PAIRS.iter().all(|p| pairs.iter().filter(|q| *q == p).count() == 1)
    }

    #[test]
    fn same_seed_same_colors() {
        assert_eq!(assign_pairs(9, 42), assign_pairs(9, 42));
    }

    #[test]
    fn no_repeat_until_exhausted() {
        let pairs = assign_pairs(12, 3);
        assert_eq!(pairs.len(), 12);
        assert!(is_permutation(&pairs[..6]));
        assert!(is_permutation(&pairs[6..]));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(assign_pairs(0, 1).is_empty());
    }
}
