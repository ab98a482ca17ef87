use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchError;

/// Largest element count the generator accepts. Values are `1..=len`, so they have to fit `i32`.
pub const MAX_LEN: usize = i32::MAX as usize;

// Roughly this share of positions stays in place for `Pattern::MostlyOrdered`. Measured values
// end up somewhat higher, each swap can touch the same position twice.
const MOSTLY_ORDERED_PERCENT: usize = 80;

/// Initial order of the benchmark array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Ordered,
    Reversed,
    MostlyOrdered,
    Random,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Ordered,
        Pattern::Reversed,
        Pattern::MostlyOrdered,
        Pattern::Random,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Ordered => "ordered",
            Pattern::Reversed => "reversed",
            Pattern::MostlyOrdered => "mostly_ordered",
            Pattern::Random => "random",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown pattern '{s}'"))
    }
}

/// Builds a test array of `len` elements, seeding a fresh generator from OS entropy.
pub fn generate(len: usize, pattern: Pattern) -> Result<Vec<i32>, BenchError> {
    let mut rng = StdRng::from_entropy();
    generate_with(len, pattern, &mut rng)
}

/// Builds a test array of `len` elements, drawing randomness from `rng`.
pub fn generate_with<R: Rng>(
    len: usize,
    pattern: Pattern,
    rng: &mut R,
) -> Result<Vec<i32>, BenchError> {
    if len > MAX_LEN {
        return Err(BenchError::InvalidLength { len, max: MAX_LEN });
    }

    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| BenchError::Alloc { len })?;

    if len == 0 {
        return Ok(v);
    }

    // `len <= i32::MAX` was checked above.
    let n = len as i32;

    match pattern {
        Pattern::Ordered => v.extend(1..=n),
        Pattern::Reversed => v.extend((1..=n).rev()),
        Pattern::MostlyOrdered => {
            v.extend(1..=n);

            let swaps = (len / (100 - MOSTLY_ORDERED_PERCENT)).max(1);
            for _ in 0..swaps {
                let a = rng.gen_range(0..len);
                let b = rng.gen_range(0..len);
                v.swap(a, b);
            }
        }
        Pattern::Random => v.extend((0..len).map(|_| rng.gen_range(0..=n))),
    }

    Ok(v)
}
