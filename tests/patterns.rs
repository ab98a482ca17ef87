use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_timer_rs::patterns::{generate, generate_with, MAX_LEN};
use sort_timer_rs::{BenchError, Pattern};

fn rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

#[test]
fn ordered_is_one_based() {
    let v = generate_with(5, Pattern::Ordered, &mut rng()).unwrap();
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn reversed_counts_down_to_one() {
    let v = generate_with(5, Pattern::Reversed, &mut rng()).unwrap();
    assert_eq!(v, [5, 4, 3, 2, 1]);
}

#[test]
fn mostly_ordered_is_a_permutation() {
    let len = 1_000;
    let mut v = generate_with(len, Pattern::MostlyOrdered, &mut rng()).unwrap();

    let in_place = v
        .iter()
        .enumerate()
        .filter(|&(i, &x)| x == i as i32 + 1)
        .count();
    // 50 swaps move at most 100 elements.
    assert!(in_place >= len - 100);

    v.sort_unstable();
    assert!(v.iter().copied().eq(1..=len as i32));
}

#[test]
fn mostly_ordered_single_element() {
    let v = generate_with(1, Pattern::MostlyOrdered, &mut rng()).unwrap();
    assert_eq!(v, [1]);
}

#[test]
fn random_stays_in_inclusive_bounds() {
    let len = 10;
    for _ in 0..50 {
        let v = generate(len, Pattern::Random).unwrap();
        assert_eq!(v.len(), len);
        assert!(v.iter().all(|&x| (0..=len as i32).contains(&x)));
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = generate_with(100, Pattern::Random, &mut rng()).unwrap();
    let b = generate_with(100, Pattern::Random, &mut rng()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_for_zero_len() {
    for pattern in Pattern::ALL {
        assert!(generate(0, pattern).unwrap().is_empty());
    }
}

#[test]
fn rejects_unrepresentable_len() {
    let err = generate(MAX_LEN + 1, Pattern::Ordered).unwrap_err();
    assert_eq!(
        err,
        BenchError::InvalidLength {
            len: MAX_LEN + 1,
            max: MAX_LEN
        }
    );
}

#[test]
fn pattern_names_round_trip() {
    for pattern in Pattern::ALL {
        assert_eq!(pattern.as_str().parse::<Pattern>(), Ok(pattern));
        assert_eq!(pattern.to_string(), pattern.as_str());
    }
    assert!("sorted".parse::<Pattern>().is_err());
}
