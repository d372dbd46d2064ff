//! Timer draws and catch resolution.
//!
//! All randomness enters the engine through these functions, each taking an
//! injected `Rng` so tests can supply fixed sequences.

use super::types::{CaughtFish, FishSpecies, SPECIES};
use crate::constants::{BITE_DELAY_MAX, BITE_DELAY_MIN, BITE_WINDOW_MAX, BITE_WINDOW_MIN};
use rand::Rng;

/// Seconds until a waiting bobber attracts a bite. Uniform in [2.0, 7.0).
pub fn roll_bite_delay(rng: &mut impl Rng) -> f64 {
    rng.gen_range(BITE_DELAY_MIN..BITE_DELAY_MAX)
}

/// Seconds the player has to react once biting. Uniform in [0.5, 1.0).
pub fn roll_bite_window(rng: &mut impl Rng) -> f64 {
    rng.gen_range(BITE_WINDOW_MIN..BITE_WINDOW_MAX)
}

/// Maps a uniform roll in [0, 1) to a species by fixed cumulative thresholds.
///
/// Rarer species take the upper tail: index 0 gets 40%, then 30%, 15%, 10%,
/// and 5% for the rarest. This mapping is the sole reward mechanic, so the
/// thresholds are exact.
pub fn species_for_roll(r: f64) -> FishSpecies {
    if r > 0.95 {
        SPECIES[4]
    } else if r > 0.85 {
        SPECIES[3]
    } else if r > 0.70 {
        SPECIES[2]
    } else if r > 0.40 {
        SPECIES[1]
    } else {
        SPECIES[0]
    }
}

/// Resolves a successful reel-in to a caught fish.
pub fn roll_catch(rng: &mut impl Rng) -> CaughtFish {
    CaughtFish {
        species: species_for_roll(rng.gen::<f64>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_species_thresholds_exact() {
        // The worked examples from the outcome model.
        assert_eq!(species_for_roll(0.96).name, "Goldfish");
        assert_eq!(species_for_roll(0.90).name, "Tuna");
        assert_eq!(species_for_roll(0.80).name, "Red Snapper");
        assert_eq!(species_for_roll(0.50).name, "Mackerel");
        assert_eq!(species_for_roll(0.10).name, "Sardine");
    }

    #[test]
    fn test_species_threshold_boundaries() {
        // Boundaries are strict greater-than, so the exact threshold value
        // falls into the lower bucket.
        assert_eq!(species_for_roll(0.95), SPECIES[3]);
        assert_eq!(species_for_roll(0.85), SPECIES[2]);
        assert_eq!(species_for_roll(0.70), SPECIES[1]);
        assert_eq!(species_for_roll(0.40), SPECIES[0]);
        assert_eq!(species_for_roll(0.0), SPECIES[0]);
    }

    #[test]
    fn test_bite_delay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let delay = roll_bite_delay(&mut rng);
            assert!((2.0..7.0).contains(&delay));
        }
    }

    #[test]
    fn test_bite_window_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let window = roll_bite_window(&mut rng);
            assert!((0.5..1.0).contains(&window));
        }
    }

    #[test]
    fn test_roll_catch_low_roll_is_common() {
        // StepRng with zero increment yields the minimum uniform value.
        let mut rng = StepRng::new(0, 0);
        let fish = roll_catch(&mut rng);
        assert_eq!(fish.species, SPECIES[0]);
    }

    #[test]
    fn test_catch_distribution_roughly_matches() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 5];
        let trials = 20_000;
        for _ in 0..trials {
            let fish = roll_catch(&mut rng);
            let idx = SPECIES.iter().position(|s| *s == fish.species).unwrap();
            counts[idx] += 1;
        }
        let expected = [0.40, 0.30, 0.15, 0.10, 0.05];
        for (i, &count) in counts.iter().enumerate() {
            let observed = count as f64 / trials as f64;
            assert!(
                (observed - expected[i]).abs() < 0.02,
                "species {} observed {} expected {}",
                i,
                observed,
                expected[i]
            );
        }
    }
}
