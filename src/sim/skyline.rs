//! Procedural skyline generation and world scaling

use rand::Rng;

use super::gorilla;
use super::state::{BackgroundBuilding, Building, Player};
use crate::DuelError;
use crate::consts::{BUILDING_GAP, LIGHT_PATTERN_LEN};
use crate::tuning::{Range, Tuning};

/// Generate background and gameplay buildings, left to right.
///
/// `tuning` is validated first, so no randomness is drawn for a bad one.
pub fn generate_skyline<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
) -> Result<(Vec<BackgroundBuilding>, Vec<Building>), DuelError> {
    tuning.validate()?;

    let mut background: Vec<BackgroundBuilding> = Vec::with_capacity(tuning.background_count);
    for _ in 0..tuning.background_count {
        let x = background
            .last()
            .map(|prev| prev.x + prev.width + BUILDING_GAP)
            .unwrap_or(tuning.background_start_x);
        background.push(BackgroundBuilding {
            x,
            width: sample(rng, tuning.background_width),
            height: sample(rng, tuning.background_height),
        });
    }

    let platforms = [
        gorilla::building_index(Player::One, tuning.building_count),
        gorilla::building_index(Player::Two, tuning.building_count),
    ];

    let mut buildings: Vec<Building> = Vec::with_capacity(tuning.building_count);
    for index in 0..tuning.building_count {
        let x = buildings
            .last()
            .map(|prev| prev.right() + BUILDING_GAP)
            .unwrap_or(0.0);
        let width = sample(rng, tuning.building_width);
        let height_range = if platforms.contains(&index) {
            tuning.platform_height
        } else {
            tuning.building_height
        };
        let height = sample(rng, height_range);
        let lights = (0..LIGHT_PATTERN_LEN)
            .map(|_| rng.random_bool(tuning.light_probability))
            .collect();
        buildings.push(Building {
            x,
            width,
            height,
            lights,
        });
    }

    log::debug!(
        "Generated skyline: {} background, {} buildings, platforms at {:?}",
        background.len(),
        buildings.len(),
        platforms
    );

    Ok((background, buildings))
}

/// Uniform sample from `min + u * (max - min)`, u in [0, 1)
fn sample<R: Rng>(rng: &mut R, range: Range) -> f32 {
    range.min + rng.random::<f32>() * (range.max - range.min)
}

/// Pixels per world unit so the whole city spans the viewport width
pub fn calculate_scale(buildings: &[Building], viewport_width: f32) -> f32 {
    match buildings.last() {
        Some(last) => viewport_width / last.right(),
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn skyline(seed: u64) -> (Vec<BackgroundBuilding>, Vec<Building>) {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate_skyline(&mut rng, &Tuning::default()).unwrap()
    }

    #[test]
    fn test_first_positions() {
        let (background, buildings) = skyline(1);
        assert_eq!(background[0].x, -30.0);
        assert_eq!(buildings[0].x, 0.0);
    }

    #[test]
    fn test_platform_heights_in_eight_building_layout() {
        for seed in 0..50 {
            let (_, buildings) = skyline(seed);
            assert_eq!(buildings.len(), 8);
            for (i, b) in buildings.iter().enumerate() {
                if i == 1 || i == 6 {
                    assert!((30.0..=150.0).contains(&b.height), "platform {i}: {}", b.height);
                } else {
                    assert!((40.0..=300.0).contains(&b.height), "building {i}: {}", b.height);
                }
            }
        }
    }

    #[test]
    fn test_light_pattern_length() {
        let (_, buildings) = skyline(3);
        assert!(buildings.iter().all(|b| b.lights.len() == LIGHT_PATTERN_LEN));
    }

    #[test]
    fn test_light_probability_extremes() {
        let mut rng = Pcg32::seed_from_u64(9);
        let dark = Tuning {
            light_probability: 0.0,
            ..Default::default()
        };
        let (_, buildings) = generate_skyline(&mut rng, &dark).unwrap();
        assert!(buildings.iter().flat_map(|b| &b.lights).all(|lit| !lit));

        let bright = Tuning {
            light_probability: 1.0,
            ..Default::default()
        };
        let (_, buildings) = generate_skyline(&mut rng, &bright).unwrap();
        assert!(buildings.iter().flat_map(|b| &b.lights).all(|lit| *lit));
    }

    #[test]
    fn test_platforms_follow_building_count() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning {
            building_count: 12,
            building_height: Range::new(200.0, 300.0),
            ..Default::default()
        };
        let (_, buildings) = generate_skyline(&mut rng, &tuning).unwrap();
        assert!(buildings[1].height <= 150.0);
        assert!(buildings[10].height <= 150.0);
        assert!(buildings[6].height >= 200.0);
    }

    #[test]
    fn test_invalid_tuning_rejected_before_sampling() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning {
            light_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            generate_skyline(&mut rng, &tuning),
            Err(DuelError::InvalidConfiguration { .. })
        ));

        let tuning = Tuning {
            building_count: 3,
            ..Default::default()
        };
        assert!(generate_skyline(&mut rng, &tuning).is_err());

        // The generator state is untouched by the rejected calls
        let mut fresh = Pcg32::seed_from_u64(7);
        assert_eq!(
            generate_skyline(&mut rng, &Tuning::default()).unwrap(),
            generate_skyline(&mut fresh, &Tuning::default()).unwrap()
        );
    }

    #[test]
    fn test_calculate_scale() {
        let (_, buildings) = skyline(11);
        let scale = calculate_scale(&buildings, 1000.0);
        let last = buildings.last().unwrap();
        assert!((scale * last.right() - 1000.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_buildings_ordered_with_fixed_gaps(seed in any::<u64>()) {
            let (background, buildings) = skyline(seed);
            for pair in buildings.windows(2) {
                prop_assert!((pair[1].x - (pair[0].right() + BUILDING_GAP)).abs() < 1e-3);
                prop_assert!(pair[1].x > pair[0].right());
            }
            for pair in background.windows(2) {
                prop_assert!((pair[1].x - (pair[0].x + pair[0].width + BUILDING_GAP)).abs() < 1e-3);
            }
            for b in &buildings {
                prop_assert!((80.0..=130.0).contains(&b.width));
            }
            for b in &background {
                prop_assert!((60.0..=110.0).contains(&b.width));
                prop_assert!((80.0..=350.0).contains(&b.height));
            }
        }

        #[test]
        fn prop_scale_spans_viewport(seed in any::<u64>(), width in 100.0f32..4000.0) {
            let (_, buildings) = skyline(seed);
            let scale = calculate_scale(&buildings, width);
            let city = buildings.last().unwrap().right();
            prop_assert!((scale * city - width).abs() <= width * 1e-5);
        }
    }
}
