//! Saturation/lightness profiles that palette generation scores against.

const INDEX_MIN: usize = 0;
const INDEX_TARGET: usize = 1;
const INDEX_MAX: usize = 2;

const INDEX_WEIGHT_SATURATION: usize = 0;
const INDEX_WEIGHT_LIGHTNESS: usize = 1;
const INDEX_WEIGHT_POPULATION: usize = 2;

const WEIGHT_SATURATION: f32 = 0.24;
const WEIGHT_LIGHTNESS: f32 = 0.52;
const WEIGHT_POPULATION: f32 = 0.24;

const TARGET_DARK_LIGHTNESS: f32 = 0.26;
const MAX_DARK_LIGHTNESS: f32 = 0.45;

const MIN_LIGHT_LIGHTNESS: f32 = 0.55;
const TARGET_LIGHT_LIGHTNESS: f32 = 0.74;

const MIN_NORMAL_LIGHTNESS: f32 = 0.3;
const TARGET_NORMAL_LIGHTNESS: f32 = 0.5;
const MAX_NORMAL_LIGHTNESS: f32 = 0.7;

const TARGET_MUTED_SATURATION: f32 = 0.3;
const MAX_MUTED_SATURATION: f32 = 0.4;

const TARGET_VIBRANT_SATURATION: f32 = 1.0;
const MIN_VIBRANT_SATURATION: f32 = 0.35;

/// A color profile: the saturation and lightness ranges a swatch must fall
/// inside to qualify, the values the score rewards proximity to, and the
/// weighting between the score terms.
///
/// Exclusive targets claim their selected color so later targets in the same
/// generation pass cannot pick it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    saturation: [f32; 3],
    lightness: [f32; 3],
    weights: [f32; 3],
    exclusive: bool,
}

impl Target {
    /// Saturated colors of medium lightness.
    pub const VIBRANT: Target = Target {
        saturation: [MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0],
        lightness: [
            MIN_NORMAL_LIGHTNESS,
            TARGET_NORMAL_LIGHTNESS,
            MAX_NORMAL_LIGHTNESS,
        ],
        weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
        exclusive: true,
    };

    /// Saturated, light colors.
    pub const LIGHT_VIBRANT: Target = Target {
        saturation: [MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0],
        lightness: [MIN_LIGHT_LIGHTNESS, TARGET_LIGHT_LIGHTNESS, 1.0],
        weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
        exclusive: true,
    };

    /// Saturated, dark colors.
    pub const DARK_VIBRANT: Target = Target {
        saturation: [MIN_VIBRANT_SATURATION, TARGET_VIBRANT_SATURATION, 1.0],
        lightness: [0.0, TARGET_DARK_LIGHTNESS, MAX_DARK_LIGHTNESS],
        weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
        exclusive: true,
    };

    /// Desaturated colors of medium lightness.
    pub const MUTED: Target = Target {
        saturation: [0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION],
        lightness: [
            MIN_NORMAL_LIGHTNESS,
            TARGET_NORMAL_LIGHTNESS,
            MAX_NORMAL_LIGHTNESS,
        ],
        weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
        exclusive: true,
    };

    /// Desaturated, light colors.
    pub const LIGHT_MUTED: Target = Target {
        saturation: [0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION],
        lightness: [MIN_LIGHT_LIGHTNESS, TARGET_LIGHT_LIGHTNESS, 1.0],
        weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
        exclusive: true,
    };

    /// Desaturated, dark colors.
    pub const DARK_MUTED: Target = Target {
        saturation: [0.0, TARGET_MUTED_SATURATION, MAX_MUTED_SATURATION],
        lightness: [0.0, TARGET_DARK_LIGHTNESS, MAX_DARK_LIGHTNESS],
        weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
        exclusive: true,
    };

    /// Lowest saturation a qualifying swatch may have.
    pub fn minimum_saturation(&self) -> f32 {
        self.saturation[INDEX_MIN]
    }

    /// Saturation the score rewards proximity to.
    pub fn target_saturation(&self) -> f32 {
        self.saturation[INDEX_TARGET]
    }

    /// Highest saturation a qualifying swatch may have.
    pub fn maximum_saturation(&self) -> f32 {
        self.saturation[INDEX_MAX]
    }

    /// Lowest lightness a qualifying swatch may have.
    pub fn minimum_lightness(&self) -> f32 {
        self.lightness[INDEX_MIN]
    }

    /// Lightness the score rewards proximity to.
    pub fn target_lightness(&self) -> f32 {
        self.lightness[INDEX_TARGET]
    }

    /// Highest lightness a qualifying swatch may have.
    pub fn maximum_lightness(&self) -> f32 {
        self.lightness[INDEX_MAX]
    }

    /// Whether a selected color is withheld from later targets.
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// `[saturation, lightness, population]` weights scaled to sum to one.
    pub(crate) fn normalized_weights(&self) -> [f32; 3] {
        let sum: f32 = self.weights.iter().filter(|w| **w > 0.0).sum();
        if sum == 0.0 {
            return self.weights;
        }
        let mut weights = self.weights;
        for weight in &mut weights {
            if *weight > 0.0 {
                *weight /= sum;
            }
        }
        weights
    }
}

/// Builder for custom [`Target`] profiles.
#[derive(Debug, Clone)]
pub struct TargetBuilder {
    target: Target,
}

impl TargetBuilder {
    /// Start from a neutral profile: full saturation and lightness ranges
    /// centered on 0.5, default weights, exclusive.
    pub fn new() -> Self {
        Self {
            target: Target {
                saturation: [0.0, 0.5, 1.0],
                lightness: [0.0, 0.5, 1.0],
                weights: [WEIGHT_SATURATION, WEIGHT_LIGHTNESS, WEIGHT_POPULATION],
                exclusive: true,
            },
        }
    }

    /// Start from an existing profile.
    pub fn from_target(target: Target) -> Self {
        Self { target }
    }

    /// Set the minimum qualifying saturation, clamped to `0.0..=1.0`.
    pub fn minimum_saturation(mut self, value: f32) -> Self {
        self.target.saturation[INDEX_MIN] = value.clamp(0.0, 1.0);
        self
    }

    /// Set the saturation the score rewards proximity to.
    pub fn target_saturation(mut self, value: f32) -> Self {
        self.target.saturation[INDEX_TARGET] = value.clamp(0.0, 1.0);
        self
    }

    /// Set the maximum qualifying saturation.
    pub fn maximum_saturation(mut self, value: f32) -> Self {
        self.target.saturation[INDEX_MAX] = value.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum qualifying lightness.
    pub fn minimum_lightness(mut self, value: f32) -> Self {
        self.target.lightness[INDEX_MIN] = value.clamp(0.0, 1.0);
        self
    }

    /// Set the lightness the score rewards proximity to.
    pub fn target_lightness(mut self, value: f32) -> Self {
        self.target.lightness[INDEX_TARGET] = value.clamp(0.0, 1.0);
        self
    }

    /// Set the maximum qualifying lightness.
    pub fn maximum_lightness(mut self, value: f32) -> Self {
        self.target.lightness[INDEX_MAX] = value.clamp(0.0, 1.0);
        self
    }

    /// Set the weight of saturation proximity in the score.
    pub fn saturation_weight(mut self, value: f32) -> Self {
        self.target.weights[INDEX_WEIGHT_SATURATION] = value.max(0.0);
        self
    }

    /// Set the weight of lightness proximity in the score.
    pub fn lightness_weight(mut self, value: f32) -> Self {
        self.target.weights[INDEX_WEIGHT_LIGHTNESS] = value.max(0.0);
        self
    }

    /// Set the weight of relative population in the score.
    pub fn population_weight(mut self, value: f32) -> Self {
        self.target.weights[INDEX_WEIGHT_POPULATION] = value.max(0.0);
        self
    }

    /// Set whether the selected color is withheld from later targets.
    pub fn exclusive(mut self, value: bool) -> Self {
        self.target.exclusive = value;
        self
    }

    /// Finish the profile.
    pub fn build(self) -> Target {
        self.target
    }
}

impl Default for TargetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ranges_are_ordered() {
        for target in [
            Target::VIBRANT,
            Target::LIGHT_VIBRANT,
            Target::DARK_VIBRANT,
            Target::MUTED,
            Target::LIGHT_MUTED,
            Target::DARK_MUTED,
        ] {
            assert!(target.minimum_saturation() <= target.target_saturation());
            assert!(target.target_saturation() <= target.maximum_saturation());
            assert!(target.minimum_lightness() <= target.target_lightness());
            assert!(target.target_lightness() <= target.maximum_lightness());
            assert!(target.is_exclusive());
        }
    }

    #[test]
    fn test_default_weights_normalize_to_identity() {
        let weights = Target::VIBRANT.normalized_weights();
        assert!((weights[0] - 0.24).abs() < 1e-6);
        assert!((weights[1] - 0.52).abs() < 1e-6);
        assert!((weights[2] - 0.24).abs() < 1e-6);
    }

    #[test]
    fn test_custom_weights_normalize() {
        let target = TargetBuilder::new()
            .saturation_weight(1.0)
            .lightness_weight(1.0)
            .population_weight(2.0)
            .build();
        let weights = target.normalized_weights();
        assert!((weights.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!((weights[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_builder_clamps_ranges() {
        let target = TargetBuilder::new()
            .minimum_saturation(-0.5)
            .maximum_lightness(2.0)
            .build();
        assert_eq!(target.minimum_saturation(), 0.0);
        assert_eq!(target.maximum_lightness(), 1.0);
    }

    #[test]
    fn test_builder_from_target_round_trips() {
        let rebuilt = TargetBuilder::from_target(Target::MUTED).build();
        assert_eq!(rebuilt, Target::MUTED);
    }
}
