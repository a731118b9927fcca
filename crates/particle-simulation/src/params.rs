//! Field parameters for runtime tuning

use particle_physics::{
    ParticleDynamics, BASE_OPACITY, DAMPING, LAYER_OPACITY, MAX_PARTICLE_SIZE, MIN_PARTICLE_SIZE,
    PUSH_FORCE, REPULSION_RADIUS, RESIZE_DEBOUNCE_MS, SATURATION_DISPLACEMENT,
    SMALL_VIEWPORT_BREAKPOINT, SMALL_VIEWPORT_SPACING, SPACING, SPRING_STIFFNESS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    // Lattice
    pub spacing: f32,
    pub small_viewport_spacing: f32,
    pub small_viewport_breakpoint: f32,

    // Pointer
    pub repulsion_radius: f32,
    pub push_force: f32,

    // Spring & integration
    pub spring_stiffness: f32,
    pub damping: f32,

    // Appearance
    pub base_opacity: f32,
    pub saturation_displacement: f32,
    pub min_particle_size: f32,
    pub max_particle_size: f32,
    pub layer_opacity: f32,

    pub resize_debounce_ms: u64,

    /// Fixed seed for particle sizes/colors; random when unset
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            spacing: SPACING,
            small_viewport_spacing: SMALL_VIEWPORT_SPACING,
            small_viewport_breakpoint: SMALL_VIEWPORT_BREAKPOINT,
            repulsion_radius: REPULSION_RADIUS,
            push_force: PUSH_FORCE,
            spring_stiffness: SPRING_STIFFNESS,
            damping: DAMPING,
            base_opacity: BASE_OPACITY,
            saturation_displacement: SATURATION_DISPLACEMENT,
            min_particle_size: MIN_PARTICLE_SIZE,
            max_particle_size: MAX_PARTICLE_SIZE,
            layer_opacity: LAYER_OPACITY,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            seed: None,
        }
    }
}

impl FieldParams {
    /// Lattice spacing for a viewport of the given width
    pub fn spacing_for_width(&self, width: f32) -> f32 {
        if width < self.small_viewport_breakpoint {
            self.small_viewport_spacing
        } else {
            self.spacing
        }
    }

    pub fn dynamics(&self) -> ParticleDynamics {
        ParticleDynamics {
            repulsion_radius: self.repulsion_radius,
            push_force: self.push_force,
            spring_stiffness: self.spring_stiffness,
            damping: self.damping,
            base_opacity: self.base_opacity,
            saturation_displacement: self.saturation_displacement,
        }
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_breakpoint() {
        let params = FieldParams::default();
        assert_eq!(params.spacing_for_width(1024.0), 35.0);
        assert_eq!(params.spacing_for_width(768.0), 35.0);
        assert_eq!(params.spacing_for_width(767.0), 50.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let params: FieldParams =
            serde_json::from_str(r#"{ "push_force": 8.0, "seed": 7 }"#).unwrap();
        assert_eq!(params.push_force, 8.0);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.spacing, SPACING);
        assert_eq!(params.resize_debounce(), Duration::from_millis(100));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "particle-field-params-{}.json",
            std::process::id()
        ));
        let params = FieldParams {
            damping: 0.85,
            seed: Some(42),
            ..Default::default()
        };
        params.save(&path).unwrap();
        let loaded = FieldParams::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(FieldParams::load("/nonexistent/particle-field.json").is_err());
    }
}
