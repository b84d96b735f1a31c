//! Demo configuration.

use gameobject_math::Vec3;

/// Settings for one run of the player scenario.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Name given to the player game object.
    pub name: String,
    /// Starting position of the player's transform.
    pub position: Vec3,
    /// Uniform scale of the player's transform.
    pub scale: f32,
}

impl DemoConfig {
    /// Create a config for a player called `name` at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Override the starting position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Override the uniform scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DemoConfig::new("player");
        assert_eq!(config.name, "player");
        assert_eq!(config.position, Vec3::ZERO);
        assert_eq!(config.scale, 1.0);
    }

    #[test]
    fn test_config_overrides() {
        let config = DemoConfig::new("player")
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(0.5);
        assert_eq!(config.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.scale, 0.5);
    }
}
