//! The player scenario.
//!
//! 1. Spawn a player entity.
//! 2. Attach a transform, a name, and a velocity.
//! 3. Read the transform back by kind identifier and log its position.
//! 4. Detach the transform twice (the second detach finds nothing).
//! 5. Destroy the player and check that nothing is left.

use anyhow::{Context, Result, ensure};
use tracing::{info, warn};

use gameobject_component::{Component, Entity, EntityAllocator};
use gameobject_math::{Transform, Vec3};

use crate::components::{Name, Velocity};
use crate::config::DemoConfig;

/// What the scenario observed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// Position read back from the attached transform.
    pub position: Vec3,
    /// Result of the first transform detach.
    pub first_detach: bool,
    /// Result of the repeated transform detach.
    pub second_detach: bool,
    /// Whether the transform handle stopped resolving after the detach.
    pub handle_expired: bool,
    /// Components still attached after destroy.
    pub remaining_after_destroy: usize,
}

/// Run the scenario once.
///
/// # Errors
///
/// Returns an error if any attach is rejected or if the store does not
/// behave as the scenario expects.
pub fn run(config: &DemoConfig) -> Result<ScenarioReport> {
    let mut allocator = EntityAllocator::new();
    let mut player = Entity::spawn(&mut allocator);
    info!(entity = %player.id(), name = %config.name, "spawned player");

    let transform = Transform::from_position(config.position).with_uniform_scale(config.scale);
    let handle = player.attach(transform)?;
    player.attach(Name::new(config.name.clone()))?;
    player.attach(Velocity::new(0.0, 0.0, 0.0))?;

    let position = player
        .try_get_component(Transform::component_type_id())
        .and_then(|component| component.downcast_ref::<Transform>())
        .map(|transform| transform.position)
        .context("transform missing right after attach")?;
    info!(x = position.x, y = position.y, z = position.z, "player position");

    let name = player.get::<Name>().map_or("", |name| name.value.as_str());
    let speed = player
        .get::<Velocity>()
        .map_or(0.0, |velocity| velocity.linear.length());
    info!(player = name, speed, components = player.components().len(), "player attached");

    let first_detach = player.try_detach(Transform::component_type_id());
    ensure!(first_detach, "failed to detach transform from {}", player.id());
    info!(entity = %player.id(), "transform detached");

    let second_detach = player.try_detach(Transform::component_type_id());
    if second_detach {
        warn!(entity = %player.id(), "transform detached twice");
    }

    let handle_expired = player.resolve::<Transform>(&handle).is_none();

    player.destroy();
    let remaining_after_destroy = player.components().len();
    info!(
        entity = %player.id(),
        remaining = remaining_after_destroy,
        "player destroyed"
    );

    Ok(ScenarioReport {
        position,
        first_detach,
        second_detach,
        handle_expired,
        remaining_after_destroy,
    })
}
