//! Expiring views of stored components.
//!
//! A [`ComponentHandle`] is issued when a component is added to a store. It
//! records the entity, the kind, and the generation the store stamped on the
//! component. Resolving a handle succeeds only while that exact component is
//! still stored: after a detach, a destroy, or a later re-attach of the same
//! kind, the handle resolves to `None`.

use crate::entity::EntityId;
use crate::type_id::ComponentTypeId;

/// A non-owning, generation-checked reference to a stored component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle {
    entity: EntityId,
    type_id: ComponentTypeId,
    generation: u64,
}

impl ComponentHandle {
    pub(crate) const fn new(entity: EntityId, type_id: ComponentTypeId, generation: u64) -> Self {
        Self {
            entity,
            type_id,
            generation,
        }
    }

    /// The entity whose store issued this handle.
    #[must_use]
    pub const fn entity(self) -> EntityId {
        self.entity
    }

    /// The kind of the referenced component.
    #[must_use]
    pub const fn type_id(self) -> ComponentTypeId {
        self.type_id
    }

    /// The generation stamped on the component when it was added.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}
