//! Entity identifiers, allocation, and the [`Entity`] facade.
//!
//! An [`EntityId`] is a lightweight `u64` identifier with no inherent data.
//! An [`Entity`] pairs an identifier with the [`ComponentStore`] that owns
//! its components and exposes attach / query / detach / destroy on top of it.

use std::fmt;

use crate::component::{Component, ComponentInstance};
use crate::error::ComponentError;
use crate::handle::ComponentHandle;
use crate::store::ComponentStore;
use crate::type_id::ComponentTypeId;

/// Identifier of a game object.
///
/// Components record their host as an `EntityId`; it carries no ownership.
/// Nothing stops two entities from sharing an identifier, see
/// [`EntityAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    /// Wrap a raw `u64` supplied by the caller.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) entity.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out entity identifiers for [`Entity::spawn`].
///
/// Identifiers are unique only among those one allocator has produced: two
/// allocators both start at 1, and [`Entity::new`] accepts any identifier.
/// Component handles do not rely on entity identifiers being unique; each
/// handle also carries a process-wide generation.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    /// Creates a new allocator. IDs start at 1 (0 is reserved for [`EntityId::INVALID`]).
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates the next identifier. Never returns [`EntityId::INVALID`].
    pub fn allocate(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    /// Returns the number of identifiers allocated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A game object: an identifier plus the components attached to it.
///
/// The entity exclusively owns its [`ComponentStore`]. [`destroy`](Self::destroy)
/// drops every component but leaves the entity usable; there is no separate
/// "dead" state.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    components: ComponentStore,
}

impl Entity {
    /// Create an entity with no components.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            components: ComponentStore::new(id),
        }
    }

    /// Create an entity with a freshly allocated identifier.
    pub fn spawn(allocator: &mut EntityAllocator) -> Self {
        Self::new(allocator.allocate())
    }

    /// This entity's identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    /// Attach a component built by the caller.
    ///
    /// # Errors
    ///
    /// See [`ComponentStore::try_add`]. Passing `None` reports
    /// [`ComponentError::InvalidArgument`].
    pub fn try_attach(
        &mut self,
        component: impl Into<Option<ComponentInstance>>,
    ) -> Result<ComponentHandle, ComponentError> {
        self.components.try_add(component)
    }

    /// Wrap `value` with this entity as owner and attach it.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::DuplicateComponent`] if a `T` is already
    /// attached.
    pub fn attach<T: Component>(&mut self, value: T) -> Result<ComponentHandle, ComponentError> {
        self.try_attach(ComponentInstance::new(self.id, value))
    }

    /// Returns the component of kind `type_id`, if attached.
    #[must_use]
    pub fn try_get_component(&self, type_id: ComponentTypeId) -> Option<&ComponentInstance> {
        self.components.try_get(type_id)
    }

    /// Returns the component of kind `type_id` mutably, if attached.
    #[must_use]
    pub fn try_get_component_mut(
        &mut self,
        type_id: ComponentTypeId,
    ) -> Option<&mut ComponentInstance> {
        self.components.try_get_mut(type_id)
    }

    /// Returns the attached `T`, if any.
    #[must_use]
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.try_get_component(T::component_type_id())?
            .downcast_ref::<T>()
    }

    /// Returns the attached `T` mutably, if any.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.try_get_component_mut(T::component_type_id())?
            .downcast_mut::<T>()
    }

    /// Returns `true` if a `T` is attached.
    #[must_use]
    pub fn has<T: Component>(&self) -> bool {
        self.components.contains(T::component_type_id())
    }

    /// Returns the component `handle` was issued for, as a `T`.
    ///
    /// `None` once that component has been detached or destroyed.
    #[must_use]
    pub fn resolve<T: Component>(&self, handle: &ComponentHandle) -> Option<&T> {
        self.components.resolve(handle)?.downcast_ref::<T>()
    }

    /// Mutable counterpart of [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_mut<T: Component>(&mut self, handle: &ComponentHandle) -> Option<&mut T> {
        self.components.resolve_mut(handle)?.downcast_mut::<T>()
    }

    /// Detach and drop the component of kind `type_id`.
    ///
    /// Returns `true` if a component was detached.
    pub fn try_detach(&mut self, type_id: ComponentTypeId) -> bool {
        self.components.try_remove(type_id)
    }

    /// Detach the attached `T` and hand it back.
    pub fn detach<T: Component>(&mut self) -> Option<T> {
        self.components
            .take(T::component_type_id())?
            .into_inner::<T>()
            .ok()
    }

    /// Drop every attached component. The entity stays usable.
    pub fn destroy(&mut self) {
        self.components.clear();
    }
}
