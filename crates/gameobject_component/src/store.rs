//! Per-entity component storage.
//!
//! A [`ComponentStore`] owns every component attached to one entity, keyed
//! by [`ComponentTypeId`]. It holds at most one component per kind.
//!
//! Each insertion is stamped with a generation taken from one process-wide
//! counter that only ever increases. No two insertions share a generation,
//! on any store, even when two entities use the same [`EntityId`]. Handles
//! carry that generation, so a handle never resolves to a component other
//! than the one it was issued for.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::component::ComponentInstance;
use crate::entity::EntityId;
use crate::error::ComponentError;
use crate::handle::ComponentHandle;
use crate::type_id::ComponentTypeId;

/// Generation for the next insertion, shared by every store.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// One stored component and the generation it was inserted with.
#[derive(Debug)]
struct Slot {
    generation: u64,
    component: ComponentInstance,
}

/// The owning collection of components for a single entity.
#[derive(Debug)]
pub struct ComponentStore {
    /// The entity this store belongs to.
    entity: EntityId,
    /// Components keyed by kind.
    slots: HashMap<ComponentTypeId, Slot>,
}

impl ComponentStore {
    /// Create an empty store for `entity`.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            slots: HashMap::new(),
        }
    }

    /// The entity this store belongs to.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Take ownership of `component`.
    ///
    /// Accepts a [`ComponentInstance`] or an `Option` of one.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::InvalidArgument`] if `component` is `None`.
    /// - [`ComponentError::ForeignOwner`] if the component names another
    ///   entity as its owner.
    /// - [`ComponentError::DuplicateComponent`] if a component of the same
    ///   kind is already stored. The stored component is kept.
    ///
    /// On error the store is unchanged and the rejected component is dropped.
    pub fn try_add(
        &mut self,
        component: impl Into<Option<ComponentInstance>>,
    ) -> Result<ComponentHandle, ComponentError> {
        let component: Option<ComponentInstance> = component.into();
        let Some(component) = component else {
            debug!(entity = %self.entity, "rejected absent component");
            return Err(ComponentError::InvalidArgument {
                entity: self.entity,
            });
        };

        if component.owner() != self.entity {
            debug!(
                entity = %self.entity,
                owner = %component.owner(),
                component = component.type_name(),
                "rejected component owned by another entity"
            );
            return Err(ComponentError::ForeignOwner {
                entity: self.entity,
                owner: component.owner(),
                type_name: component.type_name(),
            });
        }

        let type_id = component.identifier();
        if self.slots.contains_key(&type_id) {
            debug!(
                entity = %self.entity,
                %type_id,
                component = component.type_name(),
                "rejected duplicate component"
            );
            return Err(ComponentError::DuplicateComponent {
                entity: self.entity,
                type_id,
                type_name: component.type_name(),
            });
        }

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        debug!(
            entity = %self.entity,
            %type_id,
            component = component.type_name(),
            generation,
            "attached component"
        );
        self.slots.insert(
            type_id,
            Slot {
                generation,
                component,
            },
        );
        Ok(ComponentHandle::new(self.entity, type_id, generation))
    }

    /// Returns the component of kind `type_id`, if present.
    #[must_use]
    pub fn try_get(&self, type_id: ComponentTypeId) -> Option<&ComponentInstance> {
        self.slots.get(&type_id).map(|slot| &slot.component)
    }

    /// Returns the component of kind `type_id` mutably, if present.
    #[must_use]
    pub fn try_get_mut(&mut self, type_id: ComponentTypeId) -> Option<&mut ComponentInstance> {
        self.slots.get_mut(&type_id).map(|slot| &mut slot.component)
    }

    /// Returns a handle to the component of kind `type_id`, if present.
    #[must_use]
    pub fn handle(&self, type_id: ComponentTypeId) -> Option<ComponentHandle> {
        self.slots
            .get(&type_id)
            .map(|slot| ComponentHandle::new(self.entity, type_id, slot.generation))
    }

    /// Returns the component `handle` was issued for, or `None` if it has
    /// since been removed or replaced, or the handle belongs to another
    /// entity.
    #[must_use]
    pub fn resolve(&self, handle: &ComponentHandle) -> Option<&ComponentInstance> {
        if handle.entity() != self.entity {
            return None;
        }
        self.slots
            .get(&handle.type_id())
            .filter(|slot| slot.generation == handle.generation())
            .map(|slot| &slot.component)
    }

    /// Mutable counterpart of [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_mut(&mut self, handle: &ComponentHandle) -> Option<&mut ComponentInstance> {
        if handle.entity() != self.entity {
            return None;
        }
        self.slots
            .get_mut(&handle.type_id())
            .filter(|slot| slot.generation == handle.generation())
            .map(|slot| &mut slot.component)
    }

    /// Remove and drop the component of kind `type_id`.
    ///
    /// Returns `true` if a component was removed.
    pub fn try_remove(&mut self, type_id: ComponentTypeId) -> bool {
        self.take(type_id).is_some()
    }

    /// Remove the component of kind `type_id` and hand it back.
    pub fn take(&mut self, type_id: ComponentTypeId) -> Option<ComponentInstance> {
        let slot = self.slots.remove(&type_id)?;
        debug!(
            entity = %self.entity,
            %type_id,
            component = slot.component.type_name(),
            generation = slot.generation,
            "detached component"
        );
        Some(slot.component)
    }

    /// Remove and drop every component.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        debug!(
            entity = %self.entity,
            count = self.slots.len(),
            "cleared components"
        );
        self.slots.clear();
    }

    /// Returns `true` if a component of kind `type_id` is stored.
    #[must_use]
    pub fn contains(&self, type_id: ComponentTypeId) -> bool {
        self.slots.contains_key(&type_id)
    }

    /// Returns the number of stored components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no components are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over the kinds currently stored, in no
    /// particular order.
    pub fn type_ids(&self) -> impl Iterator<Item = ComponentTypeId> + '_ {
        self.slots.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;

    #[derive(Debug, Clone, PartialEq)]
    struct Health {
        current: f32,
        max: f32,
    }

    impl Component for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Velocity {
        x: f32,
        y: f32,
    }

    impl Component for Velocity {
        fn type_name() -> &'static str {
            "Velocity"
        }
    }

    const OWNER: EntityId = EntityId::from_raw(1);

    fn health(current: f32) -> ComponentInstance {
        ComponentInstance::new(
            OWNER,
            Health {
                current,
                max: 100.0,
            },
        )
    }

    fn velocity() -> ComponentInstance {
        ComponentInstance::new(OWNER, Velocity { x: 1.0, y: 0.0 })
    }

    fn health_of(store: &ComponentStore) -> Option<&Health> {
        store
            .try_get(Health::component_type_id())?
            .downcast_ref::<Health>()
    }

    #[test]
    fn test_add_and_get() {
        let mut store = ComponentStore::new(OWNER);
        let handle = store.try_add(health(80.0)).unwrap();
        assert_eq!(handle.entity(), OWNER);
        assert_eq!(handle.type_id(), Health::component_type_id());
        assert_eq!(health_of(&store).unwrap().current, 80.0);
        assert_eq!(store.len(), 1);
        assert!(store.contains(Health::component_type_id()));
    }

    #[test]
    fn test_get_before_add_is_absent() {
        let store = ComponentStore::new(OWNER);
        assert!(store.try_get(Health::component_type_id()).is_none());
        assert!(store.handle(Health::component_type_id()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_none_on_empty_store() {
        let mut store = ComponentStore::new(OWNER);
        assert_eq!(
            store.try_add(None),
            Err(ComponentError::InvalidArgument { entity: OWNER })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_none_leaves_populated_store_unchanged() {
        let mut store = ComponentStore::new(OWNER);
        let handle = store.try_add(health(80.0)).unwrap();
        assert!(store.try_add(None).is_err());
        assert_eq!(store.len(), 1);
        assert!(store.resolve(&handle).is_some());
        assert_eq!(health_of(&store).unwrap().current, 80.0);
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let mut store = ComponentStore::new(OWNER);
        let handle = store.try_add(health(80.0)).unwrap();
        let err = store.try_add(health(5.0)).unwrap_err();
        assert_eq!(
            err,
            ComponentError::DuplicateComponent {
                entity: OWNER,
                type_id: Health::component_type_id(),
                type_name: "Health",
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(health_of(&store).unwrap().current, 80.0);
        assert!(store.resolve(&handle).is_some());
    }

    #[test]
    fn test_foreign_owner_rejected() {
        let mut store = ComponentStore::new(OWNER);
        let stranger = EntityId::from_raw(2);
        let err = store
            .try_add(ComponentInstance::new(stranger, Velocity { x: 0.0, y: 0.0 }))
            .unwrap_err();
        assert_eq!(
            err,
            ComponentError::ForeignOwner {
                entity: OWNER,
                owner: stranger,
                type_name: "Velocity",
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_distinct_kinds_coexist() {
        let mut store = ComponentStore::new(OWNER);
        store.try_add(health(80.0)).unwrap();
        store.try_add(velocity()).unwrap();
        assert_eq!(store.len(), 2);

        let mut kinds: Vec<_> = store.type_ids().collect();
        kinds.sort();
        let mut expected = vec![Health::component_type_id(), Velocity::component_type_id()];
        expected.sort();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_remove_succeeds_once() {
        let mut store = ComponentStore::new(OWNER);
        store.try_add(health(80.0)).unwrap();
        assert!(store.try_remove(Health::component_type_id()));
        assert!(!store.try_remove(Health::component_type_id()));
        assert!(store.try_get(Health::component_type_id()).is_none());
    }

    #[test]
    fn test_remove_unknown_kind_has_no_effect() {
        let mut store = ComponentStore::new(OWNER);
        store.try_add(health(80.0)).unwrap();
        assert!(!store.try_remove(Velocity::component_type_id()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_take_returns_component() {
        let mut store = ComponentStore::new(OWNER);
        store.try_add(health(42.0)).unwrap();
        let taken = store.take(Health::component_type_id()).unwrap();
        assert_eq!(taken.into_inner::<Health>().unwrap().current, 42.0);
        assert!(store.take(Health::component_type_id()).is_none());
    }

    #[test]
    fn test_clear_is_repeatable() {
        let mut store = ComponentStore::new(OWNER);
        store.try_add(health(80.0)).unwrap();
        store.try_add(velocity()).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.try_get(Health::component_type_id()).is_none());
        assert!(store.try_get(Velocity::component_type_id()).is_none());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_on_empty_store() {
        let mut store = ComponentStore::new(OWNER);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut store = ComponentStore::new(OWNER);
        store.try_add(health(80.0)).unwrap();
        store
            .try_get_mut(Health::component_type_id())
            .and_then(ComponentInstance::downcast_mut::<Health>)
            .unwrap()
            .current = 12.0;
        assert_eq!(health_of(&store).unwrap().current, 12.0);
    }

    #[test]
    fn test_handle_expires_after_remove() {
        let mut store = ComponentStore::new(OWNER);
        let handle = store.try_add(health(80.0)).unwrap();
        assert_eq!(store.handle(Health::component_type_id()), Some(handle));
        assert!(store.try_remove(Health::component_type_id()));
        assert!(store.resolve(&handle).is_none());
        assert!(store.resolve_mut(&handle).is_none());
    }

    #[test]
    fn test_handle_expires_after_clear() {
        let mut store = ComponentStore::new(OWNER);
        let handle = store.try_add(health(80.0)).unwrap();
        store.clear();
        assert!(store.resolve(&handle).is_none());
    }

    #[test]
    fn test_handle_does_not_follow_replacement() {
        let mut store = ComponentStore::new(OWNER);
        let old = store.try_add(health(80.0)).unwrap();
        store.clear();
        let new = store.try_add(health(20.0)).unwrap();
        assert_ne!(old.generation(), new.generation());
        assert!(store.resolve(&old).is_none());
        let current = store.resolve(&new).unwrap();
        assert_eq!(current.downcast_ref::<Health>().unwrap().current, 20.0);
    }

    #[test]
    fn test_handle_from_store_sharing_entity_id_is_rejected() {
        let mut first = ComponentStore::new(OWNER);
        let mut second = ComponentStore::new(OWNER);
        let handle = first.try_add(health(1.0)).unwrap();
        let other = second.try_add(health(999.0)).unwrap();
        assert_ne!(handle.generation(), other.generation());

        first.clear();
        assert!(second.resolve(&handle).is_none());
        assert!(second.resolve_mut(&handle).is_none());
        assert!(second.resolve(&other).is_some());
    }

    #[test]
    fn test_handle_from_other_store_is_rejected() {
        let mut first = ComponentStore::new(OWNER);
        let handle = first.try_add(health(80.0)).unwrap();

        let other = EntityId::from_raw(2);
        let mut second = ComponentStore::new(other);
        second
            .try_add(ComponentInstance::new(
                other,
                Health {
                    current: 1.0,
                    max: 1.0,
                },
            ))
            .unwrap();
        assert!(second.resolve(&handle).is_none());
        assert!(second.resolve_mut(&handle).is_none());
    }
}
