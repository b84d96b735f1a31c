//! Core [`Component`] trait and the type-erased [`ComponentInstance`].
//!
//! Every kind of data attached to an entity implements [`Component`]. Before
//! it is handed to a store, a value is wrapped in a [`ComponentInstance`],
//! which records the kind identifier and the entity that hosts it.
//!
//! ## Ownership
//!
//! The owner recorded in a [`ComponentInstance`] is a plain [`EntityId`]. It
//! names the hosting entity and nothing more: it never keeps the entity
//! alive and cannot form a reference cycle.

use std::any::Any;
use std::fmt;

use crate::entity::EntityId;
use crate::type_id::ComponentTypeId;

/// The core component trait.
///
/// New kinds are added by implementing this trait; the store and the entity
/// facade never change. Components live on one thread with their entity, so
/// no `Send` or `Sync` bound is required.
///
/// # Examples
///
/// ```rust
/// use gameobject_component::{Component, ComponentTypeId};
///
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
///
/// assert_eq!(Health::component_type_id(), ComponentTypeId::of::<Health>());
/// ```
pub trait Component: 'static {
    /// A human-readable name for this component kind, used in diagnostics.
    fn type_name() -> &'static str;

    /// Returns the [`ComponentTypeId`] for this component kind.
    fn component_type_id() -> ComponentTypeId
    where
        Self: Sized,
    {
        ComponentTypeId::of::<Self>()
    }
}

/// A component value together with its kind identifier and hosting entity.
pub struct ComponentInstance {
    type_id: ComponentTypeId,
    type_name: &'static str,
    owner: EntityId,
    value: Box<dyn Any>,
}

impl ComponentInstance {
    /// Wrap `value` as a component hosted by `owner`.
    #[must_use]
    pub fn new<T: Component>(owner: EntityId, value: T) -> Self {
        Self {
            type_id: T::component_type_id(),
            type_name: T::type_name(),
            owner,
            value: Box::new(value),
        }
    }

    /// The kind identifier, fixed at construction.
    #[must_use]
    pub fn identifier(&self) -> ComponentTypeId {
        self.type_id
    }

    /// The entity hosting this component. Non-owning.
    #[must_use]
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// The declared name of this component's kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the payload is a `T`.
    #[must_use]
    pub fn is<T: Component>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the payload as a `T`, or `None` if it is another kind.
    #[must_use]
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Mutably borrow the payload as a `T`, or `None` if it is another kind.
    #[must_use]
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Unwrap the payload as a `T`, handing the instance back unchanged if it
    /// is another kind.
    pub fn into_inner<T: Component>(self) -> Result<T, Self> {
        let Self {
            type_id,
            type_name,
            owner,
            value,
        } = self;
        value.downcast::<T>().map(|boxed| *boxed).map_err(|value| Self {
            type_id,
            type_name,
            owner,
            value,
        })
    }
}

impl fmt::Debug for ComponentInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("type_id", &self.type_id)
            .field("type_name", &self.type_name)
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}
