//! # gameobject_component
//!
//! The "C" in entity-component — defines what a component is, how a game
//! object stores at most one component of each kind, and how callers look
//! components up again.
//!
//! This crate provides:
//!
//! - [`ComponentTypeId`] — injective kind → identifier mapping backed by a
//!   process-wide registration table.
//! - [`Component`] trait — the contract all component kinds satisfy.
//! - [`ComponentInstance`] — a type-erased component owned by one entity.
//! - [`ComponentStore`] — per-entity storage keyed by [`ComponentTypeId`].
//! - [`ComponentHandle`] — generation-checked view that expires on removal.
//! - [`Entity`] — the game object facade, plus [`EntityId`] and
//!   [`EntityAllocator`].
//! - [`ComponentError`] — recoverable attach failures.

pub mod component;
pub mod entity;
pub mod error;
pub mod handle;
pub mod store;
pub mod type_id;

pub use component::{Component, ComponentInstance};
pub use entity::{Entity, EntityAllocator, EntityId};
pub use error::ComponentError;
pub use handle::ComponentHandle;
pub use store::ComponentStore;
pub use type_id::ComponentTypeId;
