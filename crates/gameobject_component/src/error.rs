//! Errors reported when attaching components.
//!
//! Lookups and removals never fail: a missing component is `None` or
//! `false`, not an error.

use crate::entity::EntityId;
use crate::type_id::ComponentTypeId;

/// Errors returned by [`ComponentStore::try_add`](crate::ComponentStore::try_add)
/// and [`Entity::try_attach`](crate::Entity::try_attach).
///
/// Every variant is recoverable; the store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ComponentError {
    /// No component was supplied.
    #[error("cannot attach an absent component to {entity}")]
    InvalidArgument {
        /// The entity the attach was aimed at.
        entity: EntityId,
    },

    /// The entity already holds a component of this kind.
    #[error("{entity} already has a {type_name} component ({type_id})")]
    DuplicateComponent {
        /// The entity the attach was aimed at.
        entity: EntityId,
        /// The kind that is already present.
        type_id: ComponentTypeId,
        /// Declared name of the kind.
        type_name: &'static str,
    },

    /// The component was built for a different entity.
    #[error("{type_name} component owned by {owner} cannot be attached to {entity}")]
    ForeignOwner {
        /// The entity the attach was aimed at.
        entity: EntityId,
        /// The entity recorded as the component's owner.
        owner: EntityId,
        /// Declared name of the kind.
        type_name: &'static str,
    },
}
