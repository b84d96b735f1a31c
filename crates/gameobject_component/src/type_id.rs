//! Stable identifiers for component kinds.
//!
//! A [`ComponentTypeId`] is assigned to a component kind the first time the
//! kind is seen, from a single process-wide counter. The registration table
//! is keyed by the kind's [`std::any::TypeId`], so two different kinds can
//! never share an identifier, no matter what names they declare.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::component::Component;

/// The registration table shared by every entity in the process.
static KIND_TABLE: LazyLock<Mutex<KindTable>> = LazyLock::new(Mutex::default);

/// A unique identifier for a component kind.
///
/// Identifiers are handed out sequentially starting at 1 and are stable for
/// the lifetime of the process. `0` is reserved for
/// [`ComponentTypeId::INVALID`] and is never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// The null / unregistered kind sentinel.
    pub const INVALID: ComponentTypeId = ComponentTypeId(0);

    /// Returns the [`ComponentTypeId`] for the component kind `T`,
    /// registering `T` on first use.
    ///
    /// The same kind always yields the same identifier within a process and
    /// distinct kinds always yield distinct identifiers.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        kind_table().register(TypeId::of::<T>(), T::type_name())
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this identifier is not the [`INVALID`](Self::INVALID)
    /// sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Returns the name the kind declared when it was registered, or `None`
    /// if no kind owns this identifier.
    #[must_use]
    pub fn type_name(self) -> Option<&'static str> {
        kind_table().name_of(self)
    }

    /// Returns the number of component kinds registered so far.
    #[must_use]
    pub fn registered_count() -> usize {
        kind_table().names.len()
    }
}

impl fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentTypeId({})", self.0)
    }
}

fn kind_table() -> MutexGuard<'static, KindTable> {
    // The table is append-only; a panic elsewhere cannot leave it half-written.
    KIND_TABLE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Kind registration table: `TypeId` → identifier, plus the declared names
/// indexed by `identifier - 1`.
#[derive(Debug, Default)]
struct KindTable {
    ids: HashMap<TypeId, ComponentTypeId>,
    names: Vec<&'static str>,
    /// Last identifier handed out; 0 before the first registration.
    last: u64,
}

impl KindTable {
    fn register(&mut self, type_id: TypeId, name: &'static str) -> ComponentTypeId {
        if let Some(&id) = self.ids.get(&type_id) {
            return id;
        }

        self.last += 1;
        let id = ComponentTypeId(self.last);
        self.names.push(name);
        self.ids.insert(type_id, id);
        debug!(%id, component = name, "registered component kind");
        id
    }

    fn name_of(&self, id: ComponentTypeId) -> Option<&'static str> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.names.get(index).copied()
    }
}
