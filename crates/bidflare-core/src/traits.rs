//! Core traits shared across layers.

use crate::Page;
use chrono::{DateTime, Utc};

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;

    /// Returns the creation timestamp used as the default ordering key.
    fn created_at(&self) -> DateTime<Utc>;
}

/// Projection of a stored entity into its outward view.
///
/// Implemented for every view that has a `From<E>` conversion, so a
/// projector is written once as a `From` impl and gains page support here.
pub trait Projection<E>: From<E> {
    /// Projects a single entity.
    #[must_use]
    fn project(entity: E) -> Self {
        Self::from(entity)
    }

    /// Projects every element of a page, keeping order and page metadata.
    #[must_use]
    fn project_page(page: Page<E>) -> Page<Self>
    where
        Self: Sized,
    {
        page.map(Self::from)
    }
}

impl<E, V: From<E>> Projection<E> for V {}
