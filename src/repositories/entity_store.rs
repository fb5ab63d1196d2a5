// src/repositories/entity_store.rs
//
// Generic keyed store with identity assignment.
// Holds entity fields only; relationship sets live in the RelationshipIndex.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Integer identity of a stored entity
pub trait EntityId: Copy + Ord + Display + std::fmt::Debug {
    fn from_raw(raw: u64) -> Self;
    fn raw(self) -> u64;
}

/// Anything the store can hold
pub trait Entity: Clone + std::fmt::Debug {
    type Id: EntityId;

    /// Used in NotFound messages
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
    fn set_id(&mut self, id: Self::Id);

    /// Drop any relationship data carried by the value.
    /// Relationships are never accepted through the store.
    fn clear_relations(&mut self);
}

#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    entities: BTreeMap<T::Id, T>,
    /// Last identity handed out; starts at 0 so the first one is 1
    last_id: u64,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Assign the next identity and store the entity
    pub fn add(&mut self, mut entity: T) -> T {
        self.last_id += 1;
        entity.set_id(T::Id::from_raw(self.last_id));
        entity.clear_relations();
        self.entities.insert(entity.id(), entity.clone());
        entity
    }

    /// Overwrite the fields of an existing entity
    pub fn update(&mut self, mut entity: T) -> AppResult<T> {
        let id = entity.id();
        let slot = self
            .entities
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;
        entity.clear_relations();
        *slot = entity.clone();
        Ok(entity)
    }

    pub fn get_by_id(&self, id: T::Id) -> AppResult<&T> {
        self.entities.get(&id).ok_or_else(|| Self::not_found(id))
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.entities.get(&id)
    }

    /// All entities in ascending identity order
    pub fn get_all(&self) -> Vec<T> {
        self.entities.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    pub fn exists(&self, id: T::Id) -> bool {
        self.entities.contains_key(&id)
    }

    /// Remove an entity. Its identity is not handed out again.
    pub fn remove(&mut self, id: T::Id) -> AppResult<T> {
        self.entities.remove(&id).ok_or_else(|| Self::not_found(id))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Put back an entity that already has an identity (snapshot restore).
    /// The counter is moved past it so it is never reissued.
    pub fn restore(&mut self, mut entity: T) {
        let raw = entity.id().raw();
        entity.clear_relations();
        self.entities.insert(entity.id(), entity);
        self.advance_counter(raw);
    }

    pub fn advance_counter(&mut self, last_id: u64) {
        self.last_id = self.last_id.max(last_id);
    }

    pub fn not_found(id: T::Id) -> AppError {
        AppError::NotFound(format!("{} id={} not found", T::KIND, id))
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Film, FilmId, UserId};
    use chrono::NaiveDate;

    fn film(name: &str) -> Film {
        Film::new(
            name.to_string(),
            String::new(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            90,
        )
    }

    #[test]
    fn test_identities_start_at_one_and_increase() {
        let mut store = EntityStore::<Film>::new();
        let a = store.add(film("A"));
        let b = store.add(film("B"));
        assert_eq!(a.id, FilmId(1));
        assert_eq!(b.id, FilmId(2));
    }

    #[test]
    fn test_identities_are_not_reused_after_remove() {
        let mut store = EntityStore::<Film>::new();
        let a = store.add(film("A"));
        store.remove(a.id).unwrap();
        let b = store.add(film("B"));
        assert_eq!(b.id, FilmId(2));
        assert!(!store.exists(a.id));
    }

    #[test]
    fn test_add_ignores_supplied_identity_and_relations() {
        let mut store = EntityStore::<Film>::new();
        let mut incoming = film("A");
        incoming.id = FilmId(42);
        incoming.likes.insert(UserId(7));
        let stored = store.add(incoming);
        assert_eq!(stored.id, FilmId(1));
        assert!(stored.likes.is_empty());
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = EntityStore::<Film>::new();
        let mut ghost = film("Ghost");
        ghost.id = FilmId(9);
        assert!(matches!(store.update(ghost), Err(AppError::NotFound(_))));
        assert!(matches!(store.get_by_id(FilmId(9)), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_get_all_is_ordered_by_identity() {
        let mut store = EntityStore::<Film>::new();
        for name in ["C", "A", "B"] {
            store.add(film(name));
        }
        let ids: Vec<u64> = store.get_all().iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_restore_advances_counter() {
        let mut store = EntityStore::<Film>::new();
        let mut old = film("Old");
        old.id = FilmId(10);
        store.restore(old);
        assert_eq!(store.add(film("New")).id, FilmId(11));
    }

    #[test]
    fn test_independent_stores_have_independent_counters() {
        let mut first = EntityStore::<Film>::new();
        let mut second = EntityStore::<Film>::new();
        first.add(film("A"));
        first.add(film("B"));
        assert_eq!(second.add(film("C")).id, FilmId(1));
    }
}
