// src/services/persistence_service.rs
//
// Snapshot load/save at process boundaries.
// Both run under the catalog lock, so a snapshot never mixes two states.

use log::info;
use std::sync::Arc;

use crate::error::AppResult;
use crate::repositories::{CatalogState, SharedCatalog, SnapshotRepository};

pub struct PersistenceService {
    catalog: SharedCatalog,
    snapshot_repo: Arc<dyn SnapshotRepository>,
}

impl PersistenceService {
    pub fn new(catalog: SharedCatalog, snapshot_repo: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            catalog,
            snapshot_repo,
        }
    }

    /// Replace the in-memory catalog with the stored snapshot.
    /// Returns false (catalog untouched) when nothing was stored yet.
    pub fn load(&self) -> AppResult<bool> {
        let mut state = self.catalog.write();
        match self.snapshot_repo.load()? {
            Some(snapshot) => {
                *state = CatalogState::from_snapshot(snapshot);
                info!(
                    "Catalog restored: {} films, {} users",
                    state.film_count(),
                    state.user_count()
                );
                Ok(true)
            }
            None => {
                info!("No stored catalog, starting empty");
                Ok(false)
            }
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let state = self.catalog.read();
        self.snapshot_repo.save(&state.to_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Film, FilmId};
    use crate::repositories::{new_shared_catalog, CatalogSnapshot, MockSnapshotRepository};
    use chrono::NaiveDate;

    #[test]
    fn test_load_without_snapshot_keeps_catalog() {
        let mut repo = MockSnapshotRepository::new();
        repo.expect_load().times(1).returning(|| Ok(None));

        let catalog = new_shared_catalog();
        let service = PersistenceService::new(catalog.clone(), Arc::new(repo));

        assert!(!service.load().unwrap());
        assert_eq!(catalog.read().film_count(), 0);
    }

    #[test]
    fn test_load_replaces_catalog() {
        let mut film = Film::new(
            "Matrix".to_string(),
            String::new(),
            NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            136,
        );
        film.id = FilmId(4);
        let snapshot = CatalogSnapshot {
            films: vec![film],
            users: Vec::new(),
            next_film_id: 5,
            next_user_id: 1,
        };

        let mut repo = MockSnapshotRepository::new();
        repo.expect_load()
            .times(1)
            .returning(move || Ok(Some(snapshot.clone())));

        let catalog = new_shared_catalog();
        let service = PersistenceService::new(catalog.clone(), Arc::new(repo));

        assert!(service.load().unwrap());
        assert_eq!(catalog.read().film_count(), 1);
    }

    #[test]
    fn test_save_writes_current_state() {
        let mut repo = MockSnapshotRepository::new();
        repo.expect_save()
            .withf(|snapshot: &CatalogSnapshot| {
                snapshot.films.is_empty() && snapshot.next_film_id == 1
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = PersistenceService::new(new_shared_catalog(), Arc::new(repo));
        service.save().unwrap();
    }
}
