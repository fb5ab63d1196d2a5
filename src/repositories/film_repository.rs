// src/repositories/film_repository.rs
//
// Film persistence over the shared in-memory catalog

use log::{debug, info};

use crate::domain::{Film, FilmId, UserId};
use crate::error::AppResult;
use crate::repositories::catalog_state::SharedCatalog;
use crate::repositories::entity_store::{Entity, EntityId};

#[cfg_attr(test, mockall::automock)]
pub trait FilmRepository: Send + Sync {
    /// Store a new film and return it with its assigned identity
    fn add(&self, film: Film) -> AppResult<Film>;
    /// Overwrite film fields; the like-set is left as it is
    fn update(&self, film: Film) -> AppResult<Film>;
    fn get_by_id(&self, id: FilmId) -> AppResult<Option<Film>>;
    fn list_all(&self) -> AppResult<Vec<Film>>;
    fn exists(&self, id: FilmId) -> AppResult<bool>;
    /// Remove a film together with its like-set
    fn delete(&self, id: FilmId) -> AppResult<()>;
    /// Returns false when the like was already present
    fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<bool>;
    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()>;
    fn has_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<bool>;
    fn like_count(&self, film_id: FilmId) -> AppResult<usize>;
}

pub struct InMemoryFilmRepository {
    catalog: SharedCatalog,
}

impl InMemoryFilmRepository {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }
}

impl FilmRepository for InMemoryFilmRepository {
    fn add(&self, film: Film) -> AppResult<Film> {
        let mut state = self.catalog.write();
        let stored = state.films.add(film);
        info!("Added a new film id={}", stored.id);
        Ok(stored)
    }

    fn update(&self, film: Film) -> AppResult<Film> {
        let mut state = self.catalog.write();
        let stored = state.films.update(film)?;
        info!("Film id={} updated", stored.id);
        Ok(state.film_view(&stored))
    }

    fn get_by_id(&self, id: FilmId) -> AppResult<Option<Film>> {
        let state = self.catalog.read();
        Ok(state.films.find(id).map(|film| state.film_view(film)))
    }

    fn list_all(&self) -> AppResult<Vec<Film>> {
        let state = self.catalog.read();
        Ok(state.films.iter().map(|film| state.film_view(film)).collect())
    }

    fn exists(&self, id: FilmId) -> AppResult<bool> {
        Ok(self.catalog.read().films.exists(id))
    }

    fn delete(&self, id: FilmId) -> AppResult<()> {
        let mut state = self.catalog.write();
        state.films.remove(id)?;
        state.relations.drop_film(id);
        info!("Film id={} deleted", id);
        Ok(())
    }

    fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<bool> {
        let mut state = self.catalog.write();
        state.ensure_film(film_id)?;
        state.ensure_user(user_id)?;
        let inserted = state.relations.add_like(film_id, user_id);
        if inserted {
            info!("Film id={} liked by user id={}", film_id, user_id);
        } else {
            debug!("Film id={} already liked by user id={}", film_id, user_id);
        }
        Ok(inserted)
    }

    fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        let mut state = self.catalog.write();
        state.ensure_film(film_id)?;
        state.ensure_user(user_id)?;
        state.relations.remove_like(film_id, user_id)?;
        info!("Like of user id={} removed from film id={}", user_id, film_id);
        Ok(())
    }

    fn has_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<bool> {
        let state = self.catalog.read();
        state.ensure_film(film_id)?;
        Ok(state.relations.has_like(film_id, user_id))
    }

    fn like_count(&self, film_id: FilmId) -> AppResult<usize> {
        let state = self.catalog.read();
        state.ensure_film(film_id)?;
        Ok(state.relations.like_count(film_id))
    }
}

impl EntityId for FilmId {
    fn from_raw(raw: u64) -> Self {
        FilmId(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl Entity for Film {
    type Id = FilmId;
    const KIND: &'static str = "Film";

    fn id(&self) -> FilmId {
        self.id
    }

    fn set_id(&mut self, id: FilmId) {
        self.id = id;
    }

    fn clear_relations(&mut self) {
        self.likes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::error::AppError;
    use crate::repositories::catalog_state::new_shared_catalog;
    use crate::repositories::user_repository::{InMemoryUserRepository, UserRepository};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (InMemoryFilmRepository, InMemoryUserRepository) {
        let catalog = new_shared_catalog();
        (
            InMemoryFilmRepository::new(catalog.clone()),
            InMemoryUserRepository::new(catalog),
        )
    }

    fn matrix() -> Film {
        Film::new("Matrix".to_string(), String::new(), date(1999, 3, 31), 136)
    }

    fn neo() -> User {
        User::new("neo@zion.io".to_string(), "neo".to_string(), None, date(1971, 9, 13))
    }

    #[test]
    fn test_update_preserves_likes() {
        let (films, users) = setup();
        let film = films.add(matrix()).unwrap();
        let user = users.add(neo()).unwrap();
        assert!(films.add_like(film.id, user.id).unwrap());
        assert!(!films.add_like(film.id, user.id).unwrap());

        let mut changed = film.clone();
        changed.name = "The Matrix".to_string();
        let updated = films.update(changed).unwrap();

        assert_eq!(updated.name, "The Matrix");
        assert!(updated.likes.contains(&user.id));
        assert_eq!(films.like_count(film.id).unwrap(), 1);
    }

    #[test]
    fn test_like_requires_existing_film_and_user() {
        let (films, users) = setup();
        let user = users.add(neo()).unwrap();
        assert!(matches!(
            films.add_like(FilmId(99), user.id),
            Err(AppError::NotFound(_))
        ));

        let film = films.add(matrix()).unwrap();
        assert!(matches!(
            films.add_like(film.id, UserId(99)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_drops_likes() {
        let (films, users) = setup();
        let film = films.add(matrix()).unwrap();
        let user = users.add(neo()).unwrap();
        films.add_like(film.id, user.id).unwrap();

        films.delete(film.id).unwrap();
        assert!(films.get_by_id(film.id).unwrap().is_none());
        assert!(matches!(films.delete(film.id), Err(AppError::NotFound(_))));
    }
}
