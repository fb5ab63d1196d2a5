// src/repositories/snapshot_repository.rs
//
// Whole-catalog snapshots in SQLite.
// Written and read at process boundaries only, each in one transaction.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::ConnectionPool;
use crate::domain::{Film, FilmId, GenreId, User, UserId};
use crate::error::AppResult;

const FILM_COUNTER: &str = "film";
const USER_COUNTER: &str = "user";

/// Films and users with their relationship sets, plus the next identities to hand out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub films: Vec<Film>,
    pub users: Vec<User>,
    pub next_film_id: u64,
    pub next_user_id: u64,
}

#[cfg_attr(test, mockall::automock)]
pub trait SnapshotRepository: Send + Sync {
    /// Replace whatever was stored before
    fn save(&self, snapshot: &CatalogSnapshot) -> AppResult<()>;
    /// None when nothing has been saved yet
    fn load(&self) -> AppResult<Option<CatalogSnapshot>>;
}

pub struct SqliteSnapshotRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSnapshotRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn parse_date(value: &str, column: usize) -> Result<NaiveDate, rusqlite::Error> {
        value.parse::<NaiveDate>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
    }

    fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
        let id: i64 = row.get("id")?;
        let birthday: String = row.get("birthday")?;

        Ok(User {
            id: UserId(id as u64),
            email: row.get("email")?,
            login: row.get("login")?,
            name: row.get("name")?,
            birthday: Self::parse_date(&birthday, 4)?,
            friends: BTreeSet::new(),
        })
    }

    fn row_to_film(row: &Row) -> Result<Film, rusqlite::Error> {
        let id: i64 = row.get("id")?;
        let release_date: String = row.get("release_date")?;

        Ok(Film {
            id: FilmId(id as u64),
            name: row.get("name")?,
            description: row.get("description")?,
            release_date: Self::parse_date(&release_date, 3)?,
            duration: row.get("duration")?,
            genres: BTreeSet::new(),
            likes: BTreeSet::new(),
        })
    }

    fn id_pairs(conn: &rusqlite::Connection, sql: &str) -> AppResult<Vec<(u64, u64)>> {
        let mut stmt = conn.prepare(sql)?;
        let pairs = stmt
            .query_map([], |row| {
                let left: i64 = row.get(0)?;
                let right: i64 = row.get(1)?;
                Ok((left as u64, right as u64))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pairs)
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn save(&self, snapshot: &CatalogSnapshot) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute_batch(
            "DELETE FROM film_likes;
             DELETE FROM film_genres;
             DELETE FROM friendships;
             DELETE FROM films;
             DELETE FROM users;
             DELETE FROM id_counters;",
        )?;

        for user in &snapshot.users {
            tx.execute(
                "INSERT INTO users (id, email, login, name, birthday) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user.id.0 as i64,
                    user.email,
                    user.login,
                    user.name,
                    user.birthday.to_string(),
                ],
            )?;
        }

        for user in &snapshot.users {
            for friend in &user.friends {
                let (low, high) = if user.id < *friend {
                    (user.id, *friend)
                } else {
                    (*friend, user.id)
                };
                tx.execute(
                    "INSERT OR IGNORE INTO friendships (user_id, friend_id) VALUES (?1, ?2)",
                    params![low.0 as i64, high.0 as i64],
                )?;
            }
        }

        for film in &snapshot.films {
            tx.execute(
                "INSERT INTO films (id, name, description, release_date, duration)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    film.id.0 as i64,
                    film.name,
                    film.description,
                    film.release_date.to_string(),
                    film.duration,
                ],
            )?;
            for genre in &film.genres {
                tx.execute(
                    "INSERT INTO film_genres (film_id, genre_id) VALUES (?1, ?2)",
                    params![film.id.0 as i64, genre.0],
                )?;
            }
            for liker in &film.likes {
                tx.execute(
                    "INSERT INTO film_likes (film_id, user_id) VALUES (?1, ?2)",
                    params![film.id.0 as i64, liker.0 as i64],
                )?;
            }
        }

        tx.execute(
            "INSERT INTO id_counters (entity, next_id) VALUES (?1, ?2), (?3, ?4)",
            params![
                FILM_COUNTER,
                snapshot.next_film_id as i64,
                USER_COUNTER,
                snapshot.next_user_id as i64,
            ],
        )?;

        tx.commit()?;

        info!(
            "Saved catalog snapshot: {} films, {} users",
            snapshot.films.len(),
            snapshot.users.len()
        );
        Ok(())
    }

    fn load(&self) -> AppResult<Option<CatalogSnapshot>> {
        let conn = self.pool.get()?;

        let counters: HashMap<String, i64> = {
            let mut stmt = conn.prepare("SELECT entity, next_id FROM id_counters")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<Result<HashMap<_, _>, _>>()?;
            rows
        };
        if counters.is_empty() {
            return Ok(None);
        }

        let mut users: BTreeMap<UserId, User> = {
            let mut stmt =
                conn.prepare("SELECT id, email, login, name, birthday FROM users ORDER BY id")?;
            let rows = stmt
                .query_map([], Self::row_to_user)?
                .map(|user| user.map(|u| (u.id, u)))
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            rows
        };

        for (low, high) in Self::id_pairs(&conn, "SELECT user_id, friend_id FROM friendships")? {
            if let Some(user) = users.get_mut(&UserId(low)) {
                user.friends.insert(UserId(high));
            }
            if let Some(user) = users.get_mut(&UserId(high)) {
                user.friends.insert(UserId(low));
            }
        }

        let mut films: BTreeMap<FilmId, Film> = {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, release_date, duration FROM films ORDER BY id",
            )?;
            let rows = stmt
                .query_map([], Self::row_to_film)?
                .map(|film| film.map(|f| (f.id, f)))
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            rows
        };

        let genre_rows = Self::id_pairs(&conn, "SELECT film_id, genre_id FROM film_genres")?;
        for (film_id, genre_id) in genre_rows {
            if let Some(film) = films.get_mut(&FilmId(film_id)) {
                film.genres.insert(GenreId(genre_id as u32));
            }
        }
        let like_rows = Self::id_pairs(&conn, "SELECT film_id, user_id FROM film_likes")?;
        for (film_id, user_id) in like_rows {
            if let Some(film) = films.get_mut(&FilmId(film_id)) {
                film.likes.insert(UserId(user_id));
            }
        }

        let snapshot = CatalogSnapshot {
            films: films.into_values().collect(),
            users: users.into_values().collect(),
            next_film_id: counters.get(FILM_COUNTER).copied().unwrap_or(1) as u64,
            next_user_id: counters.get(USER_COUNTER).copied().unwrap_or(1) as u64,
        };

        info!(
            "Loaded catalog snapshot: {} films, {} users",
            snapshot.films.len(),
            snapshot.users.len()
        );
        Ok(Some(snapshot))
    }
}
