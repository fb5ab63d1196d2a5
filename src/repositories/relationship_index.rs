// src/repositories/relationship_index.rs
//
// Likes (user -> film) and friendships (user <-> user).
//
// A friendship is one fact stored under two lookup keys. Both keys are
// written by the same `&mut self` call, so callers holding the catalog
// lock never see one side without the other.
//
// Existence of the referenced films/users is checked by the caller.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{FilmId, UserId};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    likes: HashMap<FilmId, BTreeSet<UserId>>,
    friends: HashMap<UserId, BTreeSet<UserId>>,
}

impl RelationshipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    /// Returns false when the like was already present
    pub fn add_like(&mut self, film_id: FilmId, user_id: UserId) -> bool {
        self.likes.entry(film_id).or_default().insert(user_id)
    }

    pub fn remove_like(&mut self, film_id: FilmId, user_id: UserId) -> AppResult<()> {
        let removed = self
            .likes
            .get_mut(&film_id)
            .map(|likers| likers.remove(&user_id))
            .unwrap_or(false);

        if !removed {
            return Err(AppError::InvalidOperation(format!(
                "Film id={} has no like from user id={}",
                film_id, user_id
            )));
        }
        if self.likes.get(&film_id).is_some_and(BTreeSet::is_empty) {
            self.likes.remove(&film_id);
        }
        Ok(())
    }

    pub fn has_like(&self, film_id: FilmId, user_id: UserId) -> bool {
        self.likes
            .get(&film_id)
            .is_some_and(|likers| likers.contains(&user_id))
    }

    pub fn like_count(&self, film_id: FilmId) -> usize {
        self.likes.get(&film_id).map_or(0, BTreeSet::len)
    }

    pub fn likers(&self, film_id: FilmId) -> BTreeSet<UserId> {
        self.likes.get(&film_id).cloned().unwrap_or_default()
    }

    /// Forget every like of a film
    pub fn drop_film(&mut self, film_id: FilmId) {
        self.likes.remove(&film_id);
    }

    // ------------------------------------------------------------------
    // Friendships
    // ------------------------------------------------------------------

    /// Returns false when the two users were already friends
    pub fn add_friendship(&mut self, user_id: UserId, other_id: UserId) -> AppResult<bool> {
        if user_id == other_id {
            return Err(AppError::InvalidOperation(format!(
                "User id={} cannot befriend themselves",
                user_id
            )));
        }
        let forward = self.friends.entry(user_id).or_default().insert(other_id);
        let backward = self.friends.entry(other_id).or_default().insert(user_id);
        Ok(forward || backward)
    }

    /// Both directions must be present; a one-sided entry is reported, not repaired
    pub fn remove_friendship(&mut self, user_id: UserId, other_id: UserId) -> AppResult<()> {
        if !self.contains_direction(user_id, other_id) {
            return Err(AppError::InvalidOperation(format!(
                "User id={} is not in the friends list of user id={}",
                other_id, user_id
            )));
        }
        if !self.contains_direction(other_id, user_id) {
            return Err(AppError::InvalidOperation(format!(
                "User id={} is not in the friends list of user id={}",
                user_id, other_id
            )));
        }
        self.unlink(user_id, other_id);
        self.unlink(other_id, user_id);
        Ok(())
    }

    pub fn are_friends(&self, user_id: UserId, other_id: UserId) -> bool {
        self.contains_direction(user_id, other_id) && self.contains_direction(other_id, user_id)
    }

    pub fn friend_ids(&self, user_id: UserId) -> BTreeSet<UserId> {
        self.friends.get(&user_id).cloned().unwrap_or_default()
    }

    pub fn common_friend_ids(&self, user_id: UserId, other_id: UserId) -> BTreeSet<UserId> {
        match (self.friends.get(&user_id), self.friends.get(&other_id)) {
            (Some(left), Some(right)) => left.intersection(right).copied().collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Remove a user from every like-set and every friendship
    pub fn drop_user(&mut self, user_id: UserId) {
        self.likes.retain(|_, likers| {
            likers.remove(&user_id);
            !likers.is_empty()
        });

        if let Some(friends) = self.friends.remove(&user_id) {
            for friend in friends {
                self.unlink(friend, user_id);
            }
        }
    }

    /// Every friendship once, as (smaller id, larger id)
    pub fn friendship_pairs(&self) -> Vec<(UserId, UserId)> {
        let mut pairs: Vec<(UserId, UserId)> = self
            .friends
            .iter()
            .flat_map(|(user, friends)| friends.iter().map(move |friend| (*user, *friend)))
            .filter(|(user, friend)| user < friend)
            .collect();
        pairs.sort();
        pairs
    }

    fn contains_direction(&self, from: UserId, to: UserId) -> bool {
        self.friends
            .get(&from)
            .is_some_and(|friends| friends.contains(&to))
    }

    fn unlink(&mut self, from: UserId, to: UserId) {
        if let Some(friends) = self.friends.get_mut(&from) {
            friends.remove(&to);
            if friends.is_empty() {
                self.friends.remove(&from);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn insert_one_sided(&mut self, from: UserId, to: UserId) {
        self.friends.entry(from).or_default().insert(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: UserId = UserId(1);
    const B: UserId = UserId(2);
    const C: UserId = UserId(3);
    const MATRIX: FilmId = FilmId(1);

    #[test]
    fn test_like_is_idempotent() {
        let mut index = RelationshipIndex::new();
        assert!(index.add_like(MATRIX, A));
        assert!(!index.add_like(MATRIX, A));
        assert_eq!(index.like_count(MATRIX), 1);
        assert!(index.has_like(MATRIX, A));
    }

    #[test]
    fn test_remove_missing_like_is_invalid() {
        let mut index = RelationshipIndex::new();
        assert!(matches!(
            index.remove_like(MATRIX, A),
            Err(AppError::InvalidOperation(_))
        ));

        index.add_like(MATRIX, A);
        index.remove_like(MATRIX, A).unwrap();
        assert_eq!(index.like_count(MATRIX), 0);
        assert!(index.remove_like(MATRIX, A).is_err());
    }

    #[test]
    fn test_friendship_is_symmetric() {
        let mut index = RelationshipIndex::new();
        assert!(index.add_friendship(A, B).unwrap());
        assert!(index.friend_ids(A).contains(&B));
        assert!(index.friend_ids(B).contains(&A));
        assert!(index.are_friends(B, A));
        assert!(!index.add_friendship(B, A).unwrap());
    }

    #[test]
    fn test_self_friendship_is_invalid() {
        let mut index = RelationshipIndex::new();
        assert!(matches!(
            index.add_friendship(A, A),
            Err(AppError::InvalidOperation(_))
        ));
        assert!(index.friend_ids(A).is_empty());
    }

    #[test]
    fn test_remove_friendship_clears_both_sides() {
        let mut index = RelationshipIndex::new();
        index.add_friendship(A, B).unwrap();
        index.remove_friendship(B, A).unwrap();
        assert!(index.friend_ids(A).is_empty());
        assert!(index.friend_ids(B).is_empty());
        assert!(matches!(
            index.remove_friendship(A, B),
            Err(AppError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_one_sided_friendship_is_reported_not_repaired() {
        let mut index = RelationshipIndex::new();
        index.insert_one_sided(A, B);
        assert!(!index.are_friends(A, B));
        assert!(matches!(
            index.remove_friendship(A, B),
            Err(AppError::InvalidOperation(_))
        ));
        assert!(index.friend_ids(A).contains(&B));
    }

    #[test]
    fn test_common_friends() {
        let mut index = RelationshipIndex::new();
        index.add_friendship(A, B).unwrap();
        index.add_friendship(A, C).unwrap();
        index.add_friendship(B, C).unwrap();

        let expected: BTreeSet<UserId> = [C].into_iter().collect();
        assert_eq!(index.common_friend_ids(A, B), expected);
        assert_eq!(index.common_friend_ids(B, A), expected);
    }

    #[test]
    fn test_drop_user_cascades() {
        let mut index = RelationshipIndex::new();
        index.add_like(MATRIX, A);
        index.add_like(MATRIX, B);
        index.add_friendship(A, B).unwrap();
        index.add_friendship(A, C).unwrap();

        index.drop_user(A);

        assert_eq!(index.likers(MATRIX), [B].into_iter().collect());
        assert!(index.friend_ids(A).is_empty());
        assert!(index.friend_ids(B).is_empty());
        assert!(index.friend_ids(C).is_empty());
    }

    #[test]
    fn test_friendship_pairs_lists_each_edge_once() {
        let mut index = RelationshipIndex::new();
        index.add_friendship(B, A).unwrap();
        index.add_friendship(C, B).unwrap();
        assert_eq!(index.friendship_pairs(), vec![(A, B), (B, C)]);
    }
}
