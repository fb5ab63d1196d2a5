// src/services/user_service_tests.rs
//
// Social scenarios against the in-memory repository.
//
// INVARIANTS TESTED:
// - Friendship is symmetric after add and fully gone after remove
// - Removing a missing friendship is an InvalidOperation, not NotFound
// - Common friends are symmetric
// - Blank names default to the login; updates keep friends

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use chrono::{Days, NaiveDate, Utc};

    use crate::domain::UserId;
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::repositories::{new_shared_catalog, InMemoryUserRepository};
    use crate::services::{CreateUserRequest, UpdateUserRequest, UserService};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> UserService {
        let repo = Arc::new(InMemoryUserRepository::new(new_shared_catalog()));
        UserService::new(repo, Arc::new(EventBus::new()))
    }

    fn request(login: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: format!("{}@mail.io", login),
            login: login.to_string(),
            name: Some(login.to_uppercase()),
            birthday: date(1990, 6, 15),
        }
    }

    fn ids(users: Vec<crate::domain::User>) -> BTreeSet<UserId> {
        users.into_iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_friend_then_unfriend_scenario() {
        let service = setup();
        let a = service.create_user(request("a")).unwrap();
        let b = service.create_user(request("b")).unwrap();
        assert_eq!((a.id, b.id), (UserId(1), UserId(2)));

        service.add_friend(a.id, b.id).unwrap();
        assert_eq!(service.friends_of(a.id).unwrap(), vec![service.get_user_by_id(b.id).unwrap()]);
        assert_eq!(ids(service.friends_of(b.id).unwrap()), [a.id].into_iter().collect());

        service.remove_friend(a.id, b.id).unwrap();
        assert!(service.friends_of(a.id).unwrap().is_empty());
        assert!(service.friends_of(b.id).unwrap().is_empty());

        assert!(matches!(
            service.remove_friend(a.id, b.id),
            Err(AppError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_common_friends_scenario() {
        let service = setup();
        let a = service.create_user(request("a")).unwrap().id;
        let b = service.create_user(request("b")).unwrap().id;
        let c = service.create_user(request("c")).unwrap().id;

        service.add_friend(a, b).unwrap();
        service.add_friend(a, c).unwrap();
        service.add_friend(b, c).unwrap();

        let expected: BTreeSet<UserId> = [c].into_iter().collect();
        assert_eq!(ids(service.common_friends(a, b).unwrap()), expected);
        assert_eq!(ids(service.common_friends(b, a).unwrap()), expected);
        assert_eq!(ids(service.common_friends(a, c).unwrap()), [b].into_iter().collect());
    }

    #[test]
    fn test_friend_operations_need_existing_users() {
        let service = setup();
        let a = service.create_user(request("a")).unwrap().id;

        assert!(matches!(service.add_friend(a, UserId(9)), Err(AppError::NotFound(_))));
        assert!(matches!(service.add_friend(UserId(9), a), Err(AppError::NotFound(_))));
        assert!(matches!(service.remove_friend(a, UserId(9)), Err(AppError::NotFound(_))));
        assert!(matches!(service.friends_of(UserId(9)), Err(AppError::NotFound(_))));
        assert!(matches!(service.common_friends(a, UserId(9)), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_self_friendship_is_invalid() {
        let service = setup();
        let a = service.create_user(request("a")).unwrap().id;
        assert!(matches!(service.add_friend(a, a), Err(AppError::InvalidOperation(_))));
        assert!(service.friends_of(a).unwrap().is_empty());
    }

    #[test]
    fn test_blank_name_defaults_to_login() {
        let service = setup();
        let mut blank = request("morpheus");
        blank.name = Some("   ".to_string());
        assert_eq!(service.create_user(blank).unwrap().name, "morpheus");

        let mut absent = request("trinity");
        absent.name = None;
        assert_eq!(service.create_user(absent).unwrap().name, "trinity");
    }

    #[test]
    fn test_invalid_users_are_rejected() {
        let service = setup();

        let mut spaced = request("a");
        spaced.login = "Test User".to_string();
        assert!(matches!(service.create_user(spaced), Err(AppError::Validation(_))));

        let mut bad_email = request("b");
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(service.create_user(bad_email), Err(AppError::Validation(_))));

        let mut unborn = request("c");
        unborn.birthday = Utc::now().date_naive() + Days::new(2);
        assert!(matches!(service.create_user(unborn), Err(AppError::Validation(_))));

        assert!(service.get_all_users().unwrap().is_empty());
    }

    #[test]
    fn test_update_keeps_friends_and_normalizes_name() {
        let service = setup();
        let a = service.create_user(request("a")).unwrap().id;
        let b = service.create_user(request("b")).unwrap().id;
        service.add_friend(a, b).unwrap();

        let updated = service
            .update_user(UpdateUserRequest {
                user_id: a,
                email: "new@mail.io".to_string(),
                login: "renamed".to_string(),
                name: Some(String::new()),
                birthday: date(1985, 2, 2),
            })
            .unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.email, "new@mail.io");
        assert!(updated.friends.contains(&b));
        assert_eq!(ids(service.friends_of(b).unwrap()), [a].into_iter().collect());
    }

    #[test]
    fn test_update_missing_user_is_not_found() {
        let service = setup();
        let result = service.update_user(UpdateUserRequest {
            user_id: UserId(3),
            email: "ghost@mail.io".to_string(),
            login: "ghost".to_string(),
            name: None,
            birthday: date(2000, 1, 1),
        });
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_delete_user_unfriends_everyone() {
        let service = setup();
        let a = service.create_user(request("a")).unwrap().id;
        let b = service.create_user(request("b")).unwrap().id;
        let c = service.create_user(request("c")).unwrap().id;
        service.add_friend(a, b).unwrap();
        service.add_friend(c, a).unwrap();

        service.delete_user(a).unwrap();

        assert!(service.friends_of(b).unwrap().is_empty());
        assert!(service.friends_of(c).unwrap().is_empty());
        assert!(matches!(service.get_user_by_id(a), Err(AppError::NotFound(_))));
        assert_eq!(service.create_user(request("d")).unwrap().id, UserId(4));
    }

    #[test]
    fn test_concurrent_friendships_stay_symmetric() {
        let service = Arc::new(setup());
        let users: Vec<UserId> = (0..8)
            .map(|n| service.create_user(request(&format!("u{}", n))).unwrap().id)
            .collect();

        let handles: Vec<_> = users
            .iter()
            .copied()
            .map(|user| {
                let service = Arc::clone(&service);
                let others = users.clone();
                std::thread::spawn(move || {
                    for other in others.into_iter().filter(|o| *o != user) {
                        service.add_friend(user, other).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for user in &users {
            let friends = service.get_user_by_id(*user).unwrap().friends;
            assert_eq!(friends.len(), users.len() - 1);
            for friend in friends {
                assert!(service.get_user_by_id(friend).unwrap().friends.contains(user));
            }
        }
    }
}
