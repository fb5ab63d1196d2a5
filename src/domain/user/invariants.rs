use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use super::entity::User;
use crate::domain::{DomainError, DomainResult};

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$"
    )
    .unwrap();
}

/// Fill in defaults the client may leave out.
/// A blank display name becomes the login.
pub fn normalize_user(user: &mut User) {
    if user.name.trim().is_empty() {
        user.name = user.login.clone();
    }
}

/// Validates all User invariants against the current UTC date
pub fn validate_user(user: &User) -> DomainResult<()> {
    validate_user_at(user, Utc::now().date_naive())
}

/// Validates all User invariants, treating `today` as the current date
pub fn validate_user_at(user: &User, today: NaiveDate) -> DomainResult<()> {
    validate_email(&user.email)?;
    validate_login(&user.login)?;
    validate_birthday(user.birthday, today)?;
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::InvariantViolation(format!(
            "Invalid email '{}'",
            email
        )));
    }
    Ok(())
}

fn validate_login(login: &str) -> DomainResult<()> {
    if login.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Login cannot be empty".to_string(),
        ));
    }
    if login.chars().any(char::is_whitespace) {
        return Err(DomainError::InvariantViolation(format!(
            "Login '{}' must not contain whitespace",
            login
        )));
    }
    Ok(())
}

fn validate_birthday(birthday: NaiveDate, today: NaiveDate) -> DomainResult<()> {
    if birthday > today {
        return Err(DomainError::InvariantViolation(format!(
            "Birthday {} is in the future",
            birthday
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alex() -> User {
        User::new(
            "Alex@alex.ru".to_string(),
            "TestUser".to_string(),
            Some("Alex".to_string()),
            date(2011, 11, 11),
        )
    }

    #[test]
    fn test_valid_user() {
        assert!(validate_user(&alex()).is_ok());
    }

    #[test]
    fn test_login_with_space_fails() {
        let mut user = alex();
        user.login = "Test User".to_string();
        assert!(validate_user(&user).is_err());

        user.login = "Test\tUser".to_string();
        assert!(validate_user(&user).is_err());
    }

    #[test]
    fn test_blank_login_fails() {
        let mut user = alex();
        user.login = String::new();
        assert!(validate_user(&user).is_err());
        user.login = "   ".to_string();
        assert!(validate_user(&user).is_err());
    }

    #[test]
    fn test_malformed_email_fails() {
        for email in ["", "alex", "alex@", "@alex.ru", "alex@alex", "al ex@alex.ru"] {
            let mut user = alex();
            user.email = email.to_string();
            assert!(validate_user(&user).is_err(), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_birthday_today_is_accepted_tomorrow_is_not() {
        let today = date(2024, 5, 1);
        let mut user = alex();
        user.birthday = today;
        assert!(validate_user_at(&user, today).is_ok());

        user.birthday = date(2024, 5, 2);
        assert!(validate_user_at(&user, today).is_err());
    }

    #[test]
    fn test_normalize_defaults_blank_name_to_login() {
        let mut user = User::new(
            "a@b.io".to_string(),
            "neo".to_string(),
            Some("  ".to_string()),
            date(1990, 1, 1),
        );
        normalize_user(&mut user);
        assert_eq!(user.name, "neo");

        let mut named = alex();
        normalize_user(&mut named);
        assert_eq!(named.name, "Alex");
    }

    #[test]
    fn test_validation_does_not_normalize() {
        let user = User::new("a@b.io".to_string(), "neo".to_string(), None, date(1990, 1, 1));
        assert!(validate_user(&user).is_ok());
        assert!(user.name.is_empty());
    }
}
