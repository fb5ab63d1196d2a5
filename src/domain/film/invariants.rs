use chrono::NaiveDate;

use super::entity::Film;
use crate::domain::{genre, DomainError, DomainResult};

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// First public film screening; earlier release dates are rejected
pub const MIN_RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
    Some(date) => date,
    None => panic!("invalid minimum release date"),
};

/// Validates all Film invariants
pub fn validate_film(film: &Film) -> DomainResult<()> {
    validate_name(&film.name)?;
    validate_description(&film.description)?;
    validate_release_date(film.release_date)?;
    validate_duration(film.duration)?;
    validate_genres(film)?;
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> DomainResult<()> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::InvariantViolation(format!(
            "Film description is {} characters long, at most {} allowed",
            length, MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// The boundary date itself is accepted
fn validate_release_date(release_date: NaiveDate) -> DomainResult<()> {
    if release_date < MIN_RELEASE_DATE {
        return Err(DomainError::InvariantViolation(format!(
            "Film release date {} is before {}",
            release_date, MIN_RELEASE_DATE
        )));
    }
    Ok(())
}

fn validate_duration(duration: i64) -> DomainResult<()> {
    if duration <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Film duration must be positive, got {}",
            duration
        )));
    }
    Ok(())
}

fn validate_genres(film: &Film) -> DomainResult<()> {
    if let Some(unknown) = film.genres.iter().find(|id| genre::find(**id).is_none()) {
        return Err(DomainError::InvariantViolation(format!(
            "Unknown genre id={}",
            unknown
        )));
    }
    Ok(())
}
