// src/application/commands/genre_commands.rs
//
// Genre Command Handlers (read-only catalog)

use crate::application::commands::CommandResult;
use crate::application::dto::GenreDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::GenreId;

pub fn list_genres(state: &AppState) -> CommandResult<Vec<GenreDto>> {
    Ok(state
        .genre_service
        .get_all_genres()
        .into_iter()
        .map(GenreDto::from)
        .collect())
}

pub fn get_genre(state: &AppState, genre_id: u32) -> CommandResult<GenreDto> {
    let genre = state
        .genre_service
        .get_genre_by_id(GenreId(genre_id))
        .to_error_response()?;
    Ok(GenreDto::from(genre))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::events::EventBus;
    use crate::repositories::new_shared_catalog;
    use std::sync::Arc;

    #[test]
    fn test_genre_commands() {
        let config = AppConfig::from_lookup(|key| match key {
            "FILMORATE_DATA_DIR" => Some("/tmp/filmorate-test".to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState::new(&config, new_shared_catalog(), Arc::new(EventBus::new()));

        let genres = list_genres(&state).unwrap();
        assert_eq!(genres.len(), 6);
        assert_eq!(get_genre(&state, 1).unwrap().name, "Comedy");
        assert_eq!(get_genre(&state, 42).unwrap_err().status, 404);
    }
}
