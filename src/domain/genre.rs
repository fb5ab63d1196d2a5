use serde::{Deserialize, Serialize};

/// Genre identity within the fixed genre catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub u32);

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: &'static str,
}

/// The genre catalog is read-only, ordered by id
const CATALOG: [Genre; 6] = [
    Genre { id: GenreId(1), name: "Comedy" },
    Genre { id: GenreId(2), name: "Drama" },
    Genre { id: GenreId(3), name: "Animation" },
    Genre { id: GenreId(4), name: "Thriller" },
    Genre { id: GenreId(5), name: "Documentary" },
    Genre { id: GenreId(6), name: "Action" },
];

pub fn all() -> &'static [Genre] {
    &CATALOG
}

pub fn find(id: GenreId) -> Option<Genre> {
    CATALOG.iter().copied().find(|genre| genre.id == id)
}
