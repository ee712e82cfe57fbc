//! The fixed genre catalog offered on the browse screen.

/// A selectable genre. The set is hardcoded and immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    /// Identifier sent to the recommendation endpoint.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Illustrative art path for the genre card.
    pub image: &'static str,
}

/// Placeholder art, shared by the genre cards and by movies whose backdrop
/// lookup failed or returned nothing.
pub const PLACEHOLDER_IMAGE: &str = "/Cover.jpg";

/// The six genres offered on the browse screen.
pub const GENRES: [Genre; 6] = [
    Genre {
        id: "Action",
        name: "Action",
        image: PLACEHOLDER_IMAGE,
    },
    Genre {
        id: "Comedy",
        name: "Comedy",
        image: PLACEHOLDER_IMAGE,
    },
    Genre {
        id: "Drama",
        name: "Drama",
        image: PLACEHOLDER_IMAGE,
    },
    Genre {
        id: "Sci-Fi",
        name: "Sci-Fi",
        image: PLACEHOLDER_IMAGE,
    },
    Genre {
        id: "War",
        name: "War",
        image: PLACEHOLDER_IMAGE,
    },
    Genre {
        id: "Adventure",
        name: "Adventure",
        image: PLACEHOLDER_IMAGE,
    },
];

/// Look a genre up by its identifier.
pub fn genre_by_id(id: &str) -> Option<&'static Genre> {
    GENRES.iter().find(|genre| genre.id == id)
}
