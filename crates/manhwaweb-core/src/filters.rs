//! Search filter domains.
//!
//! Every single-select domain carries an `Any` sentinel that contributes
//! nothing to an outgoing query. Labels are the Spanish texts the host shows
//! next to each choice; wire values are what the upstream search endpoint
//! expects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Publication format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Any,
    Manhwa,
    Manga,
    Manhua,
    Novel,
    Doujinshi,
    OneShot,
}

impl ContentType {
    pub const ALL: &[ContentType] = &[
        Self::Any,
        Self::Manhwa,
        Self::Manga,
        Self::Manhua,
        Self::Novel,
        Self::Doujinshi,
        Self::OneShot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Ver todo",
            Self::Manhwa => "Manhwa",
            Self::Manga => "Manga",
            Self::Manhua => "Manhua",
            Self::Novel => "Nova",
            Self::Doujinshi => "Doujinshi",
            Self::OneShot => "One shot",
        }
    }

    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Manhwa => Some("manhwa"),
            Self::Manga => Some("manga"),
            Self::Manhua => Some("manhua"),
            Self::Novel => Some("nova"),
            Self::Doujinshi => Some("doujinshi"),
            Self::OneShot => Some("one_shot"),
        }
    }
}

/// Target readership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demography {
    #[default]
    Any,
    Seinen,
    Shonen,
    Josei,
    Shojo,
}

impl Demography {
    pub const ALL: &[Demography] = &[
        Self::Any,
        Self::Seinen,
        Self::Shonen,
        Self::Josei,
        Self::Shojo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Ver todo",
            Self::Seinen => "Seinen",
            Self::Shonen => "Shonen",
            Self::Josei => "Josei",
            Self::Shojo => "Shojo",
        }
    }

    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Seinen => Some("seinen"),
            Self::Shonen => Some("shonen"),
            Self::Josei => Some("josei"),
            Self::Shojo => Some("shojo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishingState {
    #[default]
    Any,
    Publishing,
    Finished,
}

impl PublishingState {
    pub const ALL: &[PublishingState] = &[Self::Any, Self::Publishing, Self::Finished];

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Ver todo",
            Self::Publishing => "Publicándose",
            Self::Finished => "Finalizado",
        }
    }

    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Publishing => Some("publicandose"),
            Self::Finished => Some("finalizado"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Erotic {
    #[default]
    Any,
    Yes,
    No,
}

impl Erotic {
    pub const ALL: &[Erotic] = &[Self::Any, Self::Yes, Self::No];

    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Ver todo",
            Self::Yes => "Sí",
            Self::No => "No",
        }
    }

    pub fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Yes => Some("si"),
            Self::No => Some("no"),
        }
    }
}

/// A genre the search endpoint can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: &'static str,
}

/// Genre domain, in the order the host lists them.
pub const GENRES: &[Genre] = &[
    Genre { id: 3, name: "Acción" },
    Genre { id: 29, name: "Aventura" },
    Genre { id: 18, name: "Comedia" },
    Genre { id: 1, name: "Drama" },
    Genre { id: 42, name: "Recuentos de la vida" },
    Genre { id: 2, name: "Romance" },
    Genre { id: 5, name: "Venganza" },
    Genre { id: 6, name: "Harem" },
    Genre { id: 23, name: "Fantasía" },
    Genre { id: 31, name: "Sobrenatural" },
    Genre { id: 25, name: "Tragedia" },
    Genre { id: 43, name: "Psicológico" },
    Genre { id: 32, name: "Horror" },
    Genre { id: 44, name: "Thriller" },
    Genre { id: 28, name: "Historias cortas" },
    Genre { id: 30, name: "Ecchi" },
    Genre { id: 34, name: "Gore" },
    Genre { id: 27, name: "Girls love" },
    Genre { id: 45, name: "Boys love" },
    Genre { id: 41, name: "Reencarnación" },
    Genre { id: 37, name: "Sistema de niveles" },
    Genre { id: 33, name: "Ciencia ficción" },
    Genre { id: 38, name: "Apocalíptico" },
    Genre { id: 39, name: "Artes marciales" },
    Genre { id: 40, name: "Superpoderes" },
    Genre { id: 35, name: "Cultivación" },
    Genre { id: 8, name: "Milf" },
];

pub fn genre_by_id(id: u32) -> Option<&'static Genre> {
    GENRES.iter().find(|g| g.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortProperty {
    Alphabetical,
    Created,
    ChapterCount,
}

impl SortProperty {
    pub const ALL: &[SortProperty] = &[Self::Alphabetical, Self::Created, Self::ChapterCount];

    pub fn label(self) -> &'static str {
        match self {
            Self::Alphabetical => "Alfabético",
            Self::Created => "Creación",
            Self::ChapterCount => "Num. Capítulos",
        }
    }

    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Alphabetical => "alfabetico",
            Self::Created => "creacion",
            Self::ChapterCount => "num_chapter",
        }
    }
}

/// Sort choice. A selection without a property is the neutral state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSelection {
    pub property: Option<SortProperty>,
    #[serde(default)]
    pub ascending: bool,
}

impl SortSelection {
    pub fn by(property: SortProperty, ascending: bool) -> Self {
        Self {
            property: Some(property),
            ascending,
        }
    }

    pub fn direction(self) -> &'static str {
        if self.ascending {
            "asc"
        } else {
            "desc"
        }
    }
}

/// One filter as selected in the host UI.
///
/// `Other` stands for any filter kind this adapter does not know about.
/// Hosts may send newer kinds; they deserialize into `Other` and are skipped
/// when a query is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSelection {
    Type {
        value: ContentType,
    },
    Demography {
        value: Demography,
    },
    Status {
        value: PublishingState,
    },
    Erotic {
        value: Erotic,
    },
    Genres {
        #[serde(default)]
        ids: BTreeSet<u32>,
    },
    Sort(SortSelection),
    #[serde(other)]
    Other,
}

impl FilterSelection {
    pub fn genres<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        Self::Genres {
            ids: ids.into_iter().collect(),
        }
    }
}

/// The neutral filter list, in the order the host displays it.
pub fn default_filters() -> Vec<FilterSelection> {
    vec![
        FilterSelection::Type {
            value: ContentType::Any,
        },
        FilterSelection::Demography {
            value: Demography::Any,
        },
        FilterSelection::Status {
            value: PublishingState::Any,
        },
        FilterSelection::Erotic { value: Erotic::Any },
        FilterSelection::Genres {
            ids: BTreeSet::new(),
        },
        FilterSelection::Sort(SortSelection::default()),
    ]
}
