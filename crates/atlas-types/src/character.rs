//! Character catalogue

use serde::Serialize;

/// One of the fixed avatars a participant can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: i64,
    pub name: &'static str,
    #[serde(rename = "trait")]
    pub trait_name: &'static str,
    pub avatar: &'static str,
}

pub static CHARACTERS: [Character; 4] = [
    Character {
        id: 1,
        name: "GUERRERO",
        trait_name: "Determinado y Fuerte",
        avatar: "/avatars/1.png",
    },
    Character {
        id: 2,
        name: "MAGO",
        trait_name: "Sabio y Creativo",
        avatar: "/avatars/2.png",
    },
    Character {
        id: 3,
        name: "PÍCARO",
        trait_name: "Ágil y Adaptable",
        avatar: "/avatars/3.png",
    },
    Character {
        id: 4,
        name: "SANADOR",
        trait_name: "Compasivo y Paciente",
        avatar: "/avatars/4.png",
    },
];

impl Character {
    /// Look up a character by its id
    pub fn find(id: i64) -> Option<&'static Character> {
        CHARACTERS.iter().find(|c| c.id == id)
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.trait_name)
    }
}
