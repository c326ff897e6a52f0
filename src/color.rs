use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of colors.
    ///
    /// Serialized as a list of color codes, the way card data spells it:
    /// `["W", "U"]`. The empty set is colorless.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(try_from = "Vec<String>", into = "Vec<String>")]
    pub struct Colors: u8 {
        const WHITE = 1 << 0;
        const BLUE = 1 << 1;
        const BLACK = 1 << 2;
        const RED = 1 << 3;
        const GREEN = 1 << 4;
    }
}

/// Each color with its code, in WUBRG order.
const CODES: [(Colors, char); 5] = [
    (Colors::WHITE, 'W'),
    (Colors::BLUE, 'U'),
    (Colors::BLACK, 'B'),
    (Colors::RED, 'R'),
    (Colors::GREEN, 'G'),
];

impl Default for Colors {
    fn default() -> Self {
        Colors::empty()
    }
}

impl Colors {
    /// Case-insensitive lookup by single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        CODES.iter().find(|(_, c)| *c == code).map(|(color, _)| *color)
    }

    /// Lookup by lowercase color word.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "white" => Some(Colors::WHITE),
            "blue" => Some(Colors::BLUE),
            "black" => Some(Colors::BLACK),
            "red" => Some(Colors::RED),
            "green" => Some(Colors::GREEN),
            _ => None,
        }
    }

    /// Parses a run of color codes such as `wub`.
    pub fn from_codes(codes: &str) -> Result<Self, char> {
        codes.chars().try_fold(Colors::empty(), |colors, code| {
            Colors::from_code(code).map(|c| colors | c).ok_or(code)
        })
    }

    /// Number of colors in the set.
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    fn codes(self) -> impl Iterator<Item = char> {
        CODES
            .into_iter()
            .filter(move |(color, _)| self.contains(*color))
            .map(|(_, code)| code)
    }
}

impl TryFrom<Vec<String>> for Colors {
    type Error = String;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        let mut colors = Colors::empty();
        for code in codes {
            let mut chars = code.chars();
            match (chars.next().and_then(Colors::from_code), chars.next()) {
                (Some(color), None) => colors.insert(color),
                _ => return Err(format!("invalid color code '{}'", code)),
            }
        }
        Ok(colors)
    }
}

impl From<Colors> for Vec<String> {
    fn from(colors: Colors) -> Self {
        colors.codes().map(String::from).collect()
    }
}

impl std::fmt::Display for Colors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("C");
        }
        self.codes().try_for_each(|code| write!(f, "{}", code))
    }
}
