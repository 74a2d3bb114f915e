use serde::Serialize;

/// Fixed set of physically distinct bookable studio areas.
/// Bookings in different spaces never conflict with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Space {
    PrincipalZone, // principal-zone
    NaturalLight,  // natural-light
    Cyclorama,     // cyclorama
    Darkroom,      // darkroom
}

impl Space {
    pub fn code(&self) -> &'static str {
        match self {
            Space::PrincipalZone => "principal-zone",
            Space::NaturalLight => "natural-light",
            Space::Cyclorama => "cyclorama",
            Space::Darkroom => "darkroom",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "principal-zone" => Some(Space::PrincipalZone),
            "natural-light" => Some(Space::NaturalLight),
            "cyclorama" => Some(Space::Cyclorama),
            "darkroom" => Some(Space::Darkroom),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any casing)
    pub fn from_code(code: &str) -> Option<Self> {
        Space::from_db_str(&code.to_lowercase())
    }

    pub fn all() -> [Space; 4] {
        [
            Space::PrincipalZone,
            Space::NaturalLight,
            Space::Cyclorama,
            Space::Darkroom,
        ]
    }
}
