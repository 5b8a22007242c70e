use serde::Serialize;

/// Where a punch was submitted from. Always optional on a punch: an
/// absent location stays absent, there is no "unknown" sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    Office, // O
    Remote, // R
    OnSite, // C (Customer)
}

impl Location {
    pub fn code(&self) -> &str {
        match self {
            Location::Office => "O",
            Location::Remote => "R",
            Location::OnSite => "C",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Location::Office),
            "R" => Some(Location::Remote),
            "C" => Some(Location::OnSite),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        Location::from_db_str(&code.to_uppercase())
    }
}
