//! # User Profile
//!
//! File: cli/src/chat/profile.rs
//!
//! The guided variant asks for the user's name and year of study before the
//! chat starts. The profile is held in memory only and is read-only once the
//! welcome screen is done.
//!
use crate::core::error::ChatError;
use std::fmt;
use std::str::FromStr;

/// Year of study. Exactly five values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Year {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Year {
    /// All years in order, as offered by the welcome screen.
    pub const ALL: [Year; 5] = [
        Year::First,
        Year::Second,
        Year::Third,
        Year::Fourth,
        Year::Fifth,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Year::First => 1,
            Year::Second => 2,
            Year::Third => 3,
            Year::Fourth => 4,
            Year::Fifth => 5,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Year {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Year::First),
            "2" => Ok(Year::Second),
            "3" => Ok(Year::Third),
            "4" => Ok(Year::Fourth),
            "5" => Ok(Year::Fifth),
            other => Err(ChatError::InvalidProfile(format!(
                "year must be one of 1-5, got '{}'",
                other
            ))),
        }
    }
}

/// Name and year captured once at the start of a guided session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: String,
    year: Year,
}

impl UserProfile {
    /// Builds a profile, rejecting a blank name.
    pub fn new(name: &str, year: Year) -> Result<Self, ChatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChatError::InvalidProfile("name cannot be empty".into()));
        }
        Ok(Self {
            name: name.to_string(),
            year,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// One-line greeting shown after the welcome screen.
    pub fn greeting(&self) -> String {
        format!("¡Hola, {}! ({}° año)", self.name, self.year)
    }
}
