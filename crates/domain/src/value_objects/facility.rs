//! Production facilities that can serve as a transport starting point

use std::fmt;

use crate::errors::DomainError;

/// A production facility with a fixed street address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facility {
    name: &'static str,
    address: &'static str,
    description: &'static str,
}

impl Facility {
    /// Known production facilities
    pub const ALL: [Self; 2] = [
        Self {
            name: "Powerpipe AB",
            address: "Ellesbovägen 101, 42565 Kärra, Sweden",
            description: "Production facility in Sweden",
        },
        Self {
            name: "Kingspan LOGSTOR",
            address: "Danmarksvej 11, 9670 Løgstør, Denmark",
            description: "Production facility in Denmark",
        },
    ];

    /// Look up a facility by name (case-insensitive)
    pub fn find(name: &str) -> Result<Self, DomainError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::not_found("Facility", wanted))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Street address handed to the geocoder
    #[must_use]
    pub const fn address(&self) -> &'static str {
        self.address
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_facility_ignoring_case() {
        let facility = Facility::find("kingspan logstor").unwrap();
        assert_eq!(facility.address(), "Danmarksvej 11, 9670 Løgstør, Denmark");
    }

    #[test]
    fn unknown_facility_is_not_found() {
        assert!(matches!(
            Facility::find("Elsewhere"),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn display_includes_address() {
        let text = Facility::ALL[0].to_string();
        assert!(text.starts_with("Powerpipe AB"));
        assert!(text.contains("Kärra"));
    }
}
