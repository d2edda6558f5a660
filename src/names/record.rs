//! The structured name record.

use serde::Serialize;
use std::cmp::Ordering;

/// Column headers for name sheets, in row order.
pub const NAME_HEADERS: [&str; 3] = ["Last Name", "First Name", "Middle Initial"];

/// One parsed person name.
///
/// `last_name` is never empty. `middle_initial` is either empty or one
/// uppercase letter followed by `.`. `first_name` may hold several
/// space-joined given names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameRecord {
    last_name: String,
    first_name: String,
    middle_initial: String,
}

impl NameRecord {
    /// Build a record from its parts.
    ///
    /// Returns `None` when `last_name` has no letters. The middle initial is
    /// derived from the first letter of `middle`, if any.
    pub fn new(last_name: &str, first_name: &str, middle: Option<&str>) -> Option<Self> {
        let last_name = last_name.trim();
        if !last_name.chars().any(char::is_alphabetic) {
            return None;
        }
        let middle_initial = middle
            .and_then(|m| m.chars().find(|c| c.is_alphabetic()))
            .and_then(|c| c.to_uppercase().next())
            .map(|c| format!("{}.", c))
            .unwrap_or_default();
        Some(Self {
            last_name: last_name.to_string(),
            first_name: first_name.trim().to_string(),
            middle_initial,
        })
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Given name(s).
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Middle initial such as `"S."`, or `""`.
    pub fn middle_initial(&self) -> &str {
        &self.middle_initial
    }

    /// Sheet row: last, first, middle initial.
    pub fn to_row(&self) -> [String; 3] {
        [
            self.last_name.clone(),
            self.first_name.clone(),
            self.middle_initial.clone(),
        ]
    }

    /// Ordering used for sheets: case-insensitive on last name only.
    pub fn cmp_last_name(&self, other: &Self) -> Ordering {
        self.last_name
            .to_lowercase()
            .cmp(&other.last_name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_middle() {
        let r = NameRecord::new("Dela Cruz", "Juan Miguel", Some("santos")).unwrap();
        assert_eq!(r.last_name(), "Dela Cruz");
        assert_eq!(r.first_name(), "Juan Miguel");
        assert_eq!(r.middle_initial(), "S.");
    }

    #[test]
    fn test_new_without_middle() {
        let r = NameRecord::new("Reyes", "Maria", None).unwrap();
        assert_eq!(r.middle_initial(), "");
        assert_eq!(r.to_row(), ["Reyes".to_string(), "Maria".to_string(), String::new()]);
    }

    #[test]
    fn test_last_name_requires_letters() {
        assert!(NameRecord::new("", "Maria", None).is_none());
        assert!(NameRecord::new(" - ", "Maria", None).is_none());
    }

    #[test]
    fn test_middle_initial_uppercases_enye() {
        let r = NameRecord::new("Abad", "Rosa", Some("ñañez")).unwrap();
        assert_eq!(r.middle_initial(), "Ñ.");
    }

    #[test]
    fn test_cmp_last_name_ignores_case() {
        let a = NameRecord::new("abad", "Rosa", None).unwrap();
        let b = NameRecord::new("Abad", "Ana", None).unwrap();
        let c = NameRecord::new("de Vera", "Luz", None).unwrap();
        assert_eq!(a.cmp_last_name(&b), Ordering::Equal);
        assert_eq!(b.cmp_last_name(&c), Ordering::Less);
    }
}
