//! Form validation for a draft equipment record, run before submission.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

/// Draft record as entered in the form, before submission.
#[derive(Debug, Clone, Default)]
pub struct EquipmentDraft {
    pub name: String,
    pub equipment_type: String,
    pub status: String,
    pub last_cleaned: String,
}

/// Field-name-to-message map; submission is blocked whenever it is
/// non-empty.
pub type FormErrors = BTreeMap<&'static str, String>;

/// Validate a draft against the local calendar day.
pub fn validate_draft_now(draft: &EquipmentDraft) -> FormErrors {
    validate_draft(draft, Local::now().date_naive())
}

/// Validate a draft against the given "today".
///
/// The name must be non-empty after trimming and at least 3 characters; the
/// last-cleaned date must be present and not after `today` (midnight
/// granularity). A non-empty date that does not parse as YYYY-MM-DD passes,
/// as in the browser form where the date input guarantees the format.
pub fn validate_draft(draft: &EquipmentDraft, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert("name", "Equipment name is required".to_string());
    } else if name.chars().count() < 3 {
        errors.insert("name", "Name must be at least 3 characters".to_string());
    }

    if draft.last_cleaned.is_empty() {
        errors.insert("lastCleaned", "Last cleaned date is required".to_string());
    } else if let Ok(date) = NaiveDate::parse_from_str(&draft.last_cleaned, "%Y-%m-%d") {
        if date > today {
            errors.insert("lastCleaned", "Date cannot be in the future".to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_draft() -> EquipmentDraft {
        EquipmentDraft {
            name: "Industrial Mixer A1".to_string(),
            equipment_type: "Mixer".to_string(),
            status: "Active".to_string(),
            last_cleaned: "2025-06-15".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&valid_draft(), today()).is_empty());
    }

    #[test]
    fn two_character_name_fails_three_passes() {
        let mut draft = valid_draft();
        draft.name = "ab".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Name must be at least 3 characters")
        );

        draft.name = "abc".to_string();
        assert!(validate_draft(&draft, today()).is_empty());
    }

    #[test]
    fn whitespace_only_name_is_required() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Equipment name is required")
        );
    }

    #[test]
    fn name_is_trimmed_before_length_check() {
        let mut draft = valid_draft();
        draft.name = " ab ".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Name must be at least 3 characters")
        );
    }

    #[test]
    fn tomorrow_fails_today_passes() {
        let mut draft = valid_draft();
        draft.last_cleaned = "2025-06-16".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.get("lastCleaned").map(String::as_str),
            Some("Date cannot be in the future")
        );

        draft.last_cleaned = "2025-06-15".to_string();
        assert!(validate_draft(&draft, today()).is_empty());
    }

    #[test]
    fn empty_date_is_required() {
        let mut draft = valid_draft();
        draft.last_cleaned = String::new();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.get("lastCleaned").map(String::as_str),
            Some("Last cleaned date is required")
        );
    }

    #[test]
    fn every_failing_field_is_reported() {
        let draft = EquipmentDraft {
            name: String::new(),
            last_cleaned: String::new(),
            ..EquipmentDraft::default()
        };
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.len(), 2);
    }
}
