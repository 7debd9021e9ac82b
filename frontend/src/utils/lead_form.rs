use crate::utils::validation::{validate, Field, FieldErrors, LeadForm};

/// Valuation form as the page sees it: current values plus the inline errors
/// from the last submit attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub fields: LeadForm,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Editing a field clears that field's error, others stay until the next
    /// submit.
    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.remove(&field);
    }

    /// On success the form is reset and the accepted lead handed back; on
    /// failure the errors are kept for display and nothing is returned.
    pub fn try_submit(&mut self) -> Option<LeadForm> {
        self.errors = validate(&self.fields);
        if self.errors.is_empty() {
            Some(std::mem::take(&mut self.fields))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_submit_keeps_values_and_sets_errors() {
        let mut state = FormState::default();
        state.edit(Field::Company, "Acme".into());
        assert!(state.try_submit().is_none());
        assert_eq!(state.fields.company, "Acme");
        assert_eq!(state.error(Field::Name), Some("Name is required"));
        assert_eq!(state.error(Field::Company), None);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut state = FormState::default();
        state.try_submit();
        state.edit(Field::Name, "J".into());
        assert_eq!(state.error(Field::Name), None);
        assert_eq!(state.error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn successful_submit_returns_lead_and_resets() {
        let mut state = FormState::default();
        state.edit(Field::Name, "Anirudhhan Ashok".into());
        state.edit(Field::Email, "anirudhhan@company.com".into());
        state.edit(Field::Company, "Acme Inc.".into());
        state.edit(Field::LicenseType, "Oracle".into());
        state.edit(Field::Message, "40 seats".into());

        let lead = state.try_submit().unwrap();
        assert_eq!(lead.license_type, "Oracle");
        assert_eq!(lead.message, "40 seats");
        assert_eq!(state, FormState::default());
    }
}
