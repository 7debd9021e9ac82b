use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Deliberately loose: something@something.something
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

impl Field {
    /// Name used for the form control's `id`/`name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::LicenseType => "licenseType",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LicenseType {
    Microsoft,
    Adobe,
    Autodesk,
    Oracle,
    VMware,
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 6] = [
        LicenseType::Microsoft,
        LicenseType::Adobe,
        LicenseType::Autodesk,
        LicenseType::Oracle,
        LicenseType::VMware,
        LicenseType::Other,
    ];

    /// Value submitted by the `<select>`.
    pub fn value(&self) -> &'static str {
        match self {
            LicenseType::Microsoft => "Microsoft",
            LicenseType::Adobe => "Adobe",
            LicenseType::Autodesk => "Autodesk",
            LicenseType::Oracle => "Oracle",
            LicenseType::VMware => "VMware",
            LicenseType::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LicenseType::Microsoft => "Microsoft (Office, Windows, Server)",
            LicenseType::Adobe => "Adobe (Creative Cloud, Acrobat)",
            LicenseType::Autodesk => "Autodesk (AutoCAD, Revit)",
            LicenseType::Oracle => "Oracle Database",
            LicenseType::VMware => "VMware",
            LicenseType::Other => "Other",
        }
    }
}

/// Raw values of the valuation form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: String,
    pub message: String,
}

impl LeadForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::LicenseType => self.license_type = value,
            Field::Message => self.message = value,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Client-side checks only. An empty map means the form can be submitted;
/// the message field is never checked.
pub fn validate(form: &LeadForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert(Field::Email, "Email is invalid");
    }
    if form.company.trim().is_empty() {
        errors.insert(Field::Company, "Company is required");
    }
    if form.license_type.is_empty() {
        errors.insert(Field::LicenseType, "Please select a license type");
    }
    errors
}
