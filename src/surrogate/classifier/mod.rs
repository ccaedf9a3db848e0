//! Placeholder classification
//!
//! Maps a raw placeholder span such as `[**Hospital1 4**]` to its semantic
//! [`Category`], the [`PlaceholderForm`] it was written in, and any literal
//! parameters embedded in it. Classification never fails: anything no rule
//! recognizes is [`Category::Fallback`].

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use rules::RuleRegistry;

/// Semantic kind of a placeholder, in rule evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(rename = "age_over_90")]
    AgeOver90,
    ApartmentAddress,
    AttendingInfo,
    CcContactInfo,
    ClipNumber,
    Company,
    Country,
    DateRange,
    DictatorInfo,
    DoctorFirstName,
    DoctorLastName,
    Email,
    FemaleFirstName,
    FirstName,
    Holiday,
    Hospital,
    Initials,
    JobNumber,
    KnownFirstName,
    KnownLastName,
    LastName,
    Location,
    MdNumber,
    MaleFirstName,
    MedicalRecordNumber,
    MonthOnly,
    MonthDay,
    MonthSlashDay,
    MonthSlashYear,
    MonthSlashDaySlashYear,
    Name,
    NameInitial,
    NumericIdentifier,
    PagerNumber,
    ProviderNumber,
    SerialNumber,
    SocialSecurityNumber,
    State,
    StreetAddress,
    TelephoneFax,
    UnitNumber,
    IsoDateLiteral,
    YearDigits,
    YearMonthDay,
    MonthNameLiteral,
    NamePrefix,
    PoBox,
    YearMonth,
    MonthDayYear,
    MonthYear,
    DayMonth,
    DayMonthYear,
    Zipcode,
    HospitalUnitNumber,
    College,
    HospitalWardName,
    HospitalUnitName,
    Wardname,
    Url,
    Blank,
    DashSlashLiteral,
    SlashLiteral,
    DashLiteral,
    LeadingDashSlashLiteral,
    TripleDashLiteral,
    NumberLiteral,
    Fallback,
}

impl Category {
    /// Stable snake_case name, used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgeOver90 => "age_over_90",
            Self::ApartmentAddress => "apartment_address",
            Self::AttendingInfo => "attending_info",
            Self::CcContactInfo => "cc_contact_info",
            Self::ClipNumber => "clip_number",
            Self::Company => "company",
            Self::Country => "country",
            Self::DateRange => "date_range",
            Self::DictatorInfo => "dictator_info",
            Self::DoctorFirstName => "doctor_first_name",
            Self::DoctorLastName => "doctor_last_name",
            Self::Email => "email",
            Self::FemaleFirstName => "female_first_name",
            Self::FirstName => "first_name",
            Self::Holiday => "holiday",
            Self::Hospital => "hospital",
            Self::Initials => "initials",
            Self::JobNumber => "job_number",
            Self::KnownFirstName => "known_first_name",
            Self::KnownLastName => "known_last_name",
            Self::LastName => "last_name",
            Self::Location => "location",
            Self::MdNumber => "md_number",
            Self::MaleFirstName => "male_first_name",
            Self::MedicalRecordNumber => "medical_record_number",
            Self::MonthOnly => "month_only",
            Self::MonthDay => "month_day",
            Self::MonthSlashDay => "month_slash_day",
            Self::MonthSlashYear => "month_slash_year",
            Self::MonthSlashDaySlashYear => "month_slash_day_slash_year",
            Self::Name => "name",
            Self::NameInitial => "name_initial",
            Self::NumericIdentifier => "numeric_identifier",
            Self::PagerNumber => "pager_number",
            Self::ProviderNumber => "provider_number",
            Self::SerialNumber => "serial_number",
            Self::SocialSecurityNumber => "social_security_number",
            Self::State => "state",
            Self::StreetAddress => "street_address",
            Self::TelephoneFax => "telephone_fax",
            Self::UnitNumber => "unit_number",
            Self::IsoDateLiteral => "iso_date_literal",
            Self::YearDigits => "year_digits",
            Self::YearMonthDay => "year_month_day",
            Self::MonthNameLiteral => "month_name_literal",
            Self::NamePrefix => "name_prefix",
            Self::PoBox => "po_box",
            Self::YearMonth => "year_month",
            Self::MonthDayYear => "month_day_year",
            Self::MonthYear => "month_year",
            Self::DayMonth => "day_month",
            Self::DayMonthYear => "day_month_year",
            Self::Zipcode => "zipcode",
            Self::HospitalUnitNumber => "hospital_unit_number",
            Self::College => "college",
            Self::HospitalWardName => "hospital_ward_name",
            Self::HospitalUnitName => "hospital_unit_name",
            Self::Wardname => "wardname",
            Self::Url => "url",
            Self::Blank => "blank",
            Self::DashSlashLiteral => "dash_slash_literal",
            Self::SlashLiteral => "slash_literal",
            Self::DashLiteral => "dash_literal",
            Self::LeadingDashSlashLiteral => "leading_dash_slash_literal",
            Self::TripleDashLiteral => "triple_dash_literal",
            Self::NumberLiteral => "number_literal",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surface form a placeholder was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderForm {
    /// Ends in a multiplicity suffix, e.g. `[**Hospital1 4**]`
    Numbered,
    /// No multiplicity suffix, e.g. `[**Hospital1 **]`
    Bare,
    /// Carries a literal value that is passed through
    Literal,
    /// Empty or whitespace-only interior
    Blank,
    /// Not recognized by any rule
    Fallback,
}

impl PlaceholderForm {
    /// Whether the surrogate for this form is remembered for the rest of the
    /// document
    pub fn is_cacheable(&self, cache_bare: bool) -> bool {
        match self {
            Self::Numbered | Self::Literal => true,
            Self::Bare => cache_bare,
            Self::Blank | Self::Fallback => false,
        }
    }
}

impl fmt::Display for PlaceholderForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Numbered => "numbered",
            Self::Bare => "bare",
            Self::Literal => "literal",
            Self::Blank => "blank",
            Self::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// Result of classifying one placeholder span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub form: PlaceholderForm,

    /// Embedded literal to pass through, already normalized
    /// (`[**3-/4**]` carries `3/4`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,

    /// Digit count of `Year (N digits)` placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit_count: Option<usize>,
}

impl Classification {
    /// Classification of an unrecognized span
    pub fn fallback() -> Self {
        Self {
            category: Category::Fallback,
            form: PlaceholderForm::Fallback,
            literal: None,
            digit_count: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.category == Category::Fallback
    }
}

/// Maps a raw placeholder span to its classification
pub trait PlaceholderClassifier: Send + Sync {
    /// Classify `raw`, which includes the `[**` and `**]` markers
    fn classify(&self, raw: &str) -> Classification;
}
