//! Canned catalog data served by the mock backend.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormTemplate {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub estimated_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

const LANGUAGES: &[(&str, &str)] = &[
    ("English", "English"),
    ("Spanish", "Español"),
    ("French", "Français"),
    ("German", "Deutsch"),
    ("Arabic", "العربية"),
    ("Ukrainian", "Українська"),
    ("Russian", "Русский"),
    ("Polish", "Polski"),
    ("Turkish", "Türkçe"),
    ("Persian", "فارسی"),
    ("Pashto", "پښتو"),
    ("Dari", "دری"),
    ("Portuguese", "Português"),
    ("Italian", "Italiano"),
    ("Dutch", "Nederlands"),
    ("Swedish", "Svenska"),
    ("Norwegian", "Norsk"),
    ("Danish", "Dansk"),
    ("Finnish", "Suomi"),
];

pub const TEMPLATE_CATEGORIES: &[&str] = &["immigration", "employment", "benefits", "healthcare", "education"];
pub const TEMPLATE_COUNTRIES: &[&str] = &["US", "UK", "DE", "FR", "CA", "AU", "SE", "NO"];

pub fn languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .map(|(name, native)| Language {
            code: name.to_string(),
            name: name.to_string(),
            native_name: native.to_string(),
        })
        .collect()
}

pub fn templates() -> Vec<FormTemplate> {
    [
        (
            "visa-application-us",
            "US Visa Application (I-94)",
            "US",
            "immigration",
            "Tourist and temporary visitor visa application",
            "medium",
            "30-45 minutes",
        ),
        (
            "employment-auth-us",
            "Employment Authorization (I-765)",
            "US",
            "employment",
            "Work authorization application",
            "high",
            "60-90 minutes",
        ),
        (
            "residence-permit-de",
            "German Residence Permit",
            "DE",
            "immigration",
            "Application for German residence permit",
            "high",
            "45-60 minutes",
        ),
        (
            "housing-benefit-uk",
            "UK Housing Benefit Application",
            "UK",
            "benefits",
            "Application for housing assistance",
            "medium",
            "30-45 minutes",
        ),
    ]
    .into_iter()
    .map(|(id, name, country, category, description, difficulty, time)| FormTemplate {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        difficulty: Some(difficulty.to_string()),
        estimated_time: Some(time.to_string()),
    })
    .collect()
}

pub fn categories() -> Vec<FormCategory> {
    [
        ("immigration", "Immigration & Visa", "Visa applications, residence permits, citizenship forms", "passport"),
        ("employment", "Employment", "Work permits, job applications, employment benefits", "briefcase"),
        ("benefits", "Social Benefits", "Healthcare, housing assistance, social services", "heart"),
        ("healthcare", "Healthcare", "Medical forms, insurance applications, health services", "medical"),
        ("education", "Education", "School enrollment, university applications, credentials", "graduation-cap"),
        ("banking", "Banking & Finance", "Bank account opening, loan applications, tax forms", "dollar-sign"),
    ]
    .into_iter()
    .map(|(id, name, description, icon)| FormCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Country match is case-insensitive, category match is exact. Empty
/// filters match everything.
pub fn filter_templates(country: Option<&str>, category: Option<&str>) -> Vec<FormTemplate> {
    let country = country.filter(|c| !c.is_empty());
    let category = category.filter(|c| !c.is_empty());
    templates()
        .into_iter()
        .filter(|t| country.is_none_or(|c| t.country.eq_ignore_ascii_case(c)))
        .filter(|t| category.is_none_or(|c| t.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_catalog_is_ordered() {
        let langs = languages();
        assert_eq!(langs.len(), 19);
        assert_eq!(langs[0].code, "English");
        assert_eq!(langs[18].native_name, "Suomi");
    }

    #[test]
    fn filter_country_ignores_case() {
        let found = filter_templates(Some("us"), None);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| t.country == "US"));
    }

    #[test]
    fn filter_by_both() {
        let found = filter_templates(Some("US"), Some("employment"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "employment-auth-us");
    }

    #[test]
    fn empty_filters_match_everything() {
        assert_eq!(filter_templates(Some(""), None).len(), 4);
        assert_eq!(filter_templates(Some(""), Some("")).len(), 4);
        assert_eq!(filter_templates(Some(""), Some("benefits")).len(), 1);
    }

    #[test]
    fn category_filter_is_exact() {
        assert!(filter_templates(None, Some("Immigration")).is_empty());
    }
}
