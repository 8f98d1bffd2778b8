use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// The whole site content document, held as a single remote resource.
/// Skills live in their own remote resource and are not part of this struct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub hero_text: String,
    pub contact: ContactDetails,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceItem>,
    pub certifications: Vec<Certification>,
    pub hobbies: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
    pub details: String,
}

fn current_year() -> u32 {
    chrono::Utc::now().year() as u32
}

impl EducationEntry {
    /// Placeholder entry appended by the editor, filled in afterwards.
    pub fn placeholder() -> Self {
        Self {
            institution: "New Institution".to_string(),
            degree: "Degree Name".to_string(),
            year: current_year(),
        }
    }
}

impl ExperienceItem {
    pub fn placeholder() -> Self {
        Self {
            company: "Company Name".to_string(),
            position: "Position Title".to_string(),
            duration: "Jan 2024 - Present".to_string(),
            description: "Job description".to_string(),
        }
    }
}

impl Certification {
    pub fn placeholder() -> Self {
        Self {
            name: "New Certification".to_string(),
            issuer: "Issuing Organization".to_string(),
            year: current_year(),
        }
    }
}

impl Project {
    pub fn placeholder() -> Self {
        Self {
            title: "New Project".to_string(),
            description: "Project description".to_string(),
            link: String::new(),
            details: String::new(),
        }
    }
}
