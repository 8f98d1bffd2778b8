use serde::{Deserialize, Serialize};

use crate::content::domain::entities::{
    Certification, ContactDetails, Content, EducationEntry, ExperienceItem, Project,
};

/// Local, unsaved copy of the content document being edited in one owner
/// panel session. All edits rebuild the affected values instead of mutating
/// them, so a previously observed document is never changed underneath a
/// reader. Skills are tracked next to the document because the store keeps
/// them as a separate resource; `remote_skills` is the last skill list known
/// to be on the store and is what saves diff against.
#[derive(Debug, Clone, Default)]
pub struct ContentDraft {
    content: Option<Content>,
    skills: Vec<String>,
    remote_skills: Vec<String>,
    panels: SectionPanels,
}

/// Which entry of each editable list is currently expanded for editing.
/// Index-keyed, so it is recomputed synchronously on every add/remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionPanels {
    pub education: Option<usize>,
    pub experience: Option<usize>,
    pub certifications: Option<usize>,
    pub projects: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Experience,
    Certifications,
    Projects,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
        };
        f.write_str(name)
    }
}

impl SectionPanels {
    fn slot(&mut self, section: Section) -> &mut Option<usize> {
        match section {
            Section::Education => &mut self.education,
            Section::Experience => &mut self.experience,
            Section::Certifications => &mut self.certifications,
            Section::Projects => &mut self.projects,
        }
    }

    pub fn expanded(&self, section: Section) -> Option<usize> {
        match section {
            Section::Education => self.education,
            Section::Experience => self.experience,
            Section::Certifications => self.certifications,
            Section::Projects => self.projects,
        }
    }

    fn on_insert(&mut self, section: Section, index: usize) {
        *self.slot(section) = Some(index);
    }

    fn on_remove(&mut self, section: Section, index: usize) {
        let slot = self.slot(section);
        *slot = match *slot {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Draft has not been loaded yet")]
    NotLoaded,

    #[error("Index {index} is out of range for {section}")]
    IndexOutOfRange { section: Section, index: usize },
}

/// One structural edit against the draft. Commands arrive from the panel as
/// JSON (`{"op": "...", ...}`) and are applied in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DraftCommand {
    SetHeroText { value: String },
    SetContact { address: String, phone: String, email: String },
    SetHobbies { values: Vec<String> },
    AddEducation,
    UpdateEducation { index: usize, field: EducationField },
    RemoveEducation { index: usize },
    AddExperience,
    UpdateExperience { index: usize, field: ExperienceField },
    RemoveExperience { index: usize },
    AddCertification,
    UpdateCertification { index: usize, field: CertificationField },
    RemoveCertification { index: usize },
    AddProject,
    UpdateProject { index: usize, field: ProjectField },
    RemoveProject { index: usize },
    AddSkill { value: String },
    RemoveSkill { value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Year(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum ExperienceField {
    Company(String),
    Position(String),
    Duration(String),
    Description(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum CertificationField {
    Name(String),
    Issuer(String),
    Year(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum ProjectField {
    Title(String),
    Description(String),
    Link(String),
    Details(String),
}

impl EducationField {
    fn apply_to(&self, entry: &EducationEntry) -> EducationEntry {
        let mut next = entry.clone();
        match self {
            EducationField::Institution(v) => next.institution = v.clone(),
            EducationField::Degree(v) => next.degree = v.clone(),
            EducationField::Year(v) => next.year = *v,
        }
        next
    }
}

impl ExperienceField {
    fn apply_to(&self, item: &ExperienceItem) -> ExperienceItem {
        let mut next = item.clone();
        match self {
            ExperienceField::Company(v) => next.company = v.clone(),
            ExperienceField::Position(v) => next.position = v.clone(),
            ExperienceField::Duration(v) => next.duration = v.clone(),
            ExperienceField::Description(v) => next.description = v.clone(),
        }
        next
    }
}

impl CertificationField {
    fn apply_to(&self, cert: &Certification) -> Certification {
        let mut next = cert.clone();
        match self {
            CertificationField::Name(v) => next.name = v.clone(),
            CertificationField::Issuer(v) => next.issuer = v.clone(),
            CertificationField::Year(v) => next.year = *v,
        }
        next
    }
}

impl ProjectField {
    fn apply_to(&self, project: &Project) -> Project {
        let mut next = project.clone();
        match self {
            ProjectField::Title(v) => next.title = v.clone(),
            ProjectField::Description(v) => next.description = v.clone(),
            ProjectField::Link(v) => next.link = v.clone(),
            ProjectField::Details(v) => next.details = v.clone(),
        }
        next
    }
}

/// Serializable view of the draft handed back to the panel after every
/// load/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSnapshot {
    pub content: Content,
    pub skills: Vec<String>,
    pub panels: SectionPanels,
}

/// Skill reconciliation plan for a save: `to_add` is what the draft has and
/// the store does not, `to_remove` the reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillDiff {
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

impl SkillDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

pub fn skill_diff(remote: &[String], draft: &[String]) -> SkillDiff {
    SkillDiff {
        to_add: draft
            .iter()
            .filter(|s| !remote.contains(s))
            .cloned()
            .collect(),
        to_remove: remote
            .iter()
            .filter(|s| !draft.contains(s))
            .cloned()
            .collect(),
    }
}

/// New sequence with `index` excluded; everything after shifts down by one.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

fn replace_at<T: Clone>(items: &[T], index: usize, entry: T) -> Vec<T> {
    let mut next = items.to_vec();
    next[index] = entry;
    next
}

impl ContentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }

    /// Initialize the draft from remote state. One-shot: once a session has
    /// a draft, later fetches must not clobber in-progress edits, so this
    /// returns `false` and changes nothing if already loaded.
    pub fn load(&mut self, content: Content, skills: Vec<String>) -> bool {
        if self.is_loaded() {
            return false;
        }
        self.content = Some(content);
        self.remote_skills = skills.clone();
        self.skills = skills;
        true
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn remote_skills(&self) -> &[String] {
        &self.remote_skills
    }

    pub fn expanded(&self, section: Section) -> Option<usize> {
        self.panels.expanded(section)
    }

    pub fn snapshot(&self) -> Option<DraftSnapshot> {
        self.content.as_ref().map(|content| DraftSnapshot {
            content: content.clone(),
            skills: self.skills.clone(),
            panels: self.panels,
        })
    }

    /// Called after a save round trip with whatever the store is now known
    /// to hold. Last response wins if saves overlapped.
    pub fn set_remote_skills(&mut self, skills: Vec<String>) {
        self.remote_skills = skills;
    }

    /// Called after the store confirmed a bulk clear.
    pub fn clear_skills(&mut self) {
        self.skills.clear();
        self.remote_skills.clear();
    }

    /// Swap `old` for `new` in both the draft and the remote cache,
    /// preserving position. Used after a successful remote rename.
    pub fn replace_skill(&mut self, old: &str, new: &str) {
        for list in [&mut self.skills, &mut self.remote_skills] {
            if let Some(slot) = list.iter_mut().find(|s| s.as_str() == old) {
                *slot = new.to_string();
            }
        }
    }

    pub fn apply(&mut self, command: DraftCommand) -> Result<(), DraftError> {
        if !self.is_loaded() {
            return Err(DraftError::NotLoaded);
        }

        match command {
            DraftCommand::SetHeroText { value } => {
                let next = Content {
                    hero_text: value.trim().to_string(),
                    ..self.current()?.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::SetContact {
                address,
                phone,
                email,
            } => {
                let next = Content {
                    contact: ContactDetails {
                        address,
                        phone,
                        email,
                    },
                    ..self.current()?.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::SetHobbies { values } => {
                let hobbies = values
                    .iter()
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .collect();
                let next = Content {
                    hobbies,
                    ..self.current()?.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::AddEducation => {
                let current = self.current()?;
                let mut education = current.education.clone();
                education.push(EducationEntry::placeholder());
                let new_len = education.len();
                let next = Content {
                    education,
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_insert(Section::Education, new_len - 1);
            }
            DraftCommand::UpdateEducation { index, field } => {
                let current = self.current()?;
                let entry = Self::entry_at(&current.education, Section::Education, index)?;
                let next = Content {
                    education: replace_at(&current.education, index, field.apply_to(entry)),
                    ..current.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::RemoveEducation { index } => {
                let current = self.current()?;
                Self::entry_at(&current.education, Section::Education, index)?;
                let next = Content {
                    education: remove_at(&current.education, index),
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_remove(Section::Education, index);
            }
            DraftCommand::AddExperience => {
                let current = self.current()?;
                let mut experience = current.experience.clone();
                experience.push(ExperienceItem::placeholder());
                let new_len = experience.len();
                let next = Content {
                    experience,
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_insert(Section::Experience, new_len - 1);
            }
            DraftCommand::UpdateExperience { index, field } => {
                let current = self.current()?;
                let item = Self::entry_at(&current.experience, Section::Experience, index)?;
                let next = Content {
                    experience: replace_at(&current.experience, index, field.apply_to(item)),
                    ..current.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::RemoveExperience { index } => {
                let current = self.current()?;
                Self::entry_at(&current.experience, Section::Experience, index)?;
                let next = Content {
                    experience: remove_at(&current.experience, index),
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_remove(Section::Experience, index);
            }
            DraftCommand::AddCertification => {
                let current = self.current()?;
                let mut certifications = current.certifications.clone();
                certifications.push(Certification::placeholder());
                let new_len = certifications.len();
                let next = Content {
                    certifications,
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_insert(Section::Certifications, new_len - 1);
            }
            DraftCommand::UpdateCertification { index, field } => {
                let current = self.current()?;
                let cert =
                    Self::entry_at(&current.certifications, Section::Certifications, index)?;
                let next = Content {
                    certifications: replace_at(
                        &current.certifications,
                        index,
                        field.apply_to(cert),
                    ),
                    ..current.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::RemoveCertification { index } => {
                let current = self.current()?;
                Self::entry_at(&current.certifications, Section::Certifications, index)?;
                let next = Content {
                    certifications: remove_at(&current.certifications, index),
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_remove(Section::Certifications, index);
            }
            DraftCommand::AddProject => {
                let current = self.current()?;
                let mut projects = current.projects.clone();
                projects.push(Project::placeholder());
                let new_len = projects.len();
                let next = Content {
                    projects,
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_insert(Section::Projects, new_len - 1);
            }
            DraftCommand::UpdateProject { index, field } => {
                let current = self.current()?;
                let project = Self::entry_at(&current.projects, Section::Projects, index)?;
                let next = Content {
                    projects: replace_at(&current.projects, index, field.apply_to(project)),
                    ..current.clone()
                };
                self.content = Some(next);
            }
            DraftCommand::RemoveProject { index } => {
                let current = self.current()?;
                Self::entry_at(&current.projects, Section::Projects, index)?;
                let next = Content {
                    projects: remove_at(&current.projects, index),
                    ..current.clone()
                };
                self.content = Some(next);
                self.panels.on_remove(Section::Projects, index);
            }
            DraftCommand::AddSkill { value } => {
                let trimmed = value.trim();
                // Empty or duplicate candidates are dropped silently.
                if !trimmed.is_empty() && !self.skills.iter().any(|s| s == trimmed) {
                    self.skills.push(trimmed.to_string());
                }
            }
            DraftCommand::RemoveSkill { value } => {
                self.skills.retain(|s| s != &value);
            }
        }

        Ok(())
    }

    fn current(&self) -> Result<&Content, DraftError> {
        self.content.as_ref().ok_or(DraftError::NotLoaded)
    }

    fn entry_at<'a, T>(
        items: &'a [T],
        section: Section,
        index: usize,
    ) -> Result<&'a T, DraftError> {
        items
            .get(index)
            .ok_or(DraftError::IndexOutOfRange { section, index })
    }
}
