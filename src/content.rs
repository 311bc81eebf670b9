use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Envelope,
    MapMarker,
    Shield,
    Lock,
    Code,
    Tools,
    Cogs,
}

impl Icon {
    /// Brand icons come from the devicon font, everything else is a glyph.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Icon::Github => Some("devicon-github-original"),
            Icon::Linkedin => Some("devicon-linkedin-plain"),
            Icon::Twitter => Some("devicon-twitter-original"),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Github | Icon::Linkedin | Icon::Twitter => "",
            Icon::Envelope => "✉️",
            Icon::MapMarker => "📍",
            Icon::Shield => "🛡️",
            Icon::Lock => "🔐",
            Icon::Code => "💻",
            Icon::Tools => "🛠️",
            Icon::Cogs => "⚙️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: Icon,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        is_external(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub summary: String,
    pub tagline: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub score: Option<String>,
    pub description: String,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Audit,
    Research,
    Tool,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Audit => "Security Audit",
            ProjectCategory::Research => "Research",
            ProjectCategory::Tool => "Development",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ProjectCategory::Audit => Icon::Shield,
            ProjectCategory::Research => Icon::Lock,
            ProjectCategory::Tool => Icon::Code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkCategory {
    Conference,
    Workshop,
    Webinar,
    Meetup,
    Panel,
}

impl TalkCategory {
    pub fn label(self) -> &'static str {
        match self {
            TalkCategory::Conference => "Conference",
            TalkCategory::Workshop => "Workshop",
            TalkCategory::Webinar => "Webinar",
            TalkCategory::Meetup => "Meetup",
            TalkCategory::Panel => "Panel",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TalkCategory::Conference => "#667eea",
            TalkCategory::Workshop => "#f093fb",
            TalkCategory::Webinar => "#4facfe",
            TalkCategory::Meetup => "#43e97b",
            TalkCategory::Panel => "#fa709a",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalkEntry {
    pub title: String,
    pub event: String,
    pub date: String,
    pub location: String,
    pub category: TalkCategory,
    pub description: String,
    pub topics: Vec<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub slides_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub color: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
    pub icon: Icon,
}

pub fn is_external(url: &str) -> bool {
    url.starts_with("http")
}

pub fn parse<T: DeserializeOwned>(file: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    let parsed = parse(file, &content.data);
    if let Err(e) = &parsed {
        log::error!("{e}");
    }
    parsed
}

static PROFILE: LazyLock<Result<Profile, ContentError>> = LazyLock::new(|| load("profile.json"));
static EXPERIENCE: LazyLock<Result<Vec<ExperienceEntry>, ContentError>> =
    LazyLock::new(|| load("experience.json"));
static EDUCATION: LazyLock<Result<Education, ContentError>> =
    LazyLock::new(|| load("education.json"));
static PROJECTS: LazyLock<Result<Vec<ProjectEntry>, ContentError>> =
    LazyLock::new(|| load("projects.json"));
static SKILLS: LazyLock<Result<Vec<SkillCategory>, ContentError>> =
    LazyLock::new(|| load("skills.json"));
static TALKS: LazyLock<Result<Vec<TalkEntry>, ContentError>> =
    LazyLock::new(|| load("talks.json"));
static CONTACT: LazyLock<Result<Vec<ContactMethod>, ContentError>> =
    LazyLock::new(|| load("contact.json"));

pub fn profile() -> Result<&'static Profile, ContentError> {
    PROFILE.as_ref().map_err(Clone::clone)
}

pub fn experience() -> Result<&'static [ExperienceEntry], ContentError> {
    EXPERIENCE.as_deref().map_err(Clone::clone)
}

pub fn education() -> Result<&'static Education, ContentError> {
    EDUCATION.as_ref().map_err(Clone::clone)
}

pub fn projects() -> Result<&'static [ProjectEntry], ContentError> {
    PROJECTS.as_deref().map_err(Clone::clone)
}

pub fn skills() -> Result<&'static [SkillCategory], ContentError> {
    SKILLS.as_deref().map_err(Clone::clone)
}

pub fn talks() -> Result<&'static [TalkEntry], ContentError> {
    TALKS.as_deref().map_err(Clone::clone)
}

pub fn contact_methods() -> Result<&'static [ContactMethod], ContentError> {
    CONTACT.as_deref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dataset_loads() {
        assert!(profile().is_ok());
        assert_eq!(experience().unwrap().len(), 4);
        let edu = education().unwrap();
        assert_eq!(edu.education.len(), 1);
        assert_eq!(edu.certifications.len(), 6);
        assert_eq!(projects().unwrap().len(), 8);
        assert_eq!(skills().unwrap().len(), 5);
        assert_eq!(talks().unwrap().len(), 6);
        assert_eq!(contact_methods().unwrap().len(), 5);
    }

    #[test]
    fn test_only_first_role_is_current() {
        let roles = experience().unwrap();
        assert!(roles[0].current);
        assert_eq!(roles[0].company, "Matter Labs/zkSync");
        assert!(roles[1..].iter().all(|r| !r.current));
    }

    #[test]
    fn test_projects_keep_source_order_and_links() {
        let projects = projects().unwrap();
        let titles = projects.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles.first(), Some(&"CipherShastra"));
        assert_eq!(titles.last(), Some(&"PLONKish Verifiers Research"));

        let nord = projects
            .iter()
            .find(|p| p.title == "Nord Finance Ecosystem")
            .expect("Nord project should exist");
        let labels = nord.links.iter().map(|l| l.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Nord Finance", "Nord Advisory", "Nord Loan"]);

        let research = projects.last().unwrap();
        assert!(research.links.is_empty());
        assert_eq!(research.category, ProjectCategory::Research);
        assert!(projects.iter().all(|p| !p.featured));
    }

    #[test]
    fn test_talk_optional_fields_default() {
        let talks = talks().unwrap();
        let featured = talks.iter().filter(|t| t.featured).count();
        assert_eq!(featured, 2);
        assert!(talks.iter().all(|t| t.video_url.is_none() && t.slides_url.is_none()));
        assert_eq!(talks[1].category, TalkCategory::Workshop);
        assert_eq!(talks[1].category.color(), "#f093fb");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ProjectCategory::Audit.label(), "Security Audit");
        assert_eq!(ProjectCategory::Tool.label(), "Development");
        assert_eq!(ProjectCategory::Tool.icon(), Icon::Code);
        assert_eq!(TalkCategory::Panel.label(), "Panel");
    }

    #[test]
    fn test_contact_location_has_no_link() {
        let methods = contact_methods().unwrap();
        let location = methods.iter().find(|m| m.label == "Location").unwrap();
        assert!(location.link.is_none());
        assert_eq!(location.icon, Icon::MapMarker);
    }

    #[test]
    fn test_parse_errors_name_the_file() {
        let err = parse::<Vec<ProjectEntry>>("projects.json", b"[{\"title\": 1}]").unwrap_err();
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, "projects.json"),
            e => panic!("expected parse error, got {e:?}"),
        }

        let err = parse::<Vec<TalkEntry>>(
            "talks.json",
            br#"[{"title":"t","event":"e","date":"d","location":"l","category":"keynote","description":"x","topics":[]}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("talks.json"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load::<Profile>("missing.json").unwrap_err();
        assert_eq!(err, ContentError::NotFound("missing.json".to_string()));
    }

    #[test]
    fn test_external_links() {
        assert!(is_external("https://github.com/razzor"));
        assert!(!is_external("mailto:razzor@ciphershastra.com"));
    }
}
