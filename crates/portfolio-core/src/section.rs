use std::fmt;
use std::str::FromStr;

/// Named page region the navigation can highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id `{0}`")]
pub struct SectionParseError(pub String);

impl Section {
    /// DOM id of the region's element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Expertise",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "about" => Ok(Section::About),
            "skills" => Ok(Section::Skills),
            "projects" => Ok(Section::Projects),
            "contact" => Ok(Section::Contact),
            other => Err(SectionParseError(other.to_string())),
        }
    }
}
