use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{FolioError, FolioResult};

/// Project grouping used by the filter buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No filtering.
    #[default]
    All,
    /// Web development.
    Web,
    /// Backend work.
    Backend,
}

impl Category {
    /// Filter buttons in display order.
    pub const ALL: [Category; 3] = [Category::All, Category::Web, Category::Backend];

    /// Identifier used in URLs and data.
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Web => "web",
            Self::Backend => "backend",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Web => "Web Development",
            Self::Backend => "Backend",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                FolioError::validation(format!(
                    "unknown project category '{s}' (expected all, web or backend)"
                ))
            })
    }
}

/// Portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Project {
    /// Stable id.
    pub id: u32,
    /// Card heading.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Thumbnail path under the static asset root.
    pub image: &'static str,
    /// Technology tags.
    pub tags: &'static [&'static str],
    /// Live site, empty when there is none.
    pub link: &'static str,
    /// Source repository, empty when private.
    pub github: &'static str,
    /// Filter group; never [`Category::All`].
    pub category: Category,
}

/// The fixed project list, in display order.
pub const PROJECTS: [Project; 5] = [
    Project {
        id: 1,
        title: "Ecofarm",
        description: "Predicts methane emissions from cows based on environmental and feed data.",
        image: "/projects/ecofarm.jpg",
        tags: &["Flask", "Python", "HTML", "CSS", "JavaScript"],
        link: "https://ecofarm.cecilgachie.tech",
        github: "https://github.com/permoK/ecofarm",
        category: Category::Web,
    },
    Project {
        id: 2,
        title: "Fivestarsewer",
        description: "Drain & sewer service website for a local business, built with Next.js and hosted on EC2.",
        image: "/projects/fivestarsewer.jpg",
        tags: &["Next.js", "React", "Tailwind CSS", "AWS EC2"],
        link: "https://fivestarsewer.com",
        github: "https://github.com/permoK/fivestarsewer",
        category: Category::Web,
    },
    Project {
        id: 3,
        title: "CZ Supply",
        description: "E-commerce site on Squarespace with custom theme modifications.",
        image: "/projects/czsupply.jpg",
        tags: &["Squarespace", "CSS", "JavaScript"],
        link: "https://czsupply.com",
        github: "",
        category: Category::Web,
    },
    Project {
        id: 4,
        title: "Jadi DBMS SDK",
        description: "A database management system SDK built with Python.",
        image: "/projects/jadi.jpg",
        tags: &["Python", "SQL", "Database"],
        link: "",
        github: "https://github.com/permoK/jadi-DBMS-SDK",
        category: Category::Backend,
    },
    Project {
        id: 5,
        title: "Django Daraja App",
        description: "Integration of M-Pesa payment gateway with Django.",
        image: "/projects/django-daraja.jpg",
        tags: &["Django", "Python", "API", "Payments"],
        link: "",
        github: "https://github.com/permoK/django_daraja_app",
        category: Category::Backend,
    },
];

/// Projects shown for `category`, preserving list order.
pub fn filter_projects(projects: &[Project], category: Category) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| category == Category::All || p.category == category)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/site/projects.rs"]
mod tests;
