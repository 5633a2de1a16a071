//! Static page content.

pub const OWNER_NAME: &str = "Alex Tran";
pub const OWNER_INITIALS: &str = "AT";
pub const CONTACT_EMAIL: &str = "hello@alextran.dev";
pub const HERO_SUBTITLE: &str = "Data Science";
pub const HERO_SUMMARY: &str =
    "Turning messy data into decisions: analytics, forecasting and machine learning for finance.";
pub const PROFILE_IMAGE: &str = "/assets/profile.svg";

pub const ROLES: [&str; 5] = [
    "Data Science",
    "Data Analyst",
    "Business Analyst",
    "Machine Learning",
    "FinTech Enthusiast",
];

/// Section ids in document order; the hero is `home`.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "experience", "education", "contact"];

pub struct NavLink {
    pub section_id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { section_id: "home", label: "Home" },
    NavLink { section_id: "about", label: "About" },
    NavLink { section_id: "skills", label: "Skills" },
    NavLink { section_id: "experience", label: "Experience" },
    NavLink { section_id: "education", label: "Education" },
    NavLink { section_id: "contact", label: "Contact" },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I am a data analyst with a background in finance, working where statistics meets product decisions.",
    "Most of my week is spent building pipelines, dashboards and models that people actually use.",
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Languages",
        skills: &["Python", "SQL", "R", "TypeScript"],
    },
    SkillCategory {
        title: "Data & ML",
        skills: &["pandas", "scikit-learn", "PyTorch", "XGBoost", "Statsmodels"],
    },
    SkillCategory {
        title: "Analytics",
        skills: &["Tableau", "Power BI", "Looker", "Excel"],
    },
    SkillCategory {
        title: "Platforms",
        skills: &["PostgreSQL", "BigQuery", "Airflow", "Docker"],
    },
];

pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub roles: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        title: "Data Analyst",
        organization: "Northwind Capital",
        period: "2023 – Present",
        highlights: &[
            "Built the daily risk dashboard used by the trading desk.",
            "Cut reporting latency from hours to minutes with incremental models.",
        ],
        roles: &["Data Analyst", "FinTech"],
    },
    Experience {
        title: "Business Analyst Intern",
        organization: "Harbor Payments",
        period: "2022",
        highlights: &[
            "Modelled merchant churn and sized retention campaigns.",
            "Automated the monthly KPI deck.",
        ],
        roles: &["Business Analyst"],
    },
    Experience {
        title: "Research Assistant",
        organization: "University Data Science Lab",
        period: "2021 – 2022",
        highlights: &["Trained forecasting models on public market data."],
        roles: &["Machine Learning", "Data Science"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "B.Sc. Data Science",
        school: "State University",
        period: "2019 – 2023",
    },
    Education {
        degree: "Certificate in Financial Technology",
        school: "Online Academy",
        period: "2024",
    },
];

pub struct Contact {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: [Contact; 3] = [
    Contact {
        label: "Email",
        value: CONTACT_EMAIL,
        href: "mailto:hello@alextran.dev",
    },
    Contact {
        label: "LinkedIn",
        value: "linkedin.com/in/alextran",
        href: "https://www.linkedin.com/in/alextran",
    },
    Contact {
        label: "GitHub",
        value: "github.com/alextran",
        href: "https://github.com/alextran",
    },
];

pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

pub const HERO_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Get In Touch",
        href: "#contact",
        primary: true,
    },
    CallToAction {
        label: "View Experience",
        href: "#experience",
        primary: false,
    },
];

pub fn section_href(section_id: &str) -> String {
    format!("#{section_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_nav_link_points_at_a_section() {
        for link in &NAV_LINKS {
            assert!(SECTION_IDS.contains(&link.section_id), "{}", link.section_id);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
    }

    #[test]
    fn hero_starts_the_document() {
        assert_eq!(SECTION_IDS[0], "home");
        assert_eq!(section_href("about"), "#about");
    }

    #[test]
    fn roles_are_non_empty() {
        assert!(ROLES.iter().all(|role| !role.is_empty()));
    }

    #[test]
    fn contact_email_link_matches_address() {
        assert_eq!(CONTACTS[0].href, format!("mailto:{CONTACT_EMAIL}"));
    }
}
