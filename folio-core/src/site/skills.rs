use crate::animation::tween::stagger;
use crate::foundation::core::Vec2;
use crate::reveal::controller::RevealSpec;

/// A skill and its self-assessed level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Skill {
    /// Display name as shown beside the bar.
    pub name: &'static str,
    /// Level in percent, `0..=100`.
    pub level: u8,
}

/// Titled group of skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SkillCategory {
    /// Group title.
    pub name: &'static str,
    /// Skills in display order.
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

/// The fixed skill groups, in display order.
pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Languages",
        skills: &[
            skill("Python", 90),
            skill("JavaScript", 85),
            skill("Java", 70),
            skill("PHP", 65),
            skill("C", 60),
            skill("C++", 55),
        ],
    },
    SkillCategory {
        name: "Frameworks & Tools",
        skills: &[
            skill("Flask", 85),
            skill("Next.js", 80),
            skill("Django", 75),
            skill("Squarespace", 90),
            skill("Docker", 70),
            skill("Coolify", 65),
            skill("Gunicorn", 75),
        ],
    },
    SkillCategory {
        name: "Web & UI",
        skills: &[
            skill("HTML", 95),
            skill("CSS", 90),
            skill("SCSS", 80),
            skill("Tailwind CSS", 85),
            skill("jQuery", 75),
        ],
    },
    SkillCategory {
        name: "APIs & Databases",
        skills: &[
            skill("REST API", 85),
            skill("Django REST Framework", 80),
            skill("MySQL", 85),
            skill("PostgreSQL", 80),
            skill("SQLite", 90),
            skill("Supabase", 75),
        ],
    },
];

/// Bar width in percent for a skill whose reveal has reached `progress`.
pub fn skill_bar_width(level: u8, progress: f64) -> f64 {
    f64::from(level.min(100)) * progress.clamp(0.0, 1.0)
}

/// Reveal for the `index`-th bar of a group: grows over a second, each bar a tenth
/// of a second after the previous one.
pub fn skill_bar_reveal(index: usize) -> RevealSpec {
    RevealSpec::default()
        .with_threshold(f64::MIN_POSITIVE)
        .with_duration(1.0)
        .with_delay(stagger(0.2, index, 0.1))
        .with_offset(Vec2::ZERO)
}

#[cfg(test)]
#[path = "../../tests/unit/site/skills.rs"]
mod tests;
