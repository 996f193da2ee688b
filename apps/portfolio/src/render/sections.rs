//! Section view models: what each page section shows, derived from the
//! content record. Templates only lay these out.

use serde::Serialize;

use crate::content::models::{
    Certification, Education, Experience, Language, Project, Service, SkillCategory, Stat,
    Testimonial,
};
use crate::content::{IconGlyph, Profile};
use crate::render::reveal::{Reveal, RevealEffect};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Services,
    Skills,
    Experience,
    Education,
    Certifications,
    Projects,
    Testimonials,
    Contact,
}

impl SectionKind {
    /// Page order. Every section is always rendered, in exactly this order.
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Certifications,
        SectionKind::Projects,
        SectionKind::Testimonials,
        SectionKind::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Certifications => "certifications",
            SectionKind::Projects => "projects",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Contact => "contact",
        }
    }

    fn heading(self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            SectionKind::Hero | SectionKind::Contact => (None, None),
            SectionKind::About => (Some("About Me"), None),
            SectionKind::Services => (
                Some("What I Do"),
                Some("Specialized technical services for modern web needs"),
            ),
            SectionKind::Skills => (
                Some("Technical Arsenal"),
                Some("The tools and technologies I use to bring ideas to life"),
            ),
            SectionKind::Experience => {
                (Some("Experience"), Some("My professional journey so far"))
            }
            SectionKind::Education => (
                Some("Education"),
                Some("Degrees, schools and the languages I work in"),
            ),
            SectionKind::Certifications => (
                Some("Certifications"),
                Some("Credentials earned along the way"),
            ),
            SectionKind::Projects => (
                Some("Featured Work"),
                Some("A selection of my recent projects"),
            ),
            SectionKind::Testimonials => (
                Some("Testimonials"),
                Some("What people say about working with me"),
            ),
        }
    }

    fn empty_message(self) -> Option<&'static str> {
        match self {
            SectionKind::Services => Some("No services listed yet."),
            SectionKind::Skills => Some("No skills listed yet."),
            SectionKind::Experience => Some("No experience listed yet."),
            SectionKind::Education => Some("No education listed yet."),
            SectionKind::Certifications => Some("No certifications listed yet."),
            SectionKind::Projects => Some("No projects to show yet."),
            SectionKind::Testimonials => Some("No testimonials yet."),
            SectionKind::Hero | SectionKind::About | SectionKind::Contact => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Views
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SectionView<'a> {
    pub kind: SectionKind,
    pub anchor: &'static str,
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub header_reveal: Reveal,
    pub cards: Vec<Card<'a>>,
    /// Set when a list section has nothing to show.
    pub empty: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card<'a> {
    pub reveal: Reveal,
    pub body: CardBody<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardBody<'a> {
    Stat {
        value: &'a str,
        label: &'a str,
    },
    Service {
        title: &'a str,
        description: &'a str,
        glyph: IconGlyph,
    },
    SkillGroup {
        category: &'a str,
        skills: &'a [String],
        glyph: IconGlyph,
    },
    Job {
        role: &'a str,
        company: &'a str,
        period: &'a str,
        description: &'a str,
        skills: &'a [String],
        /// Timeline side on wide screens; alternates per entry.
        side: &'static str,
    },
    Degree {
        degree: &'a str,
        institution: &'a str,
        period: &'a str,
        description: Option<&'a str>,
    },
    Language {
        language: &'a str,
        proficiency: &'a str,
    },
    Certificate {
        name: &'a str,
        issuer: &'a str,
        year: &'a str,
        url: Option<&'a str>,
    },
    Project {
        title: &'a str,
        description: &'a str,
        tech: &'a [String],
        link: Option<&'a str>,
        image: Option<&'a str>,
    },
    Testimonial {
        text: &'a str,
        name: &'a str,
        role: &'a str,
        company: &'a str,
        initial: String,
    },
}

const CARD_STAGGER_MS: u32 = 150;
const ROW_STAGGER_MS: u32 = 100;
const QUOTE_STAGGER_MS: u32 = 200;

fn staggered<'a, T>(
    items: &'a [T],
    effect: RevealEffect,
    step_ms: u32,
    body: impl Fn(usize, &'a T) -> CardBody<'a>,
) -> Vec<Card<'a>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Card {
            reveal: Reveal::staggered(effect, i, step_ms),
            body: body(i, item),
        })
        .collect()
}

fn stat_card(_: usize, s: &Stat) -> CardBody<'_> {
    CardBody::Stat {
        value: &s.value,
        label: &s.label,
    }
}

fn service_card(_: usize, s: &Service) -> CardBody<'_> {
    CardBody::Service {
        title: &s.title,
        description: &s.description,
        glyph: s.icon.glyph(),
    }
}

fn skill_card(_: usize, c: &SkillCategory) -> CardBody<'_> {
    CardBody::SkillGroup {
        category: &c.category,
        skills: &c.skills,
        glyph: c.icon.glyph(),
    }
}

fn job_card(i: usize, job: &Experience) -> CardBody<'_> {
    CardBody::Job {
        role: &job.role,
        company: &job.company,
        period: &job.period,
        description: &job.description,
        skills: &job.skills,
        side: if i % 2 == 0 { "right" } else { "left" },
    }
}

fn degree_card(_: usize, e: &Education) -> CardBody<'_> {
    CardBody::Degree {
        degree: &e.degree,
        institution: &e.institution,
        period: &e.period,
        description: e.description.as_deref(),
    }
}

fn language_card(_: usize, l: &Language) -> CardBody<'_> {
    CardBody::Language {
        language: &l.language,
        proficiency: &l.proficiency,
    }
}

fn certificate_card(_: usize, c: &Certification) -> CardBody<'_> {
    CardBody::Certificate {
        name: &c.name,
        issuer: &c.issuer,
        year: &c.year,
        url: c.url.as_deref(),
    }
}

fn project_card(_: usize, p: &Project) -> CardBody<'_> {
    CardBody::Project {
        title: &p.title,
        description: &p.description,
        tech: &p.tech,
        link: p.link.as_deref(),
        image: p.image.as_deref().filter(|src| !src.trim().is_empty()),
    }
}

fn testimonial_card(_: usize, t: &Testimonial) -> CardBody<'_> {
    CardBody::Testimonial {
        text: &t.text,
        name: &t.name,
        role: &t.role,
        company: &t.company,
        initial: t
            .name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default(),
    }
}

fn cards_for(kind: SectionKind, profile: &Profile) -> Vec<Card<'_>> {
    use RevealEffect::{FadeUp, Scale};

    match kind {
        SectionKind::Hero | SectionKind::Contact => Vec::new(),
        SectionKind::About => staggered(&profile.stats, FadeUp, ROW_STAGGER_MS, stat_card),
        SectionKind::Services => {
            staggered(&profile.services, FadeUp, CARD_STAGGER_MS, service_card)
        }
        SectionKind::Skills => staggered(&profile.skills, FadeUp, ROW_STAGGER_MS, skill_card),
        SectionKind::Experience => {
            staggered(&profile.experience, FadeUp, ROW_STAGGER_MS, job_card)
        }
        SectionKind::Education => {
            let mut cards = staggered(&profile.education, FadeUp, ROW_STAGGER_MS, degree_card);
            cards.extend(staggered(
                &profile.languages,
                Scale,
                ROW_STAGGER_MS,
                language_card,
            ));
            cards
        }
        SectionKind::Certifications => staggered(
            &profile.certifications,
            FadeUp,
            ROW_STAGGER_MS,
            certificate_card,
        ),
        SectionKind::Projects => {
            staggered(&profile.projects, FadeUp, CARD_STAGGER_MS, project_card)
        }
        SectionKind::Testimonials => staggered(
            &profile.testimonials,
            Scale,
            QUOTE_STAGGER_MS,
            testimonial_card,
        ),
    }
}

/// One view per `SectionKind::ALL`, in page order.
pub fn build_sections(profile: &Profile) -> Vec<SectionView<'_>> {
    SectionKind::ALL
        .iter()
        .map(|&kind| {
            let (title, subtitle) = kind.heading();
            let cards = cards_for(kind, profile);
            let empty = if cards.is_empty() {
                kind.empty_message()
            } else {
                None
            };
            SectionView {
                kind,
                anchor: kind.anchor(),
                title,
                subtitle,
                header_reveal: Reveal::fade_up(),
                cards,
                empty,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_fixed_order() {
        let profile = Profile::builtin();
        let kinds: Vec<SectionKind> = build_sections(&profile).iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_one_card_per_category() {
        let profile = Profile::builtin();
        let sections = build_sections(&profile);
        let skills = sections
            .iter()
            .find(|s| s.kind == SectionKind::Skills)
            .unwrap();
        assert_eq!(skills.cards.len(), profile.skills.len());
        assert!(skills.empty.is_none());
    }

    #[test]
    fn test_empty_list_keeps_section_with_message() {
        let mut profile = Profile::builtin();
        profile.testimonials.clear();
        profile.projects.clear();

        let sections = build_sections(&profile);
        assert_eq!(sections.len(), SectionKind::ALL.len());
        for kind in [SectionKind::Testimonials, SectionKind::Projects] {
            let section = sections.iter().find(|s| s.kind == kind).unwrap();
            assert!(section.cards.is_empty());
            assert!(section.empty.is_some());
        }
    }

    #[test]
    fn test_experience_alternates_timeline_side() {
        let profile = Profile::builtin();
        assert!(profile.experience.len() >= 2);
        let sections = build_sections(&profile);
        let jobs = &sections
            .iter()
            .find(|s| s.kind == SectionKind::Experience)
            .unwrap()
            .cards;

        let sides: Vec<&str> = jobs
            .iter()
            .map(|c| match &c.body {
                CardBody::Job { side, .. } => *side,
                _ => "",
            })
            .collect();
        assert_eq!(&sides[..2], &["right", "left"]);
    }

    #[test]
    fn test_blank_project_image_is_treated_as_missing() {
        let mut profile = Profile::builtin();
        profile.projects.truncate(1);
        profile.projects[0].image = Some("  ".into());

        let sections = build_sections(&profile);
        let card = &sections
            .iter()
            .find(|s| s.kind == SectionKind::Projects)
            .unwrap()
            .cards[0];
        assert!(matches!(card.body, CardBody::Project { image: None, .. }));
    }

    #[test]
    fn test_testimonials_use_scale_reveal_with_stagger() {
        let mut profile = Profile::builtin();
        for i in 0..2 {
            profile.testimonials.push(Testimonial {
                id: i.to_string(),
                name: "ana".into(),
                role: "CTO".into(),
                company: "Acme".into(),
                text: "Great work".into(),
            });
        }
        let sections = build_sections(&profile);
        let cards = &sections
            .iter()
            .find(|s| s.kind == SectionKind::Testimonials)
            .unwrap()
            .cards;
        assert_eq!(cards[1].reveal, Reveal::staggered(RevealEffect::Scale, 1, 200));
        assert!(matches!(&cards[0].body, CardBody::Testimonial { initial, .. } if initial == "A"));
    }
}
