//! Deterministic lead scoring rubric.
//!
//! The rubric is 100 points across four weighted categories. The pipeline's
//! Score stage stays LLM-delegated, but this module is the single source of
//! truth for the bands and thresholds: the scoring-stage prompt is rendered
//! from [`rubric_text`], and the same bands are available as executable code
//! for anything that wants a deterministic score.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::TargetConfig;

/// Email domains that indicate a personal address rather than a company one.
const GENERIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "live.com",
    "msn.com",
    "proton.me",
    "protonmail.com",
];

/// Extract the domain part of an email address.
pub fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

/// Is this a generic consumer email domain (gmail, yahoo, ...)?
pub fn is_generic_domain(domain: &str) -> bool {
    let lower = domain.to_ascii_lowercase();
    GENERIC_DOMAINS.iter().any(|g| lower == *g)
}

// ── Email domain band (max 20) ──────────────────────────────────────

/// Email domain quality band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    /// Business email domain.
    Business,
    /// Generic domain, but a company was named elsewhere in the submission.
    GenericWithCompany,
    /// Generic domain and no company named.
    GenericOnly,
}

impl DomainKind {
    /// Classify a sender address, given whether a company was named.
    pub fn classify(email: &str, company_named: bool) -> Self {
        let generic = email_domain(email).is_some_and(is_generic_domain);
        match (generic, company_named) {
            (false, _) => Self::Business,
            (true, true) => Self::GenericWithCompany,
            (true, false) => Self::GenericOnly,
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            Self::Business => 20,
            Self::GenericWithCompany => 10,
            Self::GenericOnly => 0,
        }
    }
}

// ── Company fit band (max 40) ───────────────────────────────────────

/// Which target criteria the company matched. Additive and independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFit {
    pub industry: bool,
    pub size: bool,
    pub region: bool,
}

impl CompanyFit {
    pub fn points(&self) -> u8 {
        let mut points = 0;
        if self.industry {
            points += 20;
        }
        if self.size {
            points += 10;
        }
        if self.region {
            points += 10;
        }
        points
    }
}

// ── Contact role band (max 20) ──────────────────────────────────────

/// Seniority band for the contact's job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleBand {
    /// C-level, VP, Director — decision maker.
    DecisionMaker,
    /// Manager, Lead, Specialist — influencer.
    Influencer,
    /// No clear role, or junior.
    Unknown,
}

fn decision_maker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(chief|ceo|cto|cfo|coo|cio|cmo|founder|co-founder|president|vp|vice president|director|head)\b",
        )
        .unwrap()
    })
}

fn influencer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(manager|lead|specialist)\b").unwrap())
}

impl RoleBand {
    /// Classify a free-text job title by keyword. Decision-maker keywords win
    /// over influencer keywords ("Lead Director" is a decision maker).
    pub fn classify(title: &str) -> Self {
        if decision_maker_regex().is_match(title) {
            Self::DecisionMaker
        } else if influencer_regex().is_match(title) {
            Self::Influencer
        } else {
            Self::Unknown
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            Self::DecisionMaker => 20,
            Self::Influencer => 10,
            Self::Unknown => 0,
        }
    }
}

// ── Message intent band (max 20) ────────────────────────────────────

/// How actionable the lead's message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentBand {
    /// Specific interest or request with a clear need.
    Specific,
    /// General inquiry about services.
    General,
    /// Vague or spam-like message.
    Vague,
}

impl IntentBand {
    pub fn points(&self) -> u8 {
        match self {
            Self::Specific => 20,
            Self::General => 10,
            Self::Vague => 0,
        }
    }
}

// ── Total score and qualification status ────────────────────────────

/// A complete scored lead. Each component is clamped to its band maximum by
/// construction, so `total` is always 0–100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub domain: DomainKind,
    pub fit: CompanyFit,
    pub role: RoleBand,
    pub intent: IntentBand,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.domain.points() + self.fit.points() + self.role.points() + self.intent.points()
    }

    pub fn status(&self) -> QualificationStatus {
        QualificationStatus::from_total(self.total())
    }
}

/// Qualification outcome derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationStatus {
    Qualified,
    NeedsReview,
    Unqualified,
}

impl QualificationStatus {
    /// Thresholds: 80+ Qualified, 50–79 Needs Review, below 50 Unqualified.
    pub fn from_total(total: u8) -> Self {
        if total >= 80 {
            Self::Qualified
        } else if total >= 50 {
            Self::NeedsReview
        } else {
            Self::Unqualified
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Qualified => "Qualified",
            Self::NeedsReview => "Needs Review",
            Self::Unqualified => "Unqualified",
        }
    }
}

// ── Prompt rendering ────────────────────────────────────────────────

/// Render the scoring rubric as prompt text for the Score stage.
///
/// Keeping this next to the executable bands means the prompt and the code
/// can never drift apart.
pub fn rubric_text(target: &TargetConfig) -> String {
    format!(
        "Score this lead out of 100 points based on:\n\
         \n\
         Target Criteria:\n\
         - Target Industries: {industries}\n\
         - Target Company Sizes: {sizes}\n\
         - Target Regions: {regions}\n\
         \n\
         Scoring Rubric (100 points total):\n\
         \n\
         1. Email Domain Score (20 points):\n\
            - Business email domain (not gmail/yahoo/hotmail): 20 points\n\
            - Generic email but company mentioned: 10 points\n\
            - Generic email only: 0 points\n\
         \n\
         2. Company Fit Score (40 points):\n\
            - Industry matches target: 20 points\n\
            - Company size matches target: 10 points\n\
            - Location matches target region: 10 points\n\
         \n\
         3. Contact Role Score (20 points):\n\
            - C-level, VP, Director (decision maker): 20 points\n\
            - Manager, Lead, Specialist (influencer): 10 points\n\
            - No clear role or junior role: 0 points\n\
         \n\
         4. Message Intent Score (20 points):\n\
            - Specific interest/request with clear need: 20 points\n\
            - General inquiry about services: 10 points\n\
            - Vague or spam-like message: 0 points\n\
         \n\
         Return:\n\
         - Total score (0-100)\n\
         - Breakdown for each category with justification\n\
         - Qualification status (Qualified 80+, Needs Review 50-79, Unqualified <50)",
        industries = target.industries.join(", "),
        sizes = target.company_sizes.join(", "),
        regions = target.regions.join(", "),
    )
}
