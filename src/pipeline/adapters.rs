//! Entry adapters — build the four stage specs from a lead submission.
//!
//! The two adapters differ only in the Extract stage: the email adapter pulls
//! facts out of unstructured email text, the form adapter restructures
//! already-discrete fields. Stages 2–4 are identical for both, parameterized
//! by the same target configuration.

use crate::config::TargetConfig;
use crate::lead::{EmailLead, FormLead};
use crate::pipeline::types::{StageKind, StageSpec};
use crate::scoring;

/// Industry taxonomy the Enrich stage classifies into.
const INDUSTRY_TAXONOMY: &str =
    "Technology, Healthcare, Finance, Manufacturing, Retail, Education, Consulting, Real Estate, or Other";

/// Company size bands the Enrich stage estimates against.
const SIZE_BANDS: &str = "Startup 1-50, SMB 51-500, Enterprise 500+";

/// Build the four-stage pipeline for a raw email submission.
pub fn email_stages(lead: &EmailLead, target: &TargetConfig) -> Vec<StageSpec> {
    let extract = StageSpec {
        kind: StageKind::Extract,
        role: "Email Information Extractor".to_string(),
        goal: "Extract all relevant contact and company information from email content"
            .to_string(),
        instructions: format!(
            "Extract the following information from this email:\n\
             - Sender Email: {sender}\n\
             - Subject: {subject}\n\
             - Content: {content}\n\
             \n\
             Extract and return:\n\
             1. Sender's full name (if mentioned)\n\
             2. Company name (if mentioned or inferred from email domain)\n\
             3. Job title/designation (if mentioned)\n\
             4. Email domain\n\
             5. Main intent/purpose of the email\n\
             \n\
             Return in structured format.",
            sender = lead.sender_email,
            subject = lead.subject,
            content = lead.content,
        ),
        expected_output:
            "Structured JSON with sender_name, company_name, designation, domain, and intent"
                .to_string(),
    };

    let mut stages = vec![extract];
    stages.extend(shared_tail(target));
    stages
}

/// Build the four-stage pipeline for a structured form submission.
pub fn form_stages(lead: &FormLead, target: &TargetConfig) -> Vec<StageSpec> {
    let extract = StageSpec {
        kind: StageKind::Extract,
        role: "Email Information Extractor".to_string(),
        goal: "Structure form submission data and classify the sender's intent".to_string(),
        instructions: format!(
            "Structure the following form submission data:\n\
             - Name: {name}\n\
             - Company: {company}\n\
             - Designation: {designation}\n\
             - Email: {email}\n\
             - Query: {query}\n\
             \n\
             Extract:\n\
             1. Email domain\n\
             2. Assess if email is business or personal\n\
             3. Classify the intent/purpose from the query\n\
             \n\
             Return structured format.",
            name = lead.name,
            company = lead.company,
            designation = lead.designation.as_deref().unwrap_or("Not provided"),
            email = lead.email,
            query = lead.query,
        ),
        expected_output: "Structured JSON with all form data and domain analysis".to_string(),
    };

    let mut stages = vec![extract];
    stages.extend(shared_tail(target));
    stages
}

/// Stages 2–4, shared by both adapters.
fn shared_tail(target: &TargetConfig) -> Vec<StageSpec> {
    let enrich = StageSpec {
        kind: StageKind::Enrich,
        role: "Company Research Specialist".to_string(),
        goal: "Research and gather detailed information about companies including industry, \
               size, and location"
            .to_string(),
        instructions: format!(
            "Based on the extracted lead details and email domain, research and infer:\n\
             1. Company industry (classify into: {taxonomy})\n\
             2. Estimated company size ({sizes})\n\
             3. Geographic location (infer from domain or context)\n\
             \n\
             Use the email domain and any context clues from the submission.\n\
             If the domain is generic (gmail, yahoo, etc.), note it as \
             \"Personal Email - No Company Data\".\n\
             \n\
             Return structured company information.",
            taxonomy = INDUSTRY_TAXONOMY,
            sizes = SIZE_BANDS,
        ),
        expected_output: "JSON with industry, company_size, location, and domain_type".to_string(),
    };

    let score = StageSpec {
        kind: StageKind::Score,
        role: "Lead Qualification Specialist".to_string(),
        goal: "Score leads based on email quality, company fit, role seniority, and message \
               intent"
            .to_string(),
        instructions: scoring::rubric_text(target),
        expected_output: "JSON with total_score, score_breakdown, and qualification_status"
            .to_string(),
    };

    let recommend = StageSpec {
        kind: StageKind::Recommend,
        role: "Sales Strategy Advisor".to_string(),
        goal: "Provide actionable recommendations for engaging with leads based on their \
               qualification score"
            .to_string(),
        instructions: "Based on the lead score and analysis, provide:\n\
                       1. Clear recommendation on next steps (Forward to Sales, Manual Review, \
                       or Disqualify)\n\
                       2. Specific reasons for the recommendation\n\
                       3. Suggested talking points or concerns to address\n\
                       4. Priority level (High, Medium, Low)\n\
                       \n\
                       Be specific and actionable."
            .to_string(),
        expected_output: "Detailed recommendations with next steps and priority".to_string(),
    };

    vec![enrich, score, recommend]
}
