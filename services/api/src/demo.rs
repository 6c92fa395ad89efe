use clap::Args;
use std::sync::Arc;

use crate::infra::{InMemoryResponseRepository, InMemorySessionStore};
use pss_survey::error::AppError;
use pss_survey::survey::{
    calculate_score, questions, scale_labels, AdminAccess, AdminSessionService, AnswerSheet,
    ResponseRecord, StressCategory, SurveyService, SurveySubmission, MAX_ANSWER, MAX_SCORE,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Comma-separated answers for all ten questions, each 0..=4
    /// (e.g. "2,1,0,3,4,2,1,0,2,3")
    #[arg(long, value_parser = crate::infra::parse_answers)]
    pub(crate) answers: AnswerSheet,
    /// Include the per-item contribution breakdown in the output
    #[arg(long)]
    pub(crate) list_items: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Access code wired into the demo admin session
    #[arg(long, default_value = "demo-access")]
    pub(crate) access_code: String,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let score = calculate_score(&args.answers)?;
    let category = StressCategory::from_score(score);

    println!("PSS-10 answer sheet");

    if args.list_items {
        println!("\nPer-item contributions");
        for (question, slot) in questions().iter().zip(args.answers.slots()) {
            let Some(answer) = slot else {
                continue;
            };
            let value = answer.raw();
            let contribution = if question.is_reverse {
                MAX_ANSWER - value
            } else {
                value
            };
            let marker = if question.is_reverse {
                " (reverse-scored)"
            } else {
                ""
            };
            println!(
                "- Q{:02}: answered {} ({}), contributes {}{}",
                question.id, value, scale_labels()[value as usize], contribution, marker
            );
        }
    }

    println!("\nTotal score: {score} / {MAX_SCORE}");
    println!("Stress category: {category} [{}]", category.color());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryResponseRepository::default());
    let service = SurveyService::new(repository);

    let session_store = Arc::new(InMemorySessionStore::default());
    let sessions = AdminSessionService::new(
        AdminAccess::new(Some(args.access_code.clone())),
        session_store,
    );

    println!("Survey intake");
    let calm = service.submit(submission("Ardi Wijaya", [0, 0, 0, 4, 4, 0, 4, 4, 0, 0]))?;
    let moderate = service.submit(submission("Sari Putri", [2, 2, 2, 2, 2, 2, 2, 2, 2, 2]))?;
    let strained = service.submit(submission("Budi Santoso", [4, 4, 4, 0, 0, 4, 0, 0, 4, 4]))?;
    for record in [&calm, &moderate, &strained] {
        println!(
            "- stored {} for {} (score {}, category {})",
            record.id, record.name, record.total_score, record.category
        );
    }

    println!("\nAdmin login");
    sessions.login(&args.access_code)?;
    println!("- access code accepted, session flag set");

    println!("\nDashboard listing (newest first)");
    render_listing(&service.list()?);

    println!("\nEdit: correct a respondent name, answers unchanged");
    let renamed = service.edit(
        &moderate.id,
        submission("Sari Putri Dewi", [2, 2, 2, 2, 2, 2, 2, 2, 2, 2]),
    )?;
    println!(
        "- {} now reads {}, score stayed {} ({})",
        renamed.id, renamed.name, renamed.total_score, renamed.category
    );

    println!("\nEdit: replace an answer sheet, derived fields recomputed");
    let recovered = service.edit(
        &strained.id,
        submission("Budi Santoso", [1, 0, 1, 3, 4, 1, 3, 3, 0, 1]),
    )?;
    println!(
        "- {} rescored to {} ({})",
        recovered.id, recovered.total_score, recovered.category
    );

    println!("\nDelete a submission");
    service.delete(&calm.id)?;
    println!("- removed {}", calm.id);

    println!("\nFinal dashboard listing");
    render_listing(&service.list()?);

    sessions.logout()?;
    println!("\nAdmin logged out, session flag cleared");

    Ok(())
}

fn submission(name: &str, values: [u8; 10]) -> SurveySubmission {
    SurveySubmission {
        name: name.to_string(),
        answers: AnswerSheet::from_values(values).expect("demo values are within scale"),
    }
}

fn render_listing(records: &[ResponseRecord]) {
    if records.is_empty() {
        println!("- no responses recorded");
        return;
    }

    for record in records {
        println!(
            "- {} | {} | score {} | {} [{}] | submitted {}",
            record.id,
            record.name,
            record.total_score,
            record.category,
            record.category.color(),
            record.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}
