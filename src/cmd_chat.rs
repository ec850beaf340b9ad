//! `chat` subcommand: interactive question prompt.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use loanassist_config::Config;
use loanassist_fusion::FuseOutcome;
use loanassist_protocols::{FuseError, KeywordStore, QueryRequest};

use crate::setup;

/// Metadata fields surfaced under each answer, with display labels.
const DETAIL_FIELDS: [(&str, &str); 4] = [
    ("loan_amount", "Loan Amount"),
    ("effective_interest", "Interest Rate"),
    ("emi_amount", "EMI Amount"),
    ("due_date", "Due Date"),
];

pub(crate) async fn run(config: &Config, user: Option<String>) -> Result<()> {
    let collaborators = setup::build(config).await?;
    let known_users = collaborators.store.distinct_users().await.unwrap_or_default();

    println!("Welcome to the Loan Assistant! Type 'exit' to quit.");
    println!("You can ask questions about loans, EMIs, or any loan-related queries.");

    let stdin = io::stdin();
    loop {
        print!("\nYour question: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.eq_ignore_ascii_case("exit") {
            break;
        }
        if question.is_empty() {
            continue;
        }

        let mut request = QueryRequest::new(question);
        let filter = user.clone().or_else(|| detect_user(question, &known_users));
        if let Some(filter) = filter {
            request = request.with_user(filter);
        }

        println!("\nSearching for relevant information...");
        match collaborators.fuser.fuse(&request).await {
            Ok(outcome) if outcome.answers.is_empty() => {
                println!("\nNo relevant information found. Please try rephrasing your question.");
            }
            Ok(outcome) => print_answers(&outcome),
            Err(FuseError::EmptyQuery) => continue,
            Err(e) => eprintln!("Search failed: {}", e),
        }
    }

    Ok(())
}

/// Detect a stored user mentioned in the question.
fn detect_user(question: &str, users: &[String]) -> Option<String> {
    let lowered = question.to_lowercase();
    users
        .iter()
        .find(|user| lowered.contains(&user.to_lowercase()))
        .cloned()
}

fn print_answers(outcome: &FuseOutcome) {
    for failure in &outcome.degraded {
        println!("(the {} arm was unavailable: {})", failure.arm, failure.message);
    }

    println!("\nRelevant information found:");
    for (i, answer) in outcome.answers.iter().enumerate() {
        println!(
            "\n{}. Match Score: {:.2} (via {})",
            i + 1,
            answer.score,
            answer.source
        );
        println!("   Question: {}", answer.question);
        println!("   Answer: {}", answer.answer);
        println!("   User: {}", answer.user);

        for (key, label) in DETAIL_FIELDS {
            if let Some(value) = answer.metadata.get(key) {
                let display = value
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                println!("   {}: {}", label, display);
            }
        }
    }
}
