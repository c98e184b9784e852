//! Run command - interactive assessment in the terminal
//!
//! Walks the catalog in presentation order, one prompt per question, with
//! a progress bar across the fifteen items. Answers are timestamped as
//! they are given; the finished result is persisted and rendered.

use crate::catalog::{global_catalog, Catalog};
use crate::config::load_scoring_config;
use crate::models::{Answer, AnswerValue, Category, Question};
use crate::reporters::{self, OutputFormat};
use crate::scoring::ScoringEngine;
use crate::store::ResultStore;
use anyhow::{bail, Context, Result};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Run the interactive assessment
pub fn run() -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!(
            "The interactive assessment needs a terminal. \
             Use `readyscope score <answers.json>` for non-interactive scoring."
        );
    }

    let catalog = global_catalog();
    print_intro(&term, catalog)?;

    let bar = ProgressBar::new(catalog.len() as u64).with_style(
        ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len}")
            .context("invalid progress template")?,
    );

    let mut answers: Vec<Answer> = Vec::with_capacity(catalog.len());
    let mut current_section: Option<Category> = None;

    for (index, question) in catalog.questions().iter().enumerate() {
        let answer = bar.suspend(|| -> Result<Answer> {
            if current_section != Some(question.category) {
                current_section = Some(question.category);
                print_section_header(&term, question.category)?;
            }
            ask(&term, question, index + 1, catalog.len())
        })?;
        answers.push(answer);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let config = load_scoring_config(Path::new("."));
    let engine = ScoringEngine::new(catalog, &config);
    let result = engine.calculate(&answers);

    let store = ResultStore::open_default();
    store
        .save(&result)
        .context("failed to save the assessment result")?;

    term.write_line(&reporters::report_with_format(&result, OutputFormat::Text)?)?;
    term.write_line(&format!(
        "{} Saved to {}. Re-render with {} or download with {}.",
        style("✓").green(),
        style(store.result_path().display()).dim(),
        style("readyscope results").cyan(),
        style("readyscope export").cyan()
    ))?;

    Ok(())
}

fn print_intro(term: &Term, catalog: &Catalog) -> Result<()> {
    term.write_line(&format!(
        "\n{}",
        style("AR/VR Developer Readiness Assessment").bold()
    ))?;
    term.write_line(&format!(
        "{}",
        style(format!(
            "{} questions across three sections. Answer with the number of your choice.",
            catalog.len()
        ))
        .dim()
    ))?;
    Ok(())
}

fn print_section_header(term: &Term, category: Category) -> Result<()> {
    let title = match category {
        Category::Psychometric => "Psychological Assessment",
        Category::Technical => "Technical Evaluation",
        Category::Wiscar => "WISCAR Analysis",
    };
    term.write_line(&format!("\n{}", style(title).bold().cyan()))?;
    Ok(())
}

/// Prompt for one question until a valid choice is entered
fn ask(term: &Term, question: &Question, number: usize, total: usize) -> Result<Answer> {
    term.write_line(&format!(
        "\n{} {}",
        style(format!("[{}/{}]", number, total)).dim(),
        style(&question.prompt).bold()
    ))?;

    // Likert items answer with the ordinal itself; choice items answer
    // with the literal option text
    if let Some(scale) = &question.scale {
        for (i, label) in scale.labels.iter().enumerate() {
            term.write_line(&format!("  {}. {}", i + 1, label))?;
        }
        let choice = read_choice(term, scale.labels.len())?;
        Ok(Answer::new(&question.id, AnswerValue::Number(choice as f64)))
    } else if let Some(options) = &question.options {
        for (i, option) in options.iter().enumerate() {
            term.write_line(&format!("  {}. {}", i + 1, option))?;
        }
        let choice = read_choice(term, options.len())?;
        Ok(Answer::new(
            &question.id,
            AnswerValue::Text(options[choice - 1].clone()),
        ))
    } else {
        bail!("Question '{}' has neither a scale nor options", question.id);
    }
}

/// Read a 1-based choice, re-prompting on invalid input
fn read_choice(term: &Term, max: usize) -> Result<usize> {
    loop {
        term.write_str(&format!("{} ", style(">").cyan()))?;
        let line = term
            .read_line()
            .context("failed to read from the terminal")?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => {
                term.write_line(&format!(
                    "{}",
                    style(format!("Enter a number between 1 and {}", max)).yellow()
                ))?;
            }
        }
    }
}
