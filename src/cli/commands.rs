use std::path::Path;

use chrono::NaiveDate;

use crate::app::{AppContext, DigestError, Result};
use crate::commands::{register_commands, CommandId, CommandList};
use crate::config::{Config, Settings};
use crate::host::{EditorSurface, MarkdownDocument};
use crate::inline::InlineOutcome;

pub async fn generate(ctx: &AppContext, config: &Config, date: NaiveDate) -> Result<()> {
    let mut pipeline = ctx.pipeline();
    let report = pipeline.run(config, date).await?;

    for failure in &report.failures {
        eprintln!("  ! {}: {}", failure.category, failure.error);
    }
    println!(
        "{} categories summarized from {} items, {} failed",
        report.succeeded.len(),
        report.item_count,
        report.failures.len()
    );

    Ok(())
}

pub async fn summarize_url(
    ctx: &AppContext,
    config: &Config,
    file: &Path,
    line: usize,
    selection: Option<String>,
) -> Result<()> {
    let mut doc = MarkdownDocument::load(file)?.with_cursor(line.saturating_sub(1));
    if let Some(selection) = selection {
        doc = doc.with_selection(selection);
    }

    let selection = doc.selection();
    if !CommandId::SummarizeUrlInline.is_available(Some(selection.as_str())) {
        return Err(DigestError::NoUrlInSelection);
    }

    let summarizer = ctx.inline_summarizer(config)?;
    match summarizer.run(&mut doc, config.model).await {
        InlineOutcome::Summarized { url } => {
            doc.save(file)?;
            println!("Inserted summary of {}", url);
        }
        InlineOutcome::Unusable { url } => {
            doc.save(file)?;
            eprintln!("No readable content at {}", url);
        }
        InlineOutcome::Failed => {}
    }

    Ok(())
}

pub fn list_commands(selection: Option<&str>) {
    let mut list = CommandList::default();
    register_commands(&mut list);

    let specs = match selection {
        Some(_) => list.context_menu(selection),
        None => list.specs().iter().collect(),
    };

    for spec in specs {
        println!("{:<24} {}", spec.id.id(), spec.title);
    }
}

pub fn show_settings(config: &Config) -> std::result::Result<(), crate::config::ConfigError> {
    let mut shown = config.clone();
    if !shown.api_key.is_empty() {
        shown.api_key = "********".into();
    }
    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

pub fn set_setting(
    settings: &mut Settings,
    key: &str,
    value: &str,
) -> std::result::Result<(), crate::config::ConfigError> {
    settings.set(key, value)?;
    println!("Saved {}", key);
    Ok(())
}
