use crate::cli::CommonArgs;
use crate::config::Config;
use crate::coordinator::PublishCoordinator;
use crate::locale::{Language, LanguageRegistry};
use crate::sink::{DirectorySink, PublishSink, StdoutSink};
use crate::util::{load_snapshot, reference_date};
use anyhow::Context;
use console::style;
use std::path::PathBuf;
use tracing::info;

pub fn exec(
    common: &CommonArgs,
    debug: bool,
    output: Option<PathBuf>,
    languages: Vec<String>,
) -> anyhow::Result<()> {
    let config = Config::load(common.config.as_deref())?.with_overrides(output, &languages);
    // Formatters are validated before anything is read or rendered.
    let registry = LanguageRegistry::from_codes(&config.languages)
        .context("Failed to register language formatters")?;
    let reference =
        reference_date(common.date.as_deref()).context("Failed to resolve reference date")?;
    info!(%reference, languages = registry.len(), "starting report run");

    let snapshot = load_snapshot(common, &config, reference)?;

    let mut sink: Box<dyn PublishSink> = if debug {
        Box::new(StdoutSink::stdout())
    } else {
        Box::new(DirectorySink::new(&config.output_dir))
    };
    let outcome = PublishCoordinator::new(&registry)
        .with_image(config.image.clone())
        .run(&snapshot, reference, sink.as_mut())
        .context("Failed to publish reports")?;

    for doc in &outcome.documents {
        eprintln!(
            "{:<4} {:>4} commits  {}",
            style(doc.language.code()).bold(),
            doc.commit_count,
            style(doc.path()).dim()
        );
    }
    if outcome.published {
        let summary = format!("Published {} reports", outcome.documents.len());
        eprintln!("{}", style(summary).green());
    } else {
        eprintln!(
            "{}",
            style("No qualifying commits in the last 30 days; nothing published").yellow()
        );
    }
    Ok(())
}

pub fn preview(common: &CommonArgs, lang: &str) -> anyhow::Result<()> {
    let config = Config::load(common.config.as_deref())?;
    let language: Language = lang.parse()?;
    let registry = LanguageRegistry::for_languages(&[language])?;
    let reference =
        reference_date(common.date.as_deref()).context("Failed to resolve reference date")?;

    let snapshot = load_snapshot(common, &config, reference)?;
    let documents = PublishCoordinator::new(&registry)
        .with_image(config.image)
        .render(&snapshot, reference)?;

    for doc in documents {
        print!("{}", doc.to_markdown());
    }
    Ok(())
}

pub fn list_languages() -> anyhow::Result<()> {
    let registry = LanguageRegistry::builtin()?;
    for formatter in registry.iter() {
        let language = formatter.language();
        println!(
            "{:<4} {:<10} {}",
            style(language.code()).bold(),
            language.display_name(),
            formatter.file_name()
        );
    }
    Ok(())
}
