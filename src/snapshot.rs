use crate::cli::CommonArgs;
use crate::config::Config;
use crate::util::{load_snapshot, reference_date};
use anyhow::Context;

pub fn exec(common: &CommonArgs) -> anyhow::Result<()> {
    let config = Config::load(common.config.as_deref())?;
    let reference =
        reference_date(common.date.as_deref()).context("Failed to resolve reference date")?;
    let snapshot = load_snapshot(common, &config, reference)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
