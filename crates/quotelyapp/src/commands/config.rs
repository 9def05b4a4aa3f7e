use crate::commands::{CmdMessage, CmdResult, QuotelyPaths};
use crate::config::{QuotelyConfig, CONFIG_FILENAME};
use crate::error::Result;

/// Shows the effective configuration and where it can be overridden.
pub fn run(paths: &QuotelyPaths, config: &QuotelyConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_config(config.clone());
    result.add_message(CmdMessage::info(format!(
        "Config file: {}",
        paths.data_dir.join(CONFIG_FILENAME).display()
    )));
    Ok(result)
}
