//! Active criteria command

use anyhow::Result;
use friend_circle::CriteriaSource;

use super::helpers::GlobalOptions;

/// Handle criteria listing command
pub fn handle(globals: &GlobalOptions) -> Result<()> {
    let config = globals.load_config()?;
    let loaded = globals.load_criteria(&config);

    match &loaded.source {
        CriteriaSource::File(path) => println!("Criteria from {}:", path.display()),
        CriteriaSource::Default { reason } => println!("Built-in criteria ({}):", reason),
    }
    for (i, name) in loaded.criteria.iter().enumerate() {
        let label = loaded.criteria.label(i).unwrap_or_default();
        println!("  {:>2}. {} ({})", i + 1, label, name);
    }
    Ok(())
}
