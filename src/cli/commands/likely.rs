use crate::cli::util::{CommandContext, GlobalOptions};
use crate::discovery::likely_file_names;
use crate::types::Result;

/// Print the filenames a project probably has, one per line
pub fn run(global: &GlobalOptions, project_path: &str) -> Result<()> {
    let ctx = CommandContext::load(global)?;
    for name in likely_file_names(project_path, ctx.locale()) {
        println!("{}", name);
    }
    Ok(())
}
