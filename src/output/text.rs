use crate::errors::Result;
use crate::output::PullPlan;
use std::io::Write;

/// Write a resolved pull plan as human-readable text.
pub fn write_pull_text<W: Write>(writer: &mut W, plan: &PullPlan) -> Result<()> {
    let inputs = &plan.inputs;

    writeln!(writer, "Pull Plan")?;
    writeln!(writer, "=========")?;
    writeln!(writer)?;
    writeln!(writer, "Target:         {}", inputs.target.display())?;
    writeln!(
        writer,
        "Config version: {}",
        inputs
            .app_version
            .map_or("(unset)".to_string(), |v| v.to_string())
    )?;
    writeln!(
        writer,
        "From:           {}",
        inputs.from.as_deref().unwrap_or("(bound app)")
    )?;
    writeln!(
        writer,
        "Project:        {}",
        inputs.project.as_deref().unwrap_or("(any)")
    )?;
    writeln!(writer)?;

    match &plan.source {
        Some(source) => {
            writeln!(writer, "Source app")?;
            writeln!(writer, "----------")?;
            writeln!(writer, "Group ID: {}", source.group_id)?;
            writeln!(writer, "App ID:   {}", source.app_id)?;
        }
        None => writeln!(writer, "No source app selected; nothing will be downloaded.")?,
    }

    Ok(())
}
