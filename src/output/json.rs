use crate::errors::Result;
use crate::output::PullPlan;
use std::io::Write;

/// Write a resolved pull plan as JSON.
pub fn write_pull_json<W: Write>(writer: &mut W, plan: &PullPlan) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, plan)?;
    writeln!(writer)?;
    Ok(())
}
