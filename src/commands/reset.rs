//! `workspace-subset reset` - Plan the return to the default state
//!
//! Emits the plan that unloads nothing and ignores nothing, so the host
//! can restore the full workspace. In ignore-files mode, modules whose
//! build files were on the snapshot's ignore list are listed for
//! re-sync, since clearing the ignore list brings them back.

use crate::commands::resolve::{OutputFormat, display_plan, effective_strategy};
use crate::core::context::WorkspaceContext;
use crate::core::error::SubsetResult;
use crate::core::plan;

/// Run the reset command
pub fn run_reset(ctx: &WorkspaceContext, strategy: Option<String>, format: String) -> SubsetResult<()> {
  let output_format = OutputFormat::from_str(&format)?;
  let strategy = effective_strategy(ctx, strategy.as_deref())?;

  let plan = plan::plan_reset(&ctx.inventory, strategy);

  display_plan(&plan, None, output_format)
}
