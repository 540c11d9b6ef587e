//! Claim commands - submit, list, recent, show, remove

use cosmic_truth::api::{self, SubmitClaimRequest};
use cosmic_truth::output::{ClaimListResult, ClaimResult, OperationResult};

use super::context::{Context, api_failure, caller};
use crate::cli::ClaimAction;

/// Handle claim subcommands
pub fn claim_cmd(action: ClaimAction, ctx: &Context) -> anyhow::Result<()> {
    let state = ctx.config.api_state();

    match action {
        ClaimAction::Submit { text, user } => {
            let req = SubmitClaimRequest {
                text: text.join(" "),
            };
            let caller = caller(user.as_deref());
            let data = api::submit_claim(&state, caller.as_ref(), &req, &mut fastrand::Rng::new())
                .map_err(api_failure)?;
            ClaimResult { claim: data.claim }.render(ctx.mode);
        },
        ClaimAction::List { user } => {
            let caller = caller(user.as_deref());
            let data = api::list_claims(&state, caller.as_ref()).map_err(api_failure)?;
            ClaimListResult {
                claims: data.claims,
            }
            .render(ctx.mode);
        },
        ClaimAction::Recent => {
            let data = api::recent_claims(&state).map_err(api_failure)?;
            ClaimListResult {
                claims: data.claims,
            }
            .render(ctx.mode);
        },
        ClaimAction::Show { id, user } => {
            let caller = caller(user.as_deref());
            let claim = api::get_claim(&state, caller.as_ref(), &id).map_err(api_failure)?;
            ClaimResult { claim }.render(ctx.mode);
        },
        ClaimAction::Remove { id, user } => {
            let caller = caller(user.as_deref());
            let data = api::delete_claim(&state, caller.as_ref(), &id).map_err(api_failure)?;
            OperationResult {
                success: data.deleted,
                message: format!("Removed {}", data.id),
            }
            .render(ctx.mode);
        },
    }

    Ok(())
}
