//! Top-level ticket analysis: dispatch, reconcile, and absorb failures.

use triage_core::{reconcile, HistoryStore, Outcome, Ticket, TriageResponse, FAILURE_REPLY};
use triage_n8n::N8nClient;

/// Runs one ticket through the full pipeline.
///
/// Never fails: transport errors, undecodable payloads, and history-write
/// failures all collapse into [`Outcome::Failed`] with the fixed failure
/// reply and a freshly reloaded history table, so the caller always gets
/// the same three-part response.
pub async fn analyze_ticket(
    client: &N8nClient,
    store: &dyn HistoryStore,
    ticket: &Ticket,
) -> TriageResponse {
    match run(client, store, ticket).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(%error, source = %ticket.source, "ticket analysis failed");
            TriageResponse {
                outcome: Outcome::Failed {
                    error: error.to_string(),
                },
                reply: FAILURE_REPLY.to_string(),
                history: store.load(),
            }
        }
    }
}

async fn run(
    client: &N8nClient,
    store: &dyn HistoryStore,
    ticket: &Ticket,
) -> anyhow::Result<TriageResponse> {
    let raw = client
        .dispatch(&ticket.source.to_string(), &ticket.message)
        .await?;
    Ok(reconcile(ticket, raw, store)?)
}
