//! Drives a submission: advance the wizard under the session lock, run the
//! recommendation request in a detached task, then apply the outcome.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::recommendation::{Recommender, RequestError};
use crate::session::machine::{Advance, PendingRequest, Session, TransitionError};
use crate::session::view::SessionView;

/// Advances the assessment. On the final step this waits for the single
/// recommendation request and returns the settled view (results or error).
///
/// The request and the resolution run in a spawned task, so the session
/// still settles when the caller is dropped or the recommender panics.
/// While the request is in flight the session sits in `Analyzing`, so a
/// second submission is rejected rather than issuing another request.
pub async fn advance_assessment(
    session: Arc<Mutex<Session>>,
    recommender: Arc<dyn Recommender>,
) -> Result<SessionView, TransitionError> {
    let pending = {
        let mut guard = session.lock().await;
        match guard.advance()? {
            Advance::Step(_) => return Ok(guard.view()),
            Advance::Submitted(pending) => pending,
        }
    };

    let settle = tokio::spawn(settle_request(session.clone(), recommender, pending));

    match settle.await {
        Ok(view) => Ok(view),
        Err(e) => {
            error!("Settling task failed: {e}");
            Ok(session.lock().await.view())
        }
    }
}

/// Runs the request and always applies an outcome for `pending.id`.
async fn settle_request(
    session: Arc<Mutex<Session>>,
    recommender: Arc<dyn Recommender>,
    pending: PendingRequest,
) -> SessionView {
    let profile = pending.profile.clone();
    let request = tokio::spawn(async move { recommender.recommend(&profile).await });
    let outcome = request
        .await
        .unwrap_or_else(|e| Err(RequestError::Interrupted(e.to_string())));

    let mut session = session.lock().await;
    let resolution = session.resolve(pending.id, outcome);
    debug!("Request {} resolved: {:?}", pending.id, resolution);
    session.view()
}
