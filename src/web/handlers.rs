// ============================================================
// Layer 1 — HTTP Handlers
// ============================================================
// Two routes on one path: GET renders the empty form, POST runs
// one prediction and re-renders the page with the outcome.
//
// The POST handler is the system's single error boundary: any
// validation, encoding, or prediction failure is rendered into
// the page as an error banner with the error's text and a
// check-your-inputs hint. No retries, no partial results.

use axum::extract::{Form, State};
use axum::response::Html;

use crate::domain::record::StudentRecord;
use crate::web::{page, AppState};

/// GET / — the form with its widget defaults, no result section.
pub async fn index() -> Html<String> {
    Html(page::render(&StudentRecord::default(), &page::Outcome::Fresh))
}

/// POST / — validate, predict, classify, re-render.
pub async fn predict(
    State(state): State<AppState>,
    Form(record): Form<StudentRecord>,
) -> Html<String> {
    let outcome = match state.use_case.execute(&record) {
        Ok(prediction) => page::Outcome::Predicted(prediction),
        Err(error) => {
            tracing::error!("Prediction failed: {error:#}");
            page::Outcome::Failed(format!("{error:#}"))
        }
    };
    // The submitted values ride back into the form either way
    Html(page::render(&record, &outcome))
}
