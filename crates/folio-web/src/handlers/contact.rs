//! Contact form submission.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};

use tracing::debug;

use crate::components::{ContactFields, ContactForm};
use crate::error::WebError;
use crate::handlers::portfolio::{render_portfolio, PortfolioQuery};
use crate::state::SharedState;

/// POST /contact: run the submit pipeline and re-render the page with its
/// status. The selected category rides along in the query string.
///
/// While projects are still loading the page cannot show a status, so
/// nothing is stored or sent and the loading page is returned.
pub async fn contact_submit(
    State(state): State<SharedState>,
    Query(query): Query<PortfolioQuery>,
    Form(fields): Form<ContactFields>,
) -> Result<Html<String>, WebError> {
    if state.root.is_loading() {
        debug!("contact submit ignored while projects are loading");
        return Ok(Html(state.renderer.loading_page()?));
    }

    let mut form = ContactForm::with_fields(fields);
    // The outcome is already logged and reflected in the form status.
    let _ = form.submit(state.content.as_ref(), state.mailer.as_ref()).await;

    render_portfolio(&state, &query, &form).map(Html)
}
