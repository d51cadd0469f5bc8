//! Portfolio page: root view composing the category filter and the contact form.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::components::{CategoryFilter, CategorySelection, ContactForm, LoadPhase};
use crate::error::WebError;
use crate::render::PortfolioPage;
use crate::state::{AppState, SharedState};

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
}

/// GET /: loading indicator until projects arrive, then the full page.
pub async fn portfolio_page(
    State(state): State<SharedState>,
    Query(query): Query<PortfolioQuery>,
) -> Result<Html<String>, WebError> {
    render_portfolio(&state, &query, &ContactForm::new()).map(Html)
}

pub(crate) fn render_portfolio(
    state: &AppState,
    query: &PortfolioQuery,
    form: &ContactForm,
) -> Result<String, WebError> {
    let projects = match state.root.phase() {
        LoadPhase::Loading => return Ok(state.renderer.loading_page()?),
        LoadPhase::Ready(projects) => projects,
    };

    let mut filter = CategoryFilter::new(&projects);
    filter.select(CategorySelection::from_query(query.category.as_deref()));

    let page = PortfolioPage::new(&filter, &state.config.cms.base_url, form);
    Ok(state.renderer.portfolio_page(&page)?)
}
