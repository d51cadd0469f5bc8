//! HTML rendering with minijinja.
//!
//! Templates are compiled into the binary. `.html` templates auto-escape, so
//! CMS text and visitor input can go straight into the context.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::components::{CategoryFilter, ContactFields, ContactForm, FilterView, SubmissionStatus};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("loading.html", include_str!("../templates/loading.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("projects.html", include_str!("../templates/projects.html")),
    ("contact.html", include_str!("../templates/contact.html")),
];

/// Everything the portfolio page shows once projects are loaded.
#[derive(Debug, Serialize)]
pub struct PortfolioPage<'a> {
    pub filter: FilterView,
    pub contact: ContactView<'a>,
    /// Form target; carries the current selection so it survives a submit.
    pub contact_action: String,
}

#[derive(Debug, Serialize)]
pub struct ContactView<'a> {
    pub fields: &'a ContactFields,
    pub status: &'a SubmissionStatus,
}

impl<'a> PortfolioPage<'a> {
    pub fn new(filter: &CategoryFilter<'_>, asset_base: &str, form: &'a ContactForm) -> Self {
        let selected = filter.selected().query_value();
        let contact_action = if selected.is_empty() {
            "/contact".to_string()
        } else {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("category", selected)
                .finish();
            format!("/contact?{query}")
        };

        Self {
            filter: filter.view(asset_base),
            contact: ContactView { fields: form.fields(), status: form.status() },
            contact_action,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn loading_page(&self) -> Result<String, minijinja::Error> {
        self.env.get_template("loading.html")?.render(context! {})
    }

    pub fn portfolio_page(&self, page: &PortfolioPage<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(page)
    }
}
