//! Category filter: a derived view over the project collection.
//!
//! Owns one piece of state, the selected category. Everything else (the
//! option list, the visible projects, the cards) is recomputed from the
//! collection on every render.

use folio_common::Project;
use serde::Serialize;
use std::collections::HashSet;

use crate::messages::ALL_CATEGORIES;

/// Either the "all categories" sentinel or one category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// `?category=` value: absent or empty selects everything.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") => CategorySelection::All,
            Some(name) => CategorySelection::Named(name.to_string()),
        }
    }

    /// Inverse of `from_query`; the sentinel has no query value.
    pub fn query_value(&self) -> &str {
        match self {
            CategorySelection::All => "",
            CategorySelection::Named(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(name) => project.has_category(name),
        }
    }
}

/// Sentinel first, then every category name in first-seen order, once.
/// An empty name would share the sentinel's query value, so it is left out.
pub fn category_options(projects: &[Project]) -> Vec<CategorySelection> {
    let mut seen = HashSet::new();
    let mut options = vec![CategorySelection::All];
    for category in projects.iter().flat_map(|p| &p.categories) {
        if !category.name.is_empty() && seen.insert(category.name.as_str()) {
            options.push(CategorySelection::Named(category.name.clone()));
        }
    }
    options
}

/// Projects matching `selection`, in collection order.
pub fn visible_projects<'a>(projects: &'a [Project], selection: &CategorySelection) -> Vec<&'a Project> {
    projects.iter().filter(|p| selection.matches(p)).collect()
}

pub struct CategoryFilter<'a> {
    projects: &'a [Project],
    selected: CategorySelection,
}

impl<'a> CategoryFilter<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects, selected: CategorySelection::All }
    }

    /// A name no project carries falls back to the sentinel.
    pub fn select(&mut self, selection: CategorySelection) {
        self.selected = match selection {
            CategorySelection::Named(name) if !self.is_observed(&name) => CategorySelection::All,
            other => other,
        };
    }

    fn is_observed(&self, name: &str) -> bool {
        !name.is_empty() && self.projects.iter().any(|p| p.has_category(name))
    }

    pub fn selected(&self) -> &CategorySelection {
        &self.selected
    }

    pub fn options(&self) -> Vec<CategorySelection> {
        category_options(self.projects)
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        visible_projects(self.projects, &self.selected)
    }

    /// Template model. Cover URLs are `asset_base` + the medium format path.
    pub fn view(&self, asset_base: &str) -> FilterView {
        let options = self
            .options()
            .into_iter()
            .map(|option| OptionView {
                value: option.query_value().to_string(),
                label: option.label().to_string(),
                selected: option == self.selected,
            })
            .collect();

        let cards = self
            .visible()
            .into_iter()
            .map(|p| CardView {
                id: p.id,
                title: p.title.clone(),
                description: p.description.clone(),
                image_url: p.cover.resolve(asset_base),
                link: p.link.clone(),
                tags: p.categories.iter().map(|c| c.name.clone()).collect(),
            })
            .collect();

        FilterView { options, cards }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub options: Vec<OptionView>,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
    pub tags: Vec<String>,
}
