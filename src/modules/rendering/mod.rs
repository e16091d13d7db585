//! HTML rendering: four independent leaf fragments plus a base layout.
//!
//! Two distinct rendering contracts: leaf fragments render user data
//! with default HTML escaping, while the base layout embeds the
//! already-rendered body unescaped (`|safe`). The body must never be
//! escaped a second time and the leaves must never skip escaping.

pub mod composer;
pub mod views;

use minijinja::{path_loader, Environment};
use serde::Serialize;
use std::path::Path;

use crate::core::Result;
use views::{BaseView, ConceptsView, DateView, LandlordView, TenantView};

const BASE_TEMPLATE: &str = "base.html";
const LANDLORD_TEMPLATE: &str = "landlord.html";
const DATE_TEMPLATE: &str = "invoice-date.html";
const TENANT_TEMPLATE: &str = "tenant.html";
const CONCEPTS_TEMPLATE: &str = "concepts.html";

const ALL_TEMPLATES: [&str; 5] = [
    BASE_TEMPLATE,
    LANDLORD_TEMPLATE,
    DATE_TEMPLATE,
    TENANT_TEMPLATE,
    CONCEPTS_TEMPLATE,
];

/// Renders the leaf views into HTML fragments
pub struct FragmentRenderer {
    env: Environment<'static>,
}

impl FragmentRenderer {
    /// Build a renderer over a directory of templates
    pub fn from_dir(templates_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir));
        Self { env }
    }

    /// Check that all five templates load, so a missing or broken
    /// template file aborts the run at startup instead of failing every
    /// single invoice later
    pub fn verify(&self) -> Result<()> {
        for name in ALL_TEMPLATES {
            self.env.get_template(name)?;
        }
        Ok(())
    }

    pub fn render_landlord(&self, view: &LandlordView<'_>) -> Result<String> {
        self.render(LANDLORD_TEMPLATE, view)
    }

    pub fn render_dates(&self, view: &DateView) -> Result<String> {
        self.render(DATE_TEMPLATE, view)
    }

    pub fn render_tenant(&self, view: &TenantView<'_>) -> Result<String> {
        self.render(TENANT_TEMPLATE, view)
    }

    pub fn render_concepts(&self, view: &ConceptsView<'_>) -> Result<String> {
        self.render(CONCEPTS_TEMPLATE, view)
    }

    /// Render the base layout around an already-composed body
    pub(crate) fn render_base(&self, view: &BaseView) -> Result<String> {
        self.render(BASE_TEMPLATE, view)
    }

    fn render<S: Serialize>(&self, name: &str, view: S) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(view)?)
    }
}
