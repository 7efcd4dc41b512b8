//! Page templates, embedded in the binary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use minijinja::{context, Environment};
use std::collections::BTreeMap;

use crate::models::SearchForm;
use crate::query::{SearchDisplay, ValidationErrors};

const FORM_TEMPLATE: &str = include_str!("../../templates/form.html");
const RESULTS_TEMPLATE: &str = include_str!("../../templates/results.html");

/// Stylesheet shared by both pages.
pub const CSS: &str = include_str!("../../templates/style.css");

/// Renders the search form and the results page.
///
/// Template names end in `.html`, so values are HTML-escaped.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("form.html", FORM_TEMPLATE)
            .context("Failed to add form template")?;
        env.add_template("results.html", RESULTS_TEMPLATE)
            .context("Failed to add results template")?;
        Ok(Self { env })
    }

    /// The search form, with inline messages for any rejected fields.
    ///
    /// Date pickers start at `today`; earlier days cannot be selected.
    pub fn form(
        &self,
        form: &SearchForm,
        errors: Option<&ValidationErrors>,
        today: NaiveDate,
    ) -> Result<String> {
        let errors: BTreeMap<&str, &str> = errors
            .into_iter()
            .flat_map(|errors| errors.iter())
            .map(|error| (error.field.key(), error.message.as_str()))
            .rev()
            .collect();

        let template = self.env.get_template("form.html")?;
        template
            .render(context! {
                form => form,
                errors => errors,
                today => today.format("%Y-%m-%d").to_string(),
            })
            .context("Failed to render search form")
    }

    pub fn results(&self, display: &SearchDisplay) -> Result<String> {
        let template = self.env.get_template("results.html")?;
        template
            .render(context! { display => display })
            .context("Failed to render results page")
    }
}
