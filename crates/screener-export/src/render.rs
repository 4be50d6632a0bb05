use serde::Serialize;
use tera::{Context, Tera};

use screener_core::models::score::ScoreResult;
use screener_instruments::catalog::UiText;

use crate::error::ExportError;
use crate::table::DATE_FORMAT;

const SUMMARY_NAME: &str = "summary.txt";

const SUMMARY_TEMPLATE: &str = "\
{{ title }}

{{ results_heading }}
{{ score_label }}: {{ total }}

{{ interpretation_heading }}
{{ interpretation }}

{{ date }}
";

/// Variables available to a summary template.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext<'a> {
    pub title: &'a str,
    pub results_heading: &'a str,
    pub score_label: &'a str,
    pub interpretation_heading: &'a str,
    pub interpretation: &'a str,
    pub total: u16,
    pub band: &'static str,
    pub date: String,
}

impl<'a> SummaryContext<'a> {
    pub fn new(text: &'a UiText, result: &ScoreResult, date: &jiff::civil::DateTime) -> Self {
        Self {
            title: &text.title,
            results_heading: &text.results_heading,
            score_label: &text.score_label,
            interpretation_heading: &text.interpretation_heading,
            interpretation: text.interpretation(result.band),
            total: result.total,
            band: result.band.key(),
            date: date.strftime(DATE_FORMAT).to_string(),
        }
    }
}

/// Render the localized results block shown after submission.
pub fn render_summary(
    text: &UiText,
    result: &ScoreResult,
    date: &jiff::civil::DateTime,
) -> Result<String, ExportError> {
    render_template(SUMMARY_NAME, SUMMARY_TEMPLATE, &SummaryContext::new(text, result, date))
}

/// Render a caller-supplied Tera template against a summary context.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    summary: &SummaryContext<'_>,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(summary)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}
