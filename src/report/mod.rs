pub mod json;
pub mod md;
pub mod text;

use crate::error::EvalError;
use crate::types::report::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(evaluation: &Evaluation, format: OutputFormat) -> Result<String, EvalError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(evaluation)),
        OutputFormat::Json => json::to_json(evaluation).map_err(EvalError::Json),
        OutputFormat::Md => Ok(md::to_markdown(evaluation)),
    }
}
