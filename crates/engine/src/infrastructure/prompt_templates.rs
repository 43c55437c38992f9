//! Prompt template resolution.

use std::path::{Path, PathBuf};

use crate::prompt_templates::{PromptTemplate, PromptTemplateError};

/// Where the active template came from, for startup logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Inline,
    File(PathBuf),
    Default,
}

/// Resolve the tutor template.
///
/// Resolution priority:
/// 1. Inline override (if non-blank)
/// 2. Template file
/// 3. Default value
pub fn resolve_template(
    inline: Option<&str>,
    path: Option<&Path>,
) -> Result<(PromptTemplate, TemplateSource), PromptTemplateError> {
    if let Some(text) = inline.filter(|t| !t.trim().is_empty()) {
        return Ok((PromptTemplate::new(text)?, TemplateSource::Inline));
    }

    if let Some(path) = path {
        let text = std::fs::read_to_string(path).map_err(|e| PromptTemplateError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        return Ok((
            PromptTemplate::new(text)?,
            TemplateSource::File(path.to_path_buf()),
        ));
    }

    Ok((PromptTemplate::default(), TemplateSource::Default))
}
