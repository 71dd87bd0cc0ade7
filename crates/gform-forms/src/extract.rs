//! Field-model extraction from a published form page.

use gform_select::{query_selector, query_selector_all, DomElement};
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::field::{Field, FieldKind};

/// The submission form.
pub const FORM_SELECTOR: &str = "form";
/// One question block.
pub const QUESTION_SELECTOR: &str = ".ss-form-question";
/// The question title inside a block.
pub const NAME_SELECTOR: &str = "label.ss-q-item-label";
/// The help text inside a block.
pub const LABEL_SELECTOR: &str = ".ss-secondary-text";
/// Input-like controls inside a block.
pub const INPUT_SELECTOR: &str = "input, textarea, select";
/// Present in a page that re-serves the form, i.e. a rejected submission.
pub const MARKER_SELECTOR: &str = "#ss-form";

/// Extracts the submission URL and the ordered field collection.
///
/// Fails with [`FormError::MissingForm`] when the document has no `form`.
/// A later block reusing an id replaces the earlier field at its position.
pub fn extract(document: &Html) -> Result<(String, Vec<Field>)> {
    let root = [document.root_element()];

    let form = query_selector(FORM_SELECTOR, &root).ok_or(FormError::MissingForm)?;
    let submission_url = form.attribute("action").unwrap_or("").to_string();

    let mut fields: Vec<Field> = Vec::new();
    for block in query_selector_all(QUESTION_SELECTOR, &root) {
        let Some(field) = extract_field(block) else {
            continue;
        };

        debug!(id = %field.id, name = %field.name, kind = field.type_name(), "extracted field");

        if let Some(existing) = fields.iter_mut().find(|f| f.id == field.id) {
            warn!(id = %field.id, "duplicate field id, replacing earlier field");
            *existing = field;
        } else {
            fields.push(field);
        }
    }

    Ok((submission_url, fields))
}

/// Builds a field from one question block.
///
/// Returns `None` when the block has no title label or no input control.
fn extract_field(block: ElementRef<'_>) -> Option<Field> {
    let scope = [block];

    let Some(title) = query_selector(NAME_SELECTOR, &scope) else {
        warn!("question block without a title label, skipping");
        return None;
    };
    let name = first_line(&text_of(title)).trim().to_string();

    let label = query_selector(LABEL_SELECTOR, &scope)
        .map(|help| text_of(help).trim().to_string())
        .unwrap_or_default();

    let inputs = query_selector_all(INPUT_SELECTOR, &scope);
    let Some(primary) = inputs.first().copied() else {
        warn!(name = %name, "question block without an input, skipping");
        return None;
    };

    let id = primary.attribute("name").unwrap_or("").to_string();
    let tag = primary.tag_name();
    let token = if tag == "textarea" || tag == "select" {
        tag
    } else {
        primary.attribute("type").unwrap_or("")
    };

    let values = match token {
        "select" => query_selector_all("option", &[primary])
            .into_iter()
            .filter_map(|option| option.attribute("value"))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect(),
        "radio" | "checkbox" => inputs
            .iter()
            .map(|input| input.attribute("value").unwrap_or("").to_string())
            .collect(),
        _ => Vec::new(),
    };

    let pattern = primary.attribute("pattern").map(str::to_string);
    let kind = FieldKind::from_token(token, values, pattern);

    let mut field = Field::new(id, name, label, kind);
    field.required = primary.attribute("required").is_some();
    Some(field)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}
