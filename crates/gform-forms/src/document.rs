//! A loaded form document.

use gform_select::query_selector;
use scraper::Html;
use tracing::info;

use crate::error::{Result, ValidationErrors};
use crate::extract::{extract, MARKER_SELECTOR};
use crate::field::Field;
use crate::params::{to_id_keyed, FieldMap, Params, Values};
use crate::validation::validate;

/// The field model of one form page.
///
/// Built once from HTML and never mutated; loading another page builds a new
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    submission_url: String,
    fields: Vec<Field>,
    map: FieldMap,
}

impl FormDocument {
    /// Parses HTML and extracts the field model.
    ///
    /// # Example
    ///
    /// ```
    /// use gform_forms::FormDocument;
    ///
    /// let doc = FormDocument::parse(
    ///     r#"<form action="https://example.com/r">
    ///          <div class="ss-form-question">
    ///            <label class="ss-q-item-label">Email</label>
    ///            <input type="email" name="entry.1" required>
    ///          </div>
    ///        </form>"#,
    /// )
    /// .unwrap();
    /// assert_eq!(doc.submission_url(), "https://example.com/r");
    /// assert_eq!(doc.map().get("Email"), Some("entry.1"));
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let (submission_url, fields) = extract(&document)?;
        let map = FieldMap::from_fields(&fields);

        info!(url = %submission_url, fields = fields.len(), "loaded form document");

        Ok(Self {
            submission_url,
            fields,
            map,
        })
    }

    /// Returns the form's submission URL.
    pub fn submission_url(&self) -> &str {
        &self.submission_url
    }

    /// Returns the fields in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field with the given id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Returns the name → id map.
    pub fn map(&self) -> &FieldMap {
        &self.map
    }

    /// Translates name-keyed values into id-keyed parameters.
    pub fn to_id_keyed(&self, submitted: &Values) -> Params {
        to_id_keyed(submitted, &self.map)
    }

    /// Validates name-keyed values against the fields.
    pub fn validate(&self, submitted: &Values) -> std::result::Result<(), ValidationErrors> {
        validate(submitted, &self.fields, &self.map)
    }
}

/// Returns true if a submission response is an acceptance page, i.e. it does
/// not re-serve the form.
pub fn is_accepted_response(html: &str) -> bool {
    let document = Html::parse_document(html);
    query_selector(MARKER_SELECTOR, &[document.root_element()]).is_none()
}
