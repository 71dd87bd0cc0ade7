//! Stateful form client: options, the loaded document and the error log.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::document::{is_accepted_response, FormDocument};
use crate::error::{FormError, Result, TransportError};
use crate::field::Field;
use crate::options::ClientOptions;
use crate::params::{encode_params, FieldMap, Params, Values};
use crate::render::render_input;

/// Fetches and submits raw form pages.
pub trait Transport {
    /// Fetches the page at `url` and returns its HTML.
    fn fetch(&self, url: &str, options: &ClientOptions) -> std::result::Result<String, TransportError>;

    /// Posts a form-encoded `body` to `url` and returns the response HTML.
    fn submit(
        &self,
        url: &str,
        body: &str,
        options: &ClientOptions,
    ) -> std::result::Result<String, TransportError>;
}

/// A client for one published form.
///
/// The error log collects the messages of every failed [`validate`] call and
/// survives reloads.
///
/// [`validate`]: FormClient::validate
#[derive(Debug)]
pub struct FormClient<T> {
    transport: T,
    options: ClientOptions,
    document: Option<FormDocument>,
    errors: Vec<String>,
}

impl<T: Transport> FormClient<T> {
    /// Creates a client with default options and no document.
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, ClientOptions::default())
    }

    /// Creates a client with the given options.
    pub fn with_options(transport: T, options: ClientOptions) -> Self {
        Self {
            transport,
            options,
            document: None,
            errors: Vec::new(),
        }
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns all options.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Returns one option value.
    pub fn get_option(&self, key: &str) -> Option<Value> {
        self.options.get(key)
    }

    /// Sets one option.
    pub fn set_option(&mut self, key: &str, value: Value) -> Result<()> {
        self.options.set(key, value)
    }

    /// Sets several options.
    pub fn merge_options(&mut self, partial: Map<String, Value>) -> Result<()> {
        self.options.merge(partial)
    }

    /// Fetches and loads the form at `url`.
    pub fn load(&mut self, url: &str) -> Result<&FormDocument> {
        info!(url, "fetching form");
        let html = self.transport.fetch(url, &self.options)?;
        self.load_html(&html)
    }

    /// Loads a form from HTML, replacing the current document.
    ///
    /// On error the current document is kept.
    pub fn load_html(&mut self, html: &str) -> Result<&FormDocument> {
        let document = FormDocument::parse(html)?;
        Ok(&*self.document.insert(document))
    }

    /// Returns the loaded document.
    pub fn document(&self) -> Option<&FormDocument> {
        self.document.as_ref()
    }

    /// Returns the loaded fields, or an empty slice.
    pub fn fields(&self) -> &[Field] {
        self.document
            .as_ref()
            .map(FormDocument::fields)
            .unwrap_or_default()
    }

    /// Returns the loaded name → id map.
    pub fn map(&self) -> Option<&FieldMap> {
        self.document.as_ref().map(FormDocument::map)
    }

    /// Returns the loaded submission URL.
    pub fn submission_url(&self) -> Option<&str> {
        self.document.as_ref().map(FormDocument::submission_url)
    }

    /// Translates name-keyed values into id-keyed parameters.
    ///
    /// Without a document every value is dropped.
    pub fn to_id_keyed(&self, submitted: &Values) -> Params {
        self.document
            .as_ref()
            .map(|doc| doc.to_id_keyed(submitted))
            .unwrap_or_default()
    }

    /// Validates values, appending any failures to the error log.
    ///
    /// Returns whether this call produced no errors.
    pub fn validate(&mut self, submitted: &Values) -> Result<bool> {
        let document = self.document.as_ref().ok_or(FormError::NotLoaded)?;
        match document.validate(submitted) {
            Ok(()) => Ok(true),
            Err(errors) => {
                self.errors.extend(errors.messages());
                Ok(false)
            }
        }
    }

    /// Returns every validation message logged so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Validates and submits values.
    ///
    /// Returns true only if validation passed, the transport accepted the
    /// request and the response does not re-serve the form.
    pub fn post(&mut self, submitted: &Values) -> bool {
        match self.validate(submitted) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(err) => {
                warn!(error = %err, "cannot post");
                return false;
            }
        }

        let Some(document) = self.document.as_ref() else {
            return false;
        };
        let body = encode_params(&document.to_id_keyed(submitted));

        match self
            .transport
            .submit(document.submission_url(), &body, &self.options)
        {
            Ok(response) => {
                let accepted = is_accepted_response(&response);
                info!(url = document.submission_url(), accepted, "form submitted");
                accepted
            }
            Err(err) => {
                warn!(url = document.submission_url(), error = %err, "form submission failed");
                false
            }
        }
    }

    /// Renders the input markup of every loaded field, keyed by field name.
    pub fn render_inputs(&self) -> Vec<(String, String)> {
        self.fields()
            .iter()
            .map(|field| (field.name.clone(), render_input(field)))
            .collect()
    }
}
