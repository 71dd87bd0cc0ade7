#![allow(dead_code)]

use std::cell::RefCell;

use gform_forms::{ClientOptions, FieldValue, Transport, TransportError, Values};

pub const FORM_URL: &str = "https://docs.example.com/forms/d/abc/viewform";
pub const ACTION_URL: &str = "https://docs.example.com/forms/d/abc/formResponse";

/// A published form page with one block per supported field type.
pub const SURVEY: &str = r#"<!DOCTYPE html>
<html>
<head><title>Survey</title></head>
<body>
<div class="ss-form-container">
<div class="ss-form-heading"><h1 class="ss-form-title">Survey</h1></div>
<div class="ss-form">
<form action="https://docs.example.com/forms/d/abc/formResponse" method="POST" id="ss-form">
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-item-required ss-text">
      <label class="ss-q-item-label" for="entry_1"><div class="ss-q-title">Name
<span class="ss-required-asterisk">*</span></div>
      <div class="ss-q-help ss-secondary-text">Your full name</div></label>
      <input type="text" name="entry.1" value="" class="ss-q-short" id="entry_1" required pattern="[A-Za-z ]+">
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-text">
      <label class="ss-q-item-label" for="entry_2"><div class="ss-q-title">Email
</div>
      <div class="ss-q-help ss-secondary-text"></div></label>
      <input type="email" name="entry.2" value="" class="ss-q-short" id="entry_2">
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-text">
      <label class="ss-q-item-label" for="entry_3"><div class="ss-q-title">Age</div></label>
      <input type="number" name="entry.3" value="" id="entry_3">
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-text">
      <label class="ss-q-item-label" for="entry_4"><div class="ss-q-title">Homepage</div></label>
      <input type="url" name="entry.4" value="" id="entry_4">
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-paragraph-text">
      <label class="ss-q-item-label" for="entry_5"><div class="ss-q-title">Comments</div></label>
      <textarea name="entry.5" rows="8" cols="0" id="entry_5"></textarea>
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-item-required ss-radio">
      <label class="ss-q-item-label" for="entry_6"><div class="ss-q-title">Colour
<span class="ss-required-asterisk">*</span></div></label>
      <ul class="ss-choices">
        <li class="ss-choice-item"><label><input type="radio" name="entry.6" value="Red" required><span class="ss-choice-label">Red</span></label></li>
        <li class="ss-choice-item"><label><input type="radio" name="entry.6" value="Blue" required><span class="ss-choice-label">Blue</span></label></li>
      </ul>
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-checkbox">
      <label class="ss-q-item-label" for="entry_7"><div class="ss-q-title">Pets</div></label>
      <ul class="ss-choices">
        <li class="ss-choice-item"><label><input type="checkbox" name="entry.7" value="Cat"><span class="ss-choice-label">Cat</span></label></li>
        <li class="ss-choice-item"><label><input type="checkbox" name="entry.7" value="Dog"><span class="ss-choice-label">Dog</span></label></li>
        <li class="ss-choice-item"><label><input type="checkbox" name="entry.7" value="Fish"><span class="ss-choice-label">Fish</span></label></li>
      </ul>
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-select">
      <label class="ss-q-item-label" for="entry_8"><div class="ss-q-title">Country</div></label>
      <select name="entry.8" id="entry_8">
        <option value=""></option>
        <option value="NL">NL</option>
        <option value="JP">JP</option>
      </select>
    </div>
  </div>
  <div class="ss-form-question errorbox-good">
    <div class="ss-item ss-date">
      <label class="ss-q-item-label" for="entry_9"><div class="ss-q-title">Visit</div></label>
      <input type="date" name="entry.9" id="entry_9">
    </div>
  </div>
  <input type="hidden" name="draftResponse" value="[]">
  <input type="submit" name="submit" value="Submit" id="ss-submit">
</form>
</div>
</div>
</body>
</html>"#;

/// A confirmation page returned after an accepted submission.
pub const THANKS: &str = r#"<!DOCTYPE html>
<html><body><div class="ss-resp-card"><div class="ss-resp-message">Your response has been recorded.</div></div></body></html>"#;

/// Values that pass every check in [`SURVEY`].
pub fn valid_values() -> Values {
    values(&[
        ("Name", "Ada Lovelace".into()),
        ("Email", "ada@example.com".into()),
        ("Age", "36".into()),
        ("Homepage", "https://example.com/ada".into()),
        ("Comments", "Hello".into()),
        ("Colour", "Blue".into()),
        ("Pets", vec!["Cat", "Fish"].into()),
        ("Country", "NL".into()),
        ("Visit", "2024-01-15".into()),
    ])
}

pub fn values(pairs: &[(&str, FieldValue)]) -> Values {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

/// A transport serving canned pages and recording submissions.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub page: String,
    pub response: Option<String>,
    pub fetched: RefCell<Vec<(String, u64)>>,
    pub submitted: RefCell<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new(page: &str, response: Option<&str>) -> Self {
        Self {
            page: page.to_string(),
            response: response.map(str::to_string),
            ..Self::default()
        }
    }
}

impl Transport for MockTransport {
    fn fetch(&self, url: &str, options: &ClientOptions) -> Result<String, TransportError> {
        self.fetched
            .borrow_mut()
            .push((url.to_string(), options.timeout));
        Ok(self.page.clone())
    }

    fn submit(
        &self,
        url: &str,
        body: &str,
        _options: &ClientOptions,
    ) -> Result<String, TransportError> {
        self.submitted
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        self.response
            .clone()
            .ok_or_else(|| TransportError::new("connection refused"))
    }
}
