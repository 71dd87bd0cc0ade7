#![allow(dead_code)]

use gform_select::{query_selector_all, DomElement};
use scraper::{ElementRef, Html};

/// Two question blocks with noise siblings around the labels.
pub const QUESTIONS: &str = r#"<!DOCTYPE html>
<html><body>
<form id="ss-form" action="https://example.com/formResponse" method="POST">
  <div class="ss-form-question" id="q1">
    <label class="ss-q-item-label" id="l1">Email
      <span class="ss-required-asterisk">*</span></label>
    <label class="other" id="noise1">not me</label>
    <span class="ss-q-item-label" id="noise2">wrong tag</span>
    <input type="email" name="entry.1" id="entry_1" required>
  </div>
  <div class="ss-form-question" id="q2">
    <label class="ss-q-item-label" id="l2">Colour</label>
    <div class="ss-secondary-text" id="help2">Pick one</div>
    <input type="radio" name="entry.2" value="Red" id="r1">
    <input type="radio" name="entry.2" value="Blue" id="r2">
  </div>
  <p class="ss-form-question-footer" id="footer">footer</p>
</form>
</body></html>"#;

pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

pub fn select<'a>(doc: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    query_selector_all(selector, &[doc.root_element()])
}

pub fn ids(elements: &[ElementRef<'_>]) -> Vec<String> {
    elements
        .iter()
        .map(|e| e.attribute("id").unwrap_or("").to_string())
        .collect()
}
