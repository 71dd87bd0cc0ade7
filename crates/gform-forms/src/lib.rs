//! # gform-forms
//!
//! Field-model extraction, validation and submission mapping for published
//! HTML forms.
//!
//! This crate provides:
//! - Extraction of an ordered field model from a form page
//! - Type-directed validation of caller values
//! - Translation of name-keyed values into the page's native field ids
//! - Form encoding with repeated keys for multi-valued fields
//! - Standalone input markup for each field
//! - A stateful client over a pluggable [`Transport`]
//!
//! ## Quick Start
//!
//! ```rust
//! use gform_forms::{encode_params, FormDocument, Values};
//!
//! let html = r#"
//!     <form id="ss-form" action="https://example.com/formResponse">
//!       <div class="ss-form-question">
//!         <label class="ss-q-item-label">Email</label>
//!         <input type="email" name="entry.1" required>
//!       </div>
//!     </form>"#;
//!
//! let doc = FormDocument::parse(html).unwrap();
//! assert_eq!(doc.fields()[0].type_name(), "email");
//!
//! let mut values = Values::new();
//! values.insert("Email".into(), "a@b.com".into());
//! assert!(doc.validate(&values).is_ok());
//!
//! let body = encode_params(&doc.to_id_keyed(&values));
//! assert_eq!(body, "entry.1=a%40b.com");
//! ```
//!
//! ## Validation
//!
//! A required field without a value reports `Empty`; a value that fails its
//! type, pattern or membership check reports `Invalid value`. Messages read
//! `"<name>: <reason>"`.
//!
//! ```rust
//! use gform_forms::{Field, FieldKind, FieldMap, Values, validate};
//!
//! let fields = vec![Field::new("entry.1", "email", "", FieldKind::Email).required()];
//! let map = FieldMap::from_fields(&fields);
//! let errors = validate(&Values::new(), &fields, &map).unwrap_err();
//! assert_eq!(errors.messages(), vec!["email: Empty"]);
//! ```

mod client;
mod document;
mod error;
pub mod extract;
mod field;
mod options;
mod params;
pub mod render;
pub mod validation;

pub use client::{FormClient, Transport};
pub use document::{is_accepted_response, FormDocument};
pub use error::{ErrorReason, FieldError, FormError, Result, TransportError, ValidationErrors};
pub use field::{Field, FieldKind};
pub use options::ClientOptions;
pub use params::{encode_params, to_id_keyed, FieldMap, FieldValue, Params, Values};
pub use validation::validate;
