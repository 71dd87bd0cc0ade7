//! Standalone input markup for extracted fields.
//!
//! The markup uses the field's public `name` as the control name, so a page
//! rendering these inputs posts name-keyed values that
//! [`to_id_keyed`](crate::to_id_keyed) can translate.

use ironhtml::typed::Element;
use ironhtml_elements::{Input, Label, Option_, Select, Textarea};

use crate::field::{Field, FieldKind};

/// Renders the input control(s) for a field.
///
/// Radio and checkbox fields render one labelled input per value; select
/// fields render a `<select>` with one option per value.
pub fn render_input(field: &Field) -> String {
    match &field.kind {
        FieldKind::Radio { values } | FieldKind::Checkbox { values } => values
            .iter()
            .map(|value| render_choice(field, value))
            .collect(),
        FieldKind::Select { values } => Element::<Select>::new()
            .attr("name", &field.name)
            .when(field.required, |s| s.bool_attr("required"))
            .children(values.iter(), |value, o: Element<Option_>| {
                o.attr("value", value).text(value)
            })
            .render(),
        FieldKind::Textarea => Element::<Textarea>::new()
            .attr("name", &field.name)
            .when(field.required, |t| t.bool_attr("required"))
            .render(),
        kind => {
            let pattern = kind.pattern().unwrap_or("");
            Element::<Input>::new()
                .attr("type", kind.type_name())
                .attr("name", &field.name)
                .when(field.required, |i| i.bool_attr("required"))
                .when(!pattern.is_empty(), |i| i.attr("pattern", pattern))
                .render()
        }
    }
}

fn render_choice(field: &Field, value: &str) -> String {
    let type_name = field.type_name();
    Element::<Label>::new()
        .child::<Input, _>(|i| {
            i.attr("type", type_name)
                .attr("name", &field.name)
                .attr("value", value)
                .when(field.required, |i| i.bool_attr("required"))
        })
        .text(value)
        .render()
}
