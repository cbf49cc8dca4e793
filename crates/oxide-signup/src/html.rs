//! HTML snapshots of the signup page.
//!
//! Renders whatever a [`DisplayState`] currently holds: the form with its
//! indicator classes and messages, or the greeting once the form has been
//! accepted.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, Form, Input, Label, Span, A, H2, H4};
use oxide_validator::{DisplayState, Field, FieldSource, Greeting, Region};

use crate::form::{SignupForm, EMAIL, PASSWORD, PASSWORD_CONFIRM};

/// Returns the input type used for a field.
fn input_type(field: &Field) -> &'static str {
    match field.id() {
        EMAIL => "email",
        PASSWORD | PASSWORD_CONFIRM => "password",
        _ => "text",
    }
}

/// Renders one field: its wrapper, label, input and message slot.
///
/// The wrapper carries `form-control` plus every indicator tag set on the
/// field. Password values are never written back into the page.
pub fn render_field(field: &Field, value: Option<&str>, display: &DisplayState) -> String {
    let id = field.id();
    let state = display.field(id);
    let classes = std::iter::once("form-control")
        .chain(state.indicators.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    let kind = input_type(field);
    let value = value.filter(|_| kind != "password").unwrap_or("");

    Element::<Div>::new()
        .class(&classes)
        .child::<Label, _>(|l| l.attr("for", id).text(field.label()))
        .child::<Input, _>(|i| {
            i.attr("type", kind)
                .attr("id", id)
                .attr("name", id)
                .attr("value", value)
        })
        .child::<Span, _>(|s| s.class("message").text(&state.message))
        .render()
}

/// Renders the whole signup form with a submit button.
pub fn render_form(form: &SignupForm, values: &dyn FieldSource, display: &DisplayState) -> String {
    let mut html = Element::<Form>::new().attr("id", "form");

    for field in form.fields() {
        let value = values.raw_value(field);
        let field_html = render_field(field, Some(&value), display);
        html = html.child::<Div, _>(|d| d.raw(&field_html));
    }

    html.child::<Button, _>(|b| {
        b.attr("type", "submit")
            .attr("id", "submit-btn")
            .text("Submit")
    })
    .render()
}

/// Renders the greeting shown after a successful submit.
pub fn render_success(greeting: &Greeting) -> String {
    let heading = greeting.heading();

    Element::<Div>::new()
        .attr("id", "success-message")
        .child::<H2, _>(|h| h.text(&heading))
        .child::<H4, _>(|h| h.text(greeting.subheading()))
        .child::<A, _>(|a| {
            a.attr("href", Greeting::RETURN_HREF)
                .attr("id", "return-btn")
                .text("Return")
        })
        .render()
}

/// Renders the page container in its current state.
pub fn render_page(form: &SignupForm, values: &dyn FieldSource, display: &DisplayState) -> String {
    let inner = match display.greeting() {
        Some(greeting) if !display.is_visible(Region::Form) => render_success(greeting),
        _ => render_form(form, values, display),
    };

    Element::<Div>::new()
        .class("container")
        .raw(&inner)
        .render()
}
