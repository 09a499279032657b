//! HTML views for the web front end.
//!
//! Every value coming from a source page is escaped before it is written.


use crate::types::{FactSheet, InformationType, CREDIT_UNAVAILABLE, US_STATES};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Rendered in place of a fact that could not be found.
pub const VALUE_MISSING: &str = "not found";

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
dt{font-weight:bold;margin-top:.75rem}img{max-width:12rem}";

/// Placeholder text for a template variable with no value.
pub fn fallback_for(var: &str) -> &'static str {
    if var.ends_with("Credit") {
        CREDIT_UNAVAILABLE
    } else {
        VALUE_MISSING
    }
}

/// The state selection form.
pub fn render_form() -> String {
    page("State information", &form_body(None))
}

/// The form again, with a message above it.
pub fn render_form_with_error(message: &str) -> String {
    page("State information", &form_body(Some(message)))
}

/// The result page for one lookup.
pub fn render_information(sheet: &FactSheet) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>{}</h1>\n<dl>\n", encode_text(&sheet.state));

    for (var, value) in sheet.template_vars().into_iter().skip(1) {
        let label = label_for(var);
        let _ = write!(body, "<dt>{label}</dt>\n<dd id=\"{var}\">");
        match (var, value) {
            ("stateFlag" | "stateSeal", Some(src)) => {
                let _ = write!(
                    body,
                    "<img src=\"{}\" alt=\"{} of {}\">",
                    encode_double_quoted_attribute(src),
                    label,
                    encode_double_quoted_attribute(&sheet.state),
                );
            }
            (_, Some(text)) => body.push_str(&encode_text(text)),
            (_, None) => body.push_str(fallback_for(var)),
        }
        body.push_str("</dd>\n");
    }
    body.push_str("</dl>\n<p><a href=\"/\">Look up another state</a></p>\n");

    page(&format!("{} information", sheet.state), &body)
}

fn form_body(message: Option<&str>) -> String {
    let mut body = String::from("<h1>State information</h1>\n");
    if let Some(message) = message {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", encode_text(message));
    }
    body.push_str("<form action=\"/Information\" method=\"get\">\n<select name=\"states\">\n");
    for state in US_STATES {
        let _ = writeln!(
            body,
            "<option value=\"{}\">{}</option>",
            encode_double_quoted_attribute(state),
            encode_text(state)
        );
    }
    body.push_str("</select>\n");
    for (kind, label, checked) in [
        (InformationType::Symbols, "Population and symbols", " checked"),
        (InformationType::Facts, "Capital and governor", ""),
    ] {
        let _ = writeln!(
            body,
            "<label><input type=\"radio\" name=\"InformationType\" value=\"{}\"{checked}> {label}</label>",
            kind.as_param()
        );
    }
    body.push_str("<button type=\"submit\">Look up</button>\n</form>\n");
    body
}

fn label_for(var: &str) -> &'static str {
    match var {
        "statePopulation" => "Population",
        "stateFlag" => "Flag",
        "stateFlagCredit" => "Flag image credit",
        "stateSeal" => "Seal",
        "stateSealCredit" => "Seal image credit",
        "stateCapital" => "Capital",
        "stateGovernor" => "Governor",
        _ => "",
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        encode_text(title)
    )
}
