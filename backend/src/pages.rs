use include_dir::{include_dir, Dir};
use rocket::response::content::RawHtml;
use tracing::error;
use record_shared::Record;
use crate::{error::ApiError, utils::escape_html};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

fn template(name: &str) -> &'static str {
    match TEMPLATES.get_file(name).and_then(|f| f.contents_utf8()) {
        Some(contents) => contents,
        None => {
            error!("Missing template {}", name);
            ""
        }
    }
}

/// Fills `{{ key }}` placeholders in one pass. Values are HTML-escaped and
/// never rescanned; unknown keys render as empty.
fn render(name: &str, vars: &[(&str, String)]) -> RawHtml<String> {
    let mut rest = template(name);
    let mut out = String::with_capacity(rest.len());

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else { break };
        out.push_str(&rest[..start]);

        let key = rest[start + 2..start + len].trim();
        if let Some((_, value)) = vars.iter().find(|(k, _)| *k == key) {
            out.push_str(&escape_html(value));
        }
        rest = &rest[start + len + 2..];
    }
    out.push_str(rest);

    RawHtml(out)
}

pub fn form_page() -> RawHtml<String> {
    render("form.html", &[])
}

pub fn result_page(record: &Record) -> RawHtml<String> {
    render("result.html", &[
        ("id", record.id.to_string()),
        ("username", record.username.clone()),
        ("age", record.age.to_string()),
        ("city", record.city.clone()),
        ("country", record.country.clone()),
    ])
}

pub fn error_page(err: &ApiError) -> RawHtml<String> {
    let body = err.body();
    render("error.html", &[
        ("status", err.status().code.to_string()),
        ("message", body.error),
        ("field", body.field.unwrap_or_default()),
    ])
}
