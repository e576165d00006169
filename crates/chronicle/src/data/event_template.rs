//! Markdown rendering of recorded events with tera.

use chronicle_core::Event;
use tera::{Context, Tera};

/// File name of the event template inside `templates/`.
pub const EVENT_TEMPLATE_FILE: &str = "event.md.tera";

/// Written to `templates/event.md.tera` on first start.
pub const DEFAULT_EVENT_TEMPLATE: &str = r#"# {{ name }}

## Details
- Calendar: {{ calendar_name }} ({{ calendar_abbrev }})
- Date: {{ date }}
- Days Since Year 0: {{ days_since_zero }}

## Description
<!-- Add event description here -->

"#;

/// Render `template` for `event`.
///
/// Every `Event` field is available by name, plus `date` holding the
/// canonical `AAYYYY-MM-DD` string.
pub fn render_event(template: &str, event: &Event) -> tera::Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(EVENT_TEMPLATE_FILE, template)?;

    let mut context = Context::from_serialize(event)?;
    context.insert("date", &event.stamp().to_string());

    tera.render(EVENT_TEMPLATE_FILE, &context)
}
