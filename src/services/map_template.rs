use crate::models::MapView;

/// Map page shipped with the service
pub const MAP_HTML: &str = include_str!("../../static/map.html");

const PLACEHOLDERS: [&str; 4] = ["{{name}}", "{{date}}", "{{center}}", "{{points}}"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("template is missing placeholder {0}")]
    MissingPlaceholder(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Name,
    Date,
    Center,
    Points,
}

impl Slot {
    fn from_placeholder(placeholder: &str) -> Option<Self> {
        match placeholder {
            "{{name}}" => Some(Slot::Name),
            "{{date}}" => Some(Slot::Date),
            "{{center}}" => Some(Slot::Center),
            "{{points}}" => Some(Slot::Points),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// Map page template, parsed once at startup and shared with the handlers.
///
/// `{{name}}` and `{{date}}` are filled with HTML-escaped text, `{{center}}`
/// and `{{points}}` with JSON suitable for an inline `<script>`.
#[derive(Debug, Clone)]
pub struct MapTemplate {
    segments: Vec<Segment>,
}

impl MapTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        for placeholder in PLACEHOLDERS {
            if !source.contains(placeholder) {
                return Err(TemplateError::MissingPlaceholder(placeholder));
            }
        }

        let mut segments = Vec::new();
        let mut rest = source;

        while let Some((offset, placeholder, slot)) = next_placeholder(rest) {
            if offset > 0 {
                segments.push(Segment::Literal(rest[..offset].to_string()));
            }
            segments.push(Segment::Slot(slot));
            rest = &rest[offset + placeholder.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Parse the bundled map page
    pub fn bundled() -> Result<Self, TemplateError> {
        Self::parse(MAP_HTML)
    }

    pub fn render(&self, view: &MapView) -> String {
        let center = script_json(&view.center);
        let points = script_json(&view.points);

        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => html.push_str(text),
                Segment::Slot(Slot::Name) => html.push_str(&escape_html(&view.name)),
                Segment::Slot(Slot::Date) => html.push_str(&escape_html(&view.date)),
                Segment::Slot(Slot::Center) => html.push_str(&center),
                Segment::Slot(Slot::Points) => html.push_str(&points),
            }
        }
        html
    }
}

/// Earliest placeholder in `text`
fn next_placeholder(text: &str) -> Option<(usize, &'static str, Slot)> {
    PLACEHOLDERS
        .iter()
        .filter_map(|placeholder| {
            let offset = text.find(placeholder)?;
            let slot = Slot::from_placeholder(placeholder)?;
            Some((offset, *placeholder, slot))
        })
        .min_by_key(|(offset, _, _)| *offset)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON that cannot close the surrounding `<script>` element
fn script_json<T: serde::Serialize>(value: &T) -> String {
    // Plain structs of floats and strings always serialize
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
}
