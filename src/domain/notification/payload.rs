//! Notification wire payloads
//!
//! The toast payload is the only wire-format artifact of the system: a fixed
//! two-line text template consumed by the OS notification manager. The badge
//! payload carries a single numeric value.

use std::fmt;

/// Toast XML payload using the two-line `ToastText02` template.
///
/// Rendered once at construction. The optional `launch` attribute carries the
/// request's launch arguments and is present exactly when they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastPayload {
    xml: String,
}

impl ToastPayload {
    /// Build the payload from the two display lines and optional launch args.
    ///
    /// Interpolated values are XML-escaped; the payload is handed to an XML
    /// loader on the OS side.
    pub fn new(title: &str, body: &str, launch_args: Option<&str>) -> Self {
        let mut xml = String::from("<toast");
        if let Some(args) = launch_args.filter(|a| !a.is_empty()) {
            xml.push_str(" launch=\"");
            xml.push_str(&escape_xml(args));
            xml.push('"');
        }
        xml.push_str("><visual><binding template=\"ToastText02\">");
        xml.push_str("<text id=\"1\">");
        xml.push_str(&escape_xml(title));
        xml.push_str("</text><text id=\"2\">");
        xml.push_str(&escape_xml(body));
        xml.push_str("</text></binding></visual></toast>");
        Self { xml }
    }

    /// Get the rendered XML
    pub fn as_xml(&self) -> &str {
        &self.xml
    }
}

impl fmt::Display for ToastPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml)
    }
}

/// Numeric badge payload.
///
/// Carries the exact integer passed by the caller. No bounds checking; zero
/// and negative values pass through verbatim and any rejection is the OS's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePayload {
    value: i32,
}

impl BadgePayload {
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Render the badge XML
    pub fn as_xml(&self) -> String {
        format!("<badge value=\"{}\"/>", self.value)
    }
}

/// Escape a string for use in XML text content or attribute values
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
