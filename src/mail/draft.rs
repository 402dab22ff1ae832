use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const NO_SUBJECT: &str = "(no subject)";
const LINE_WIDTH: usize = 76;

/// A rendered credentials email split into headers and body, ready to be
/// written as an unsent `.eml` draft.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EmailDraft {
    pub from: Option<String>,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Uses the first line of the filled template as the subject and the
    /// rest, minus leading blank lines, as the body.
    pub fn from_rendered(to: &str, rendered_body: &str, from: Option<&str>) -> Self {
        let (first_line, rest) = rendered_body
            .split_once('\n')
            .unwrap_or((rendered_body, ""));

        let subject = match first_line.trim() {
            "" => NO_SUBJECT.to_string(),
            line => line.to_string(),
        };
        let body = rest.trim_start_matches(['\r', '\n']).to_string();

        Self {
            from: from.map(str::to_string),
            to: to.to_string(),
            subject,
            body,
        }
    }
}

/// Serializes the draft as an RFC 5322 message with a base64 text body.
pub fn build_eml(draft: &EmailDraft) -> String {
    let mut headers = Vec::new();

    if let Some(from) = &draft.from {
        headers.push(format!("From: {}", sanitize_header_value(from)));
    }
    headers.push(format!("To: {}", sanitize_header_value(&draft.to)));
    headers.push(format!("Subject: {}", encode_subject(&draft.subject)));
    headers.push("X-Unsent: 1".to_string());
    headers.push("MIME-Version: 1.0".to_string());
    headers.push("Content-Type: text/plain; charset=utf-8".to_string());
    headers.push("Content-Transfer-Encoding: base64".to_string());

    let body = normalize_newlines(&draft.body);
    let encoded = STANDARD.encode(body.as_bytes());

    format!(
        "{}\r\n\r\n{}",
        headers.join("\r\n"),
        fold_base64_lines(&encoded)
    )
}

fn encode_subject(subject: &str) -> String {
    let subject = sanitize_header_value(subject);
    if subject.is_ascii() {
        subject
    } else {
        format!("=?utf-8?B?{}?=", STANDARD.encode(subject.as_bytes()))
    }
}

fn sanitize_header_value(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|value| *value != '\r' && *value != '\n')
        .collect()
}

fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\n', "\r\n")
}

fn fold_base64_lines(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / LINE_WIDTH * 2 + 2);
    let mut start = 0;
    while start < input.len() {
        let end = (start + LINE_WIDTH).min(input.len());
        out.push_str(&input[start..end]);
        out.push_str("\r\n");
        start = end;
    }
    out
}
