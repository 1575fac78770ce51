//! HTML fragments shared by every layout.

use crate::models::resume::ResumeRecord;

const STYLE: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",sans-serif;background:#f8fafc;color:#0f172a;line-height:1.5}
.centered{display:flex;justify-content:center;align-items:center;min-height:100vh}
.alert{color:#ef4444}
.container{max-width:72rem;margin:0 auto;padding:2rem 1rem}
.card{background:#fff;border:1px solid #e2e8f0;border-radius:.5rem;padding:1.5rem}
.muted{color:#64748b}
.button{display:block;text-align:center;padding:.5rem 1rem;margin-bottom:.75rem;border:1px solid #e2e8f0;border-radius:.375rem;color:inherit;text-decoration:none}
.tags{display:flex;flex-wrap:wrap;gap:.5rem}
.tag{padding:.125rem .625rem;border-radius:9999px;background:#f1f5f9;font-size:.75rem;font-weight:600}
.tag-outline{background:none;border:1px solid #e2e8f0}
.entry+.entry{margin-top:1.5rem}
.sidebar-layout{display:flex;flex-wrap:wrap;gap:2rem}
.sidebar-layout .sidebar{flex:1 1 18rem}
.sidebar-layout .main{flex:2 1 32rem;display:flex;flex-direction:column;gap:2rem}
.sidebar-layout .name{text-align:center}
.stacked-layout section{margin-top:2rem}
.stacked-layout .contact{display:flex;gap:1rem}
"#;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a body fragment in a complete document.
pub fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Portfolio</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn loading() -> String {
    r#"<div class="centered">Loading...</div>"#.to_string()
}

pub fn error(message: &str) -> String {
    format!(
        r#"<div class="centered alert" role="alert">{}</div>"#,
        escape(message)
    )
}

/// Mail link plus the optional GitHub and LinkedIn links. Absent links are skipped entirely.
pub fn contact_links(record: &ResumeRecord, class: &str) -> String {
    let mut out = format!(
        r#"<a class="{class}" href="mailto:{email}">{email}</a>"#,
        email = escape(&record.email)
    );

    let external = [
        ("GitHub", record.github_url.as_deref()),
        ("LinkedIn", record.linkedin_url.as_deref()),
    ];
    for (label, url) in external {
        if let Some(url) = url {
            out.push_str(&format!(
                r#"<a class="{class}" href="{}" target="_blank" rel="noopener noreferrer">{label}</a>"#,
                escape(url)
            ));
        }
    }

    out
}

pub fn tags(items: &[String], class: &str) -> String {
    let spans: String = items
        .iter()
        .map(|item| format!(r#"<span class="{class}">{}</span>"#, escape(item)))
        .collect();
    format!(r#"<div class="tags">{spans}</div>"#)
}

pub fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}
