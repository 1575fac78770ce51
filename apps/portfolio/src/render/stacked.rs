use crate::models::resume::ResumeRecord;
use crate::render::html::{contact_links, escape, list_items, tags};
use crate::render::Layout;

/// Single-column layout. Sections follow one another; empty ones are left out.
pub struct StackedLayout;

impl Layout for StackedLayout {
    fn name(&self) -> &'static str {
        "stacked"
    }

    fn render_record(&self, record: &ResumeRecord) -> String {
        let mut out = String::from(r#"<div class="container stacked-layout">"#);

        out.push_str(&format!(
            r#"<header class="identity"><h1>{}</h1><nav class="contact">{}</nav></header>"#,
            escape(&record.name),
            contact_links(record, "link")
        ));

        if !record.skills.is_empty() {
            out.push_str(r#"<section id="skills"><h2>Skills</h2>"#);
            out.push_str(&tags(&record.skills, "tag"));
            out.push_str("</section>");
        }

        if !record.education.is_empty() {
            out.push_str(&format!(
                r#"<section id="education"><h2>Education</h2><ul>{}</ul></section>"#,
                list_items(&record.education)
            ));
        }

        if !record.experience.is_empty() {
            out.push_str(r#"<section id="experience"><h2>Experience</h2>"#);
            for exp in &record.experience {
                out.push_str(&format!(
                    r#"<article class="entry"><h3>{}</h3><p class="muted">{}</p><p>{}</p></article>"#,
                    escape(&exp.role),
                    escape(&exp.duration),
                    escape(&exp.description)
                ));
            }
            out.push_str("</section>");
        }

        if !record.projects.is_empty() {
            out.push_str(r#"<section id="projects"><h2>Projects</h2>"#);
            for project in &record.projects {
                out.push_str(&format!(
                    r#"<article class="entry"><h3>{}</h3><p>{}</p>{}</article>"#,
                    escape(&project.name),
                    escape(&project.description),
                    tags(&project.technologies, "tag tag-outline")
                ));
            }
            out.push_str("</section>");
        }

        if !record.q_and_a.is_empty() {
            out.push_str(r#"<section id="qa"><h2>Q&amp;A</h2><dl>"#);
            for qa in &record.q_and_a {
                out.push_str(&format!(
                    "<dt>Q: {}</dt><dd>A: {}</dd>",
                    escape(&qa.question),
                    escape(&qa.answer)
                ));
            }
            out.push_str("</dl></section>");
        }

        out.push_str("</div>");
        out
    }
}
