use crate::models::resume::ResumeRecord;
use crate::render::html::{contact_links, escape, list_items, tags};
use crate::render::Layout;

/// Card layout: identity, skills and education in a sidebar card, with
/// experience, projects and Q&A as cards in the main column.
pub struct SidebarLayout;

impl Layout for SidebarLayout {
    fn name(&self) -> &'static str {
        "sidebar"
    }

    fn render_record(&self, record: &ResumeRecord) -> String {
        let mut out = String::from(r#"<div class="container sidebar-layout">"#);

        out.push_str(r#"<aside class="sidebar"><section class="card">"#);
        out.push_str(&format!(r#"<h1 class="name">{}</h1>"#, escape(&record.name)));
        out.push_str(&format!(
            r#"<div class="contact">{}</div>"#,
            contact_links(record, "button")
        ));
        out.push_str("<hr><h2>Skills</h2>");
        out.push_str(&tags(&record.skills, "tag"));
        out.push_str("<hr><h2>Education</h2>");
        out.push_str(&format!(
            r#"<ul class="education muted">{}</ul>"#,
            list_items(&record.education)
        ));
        out.push_str("</section></aside>");

        out.push_str(r#"<main class="main">"#);

        out.push_str(r#"<section class="card"><h2>Professional Experience</h2>"#);
        for exp in &record.experience {
            out.push_str(&format!(
                r#"<div class="entry"><h3>{}</h3><p class="muted">{}</p><p>{}</p></div>"#,
                escape(&exp.role),
                escape(&exp.duration),
                escape(&exp.description)
            ));
        }
        out.push_str("</section>");

        out.push_str(r#"<section class="card"><h2>Projects</h2>"#);
        for project in &record.projects {
            out.push_str(&format!(
                r#"<div class="entry"><h3>{}</h3><p>{}</p>{}</div>"#,
                escape(&project.name),
                escape(&project.description),
                tags(&project.technologies, "tag tag-outline")
            ));
        }
        out.push_str("</section>");

        out.push_str(r#"<section class="card"><h2>Questions &amp; Answers</h2>"#);
        for qa in &record.q_and_a {
            out.push_str(&format!(
                r#"<div class="entry"><h3>Q: {}</h3><p>A: {}</p></div>"#,
                escape(&qa.question),
                escape(&qa.answer)
            ));
        }
        out.push_str("</section>");

        out.push_str("</main></div>");
        out
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::models::resume::{ExperienceEntry, ProjectEntry, QuestionAnswer};
    use crate::view::ViewState;

    pub(crate) fn full_record() -> ResumeRecord {
        ResumeRecord {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            github_url: Some("https://github.com/grace".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/grace".to_string()),
            education: vec!["Vassar College".to_string(), "Yale University".to_string()],
            experience: vec![
                ExperienceEntry {
                    role: "Programmer".to_string(),
                    duration: "1944-1949".to_string(),
                    description: "Mark I operations".to_string(),
                },
                ExperienceEntry {
                    role: "Director".to_string(),
                    duration: "1967-1986".to_string(),
                    description: "Navy programming languages group".to_string(),
                },
            ],
            projects: vec![
                ProjectEntry {
                    name: "FLOW-MATIC".to_string(),
                    description: "English-like data processing language".to_string(),
                    technologies: vec!["UNIVAC I".to_string(), "Compilers".to_string()],
                },
                ProjectEntry {
                    name: "COBOL".to_string(),
                    description: "Business-oriented language".to_string(),
                    technologies: vec!["CODASYL".to_string()],
                },
            ],
            skills: vec!["Mathematics".to_string(), "Debugging".to_string()],
            q_and_a: vec![
                QuestionAnswer {
                    question: "First bug?".to_string(),
                    answer: "A moth in relay 70".to_string(),
                },
                QuestionAnswer {
                    question: "Motto?".to_string(),
                    answer: "Ask forgiveness, not permission".to_string(),
                },
            ],
        }
    }

    /// Asserts each needle occurs exactly once in `page` and that they appear in the given order.
    pub(crate) fn assert_once_in_order(page: &str, needles: &[String]) {
        let mut last = 0;
        for needle in needles {
            assert_eq!(page.matches(needle.as_str()).count(), 1, "{needle} should appear once");
            let pos = page.find(needle.as_str()).unwrap();
            assert!(pos >= last, "{needle} is out of order");
            last = pos;
        }
    }

    #[test]
    fn test_renders_every_field_once_in_order() {
        let record = full_record();
        let page = SidebarLayout.render(&ViewState::Loaded(Arc::new(record.clone())));

        assert_once_in_order(&page, &[format!("<h1 class=\"name\">{}</h1>", record.name)]);
        assert_eq!(page.matches("href=\"mailto:grace@example.com\"").count(), 1);
        assert_eq!(page.matches("href=\"https://github.com/grace\"").count(), 1);
        assert_eq!(
            page.matches("href=\"https://www.linkedin.com/in/grace\"").count(),
            1
        );

        let skills: Vec<String> = record
            .skills
            .iter()
            .map(|s| format!("<span class=\"tag\">{s}</span>"))
            .collect();
        assert_once_in_order(&page, &skills);

        let education: Vec<String> = record.education.iter().map(|e| format!("<li>{e}</li>")).collect();
        assert_once_in_order(&page, &education);

        let experience: Vec<String> = record
            .experience
            .iter()
            .flat_map(|e| [e.role.clone(), e.duration.clone(), e.description.clone()])
            .collect();
        assert_once_in_order(&page, &experience);

        let projects: Vec<String> = record
            .projects
            .iter()
            .flat_map(|p| {
                let mut parts = vec![p.name.clone(), p.description.clone()];
                parts.extend(
                    p.technologies
                        .iter()
                        .map(|t| format!("<span class=\"tag tag-outline\">{t}</span>")),
                );
                parts
            })
            .collect();
        assert_once_in_order(&page, &projects);

        let qa: Vec<String> = record
            .q_and_a
            .iter()
            .flat_map(|q| [format!("Q: {}", q.question), format!("A: {}", q.answer)])
            .collect();
        assert_once_in_order(&page, &qa);
    }

    #[test]
    fn test_escapes_record_text() {
        let mut record = full_record();
        record.name = "<script>alert(1)</script>".to_string();
        let page = SidebarLayout.render_record(&record);
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_keeps_empty_section_cards() {
        let mut record = full_record();
        record.experience.clear();
        record.projects.clear();
        record.q_and_a.clear();

        let page = SidebarLayout.render_record(&record);
        assert!(page.contains("<h2>Professional Experience</h2></section>"));
        assert!(page.contains("<h2>Projects</h2></section>"));
        assert!(page.contains("<h2>Questions &amp; Answers</h2></section>"));
    }
}
