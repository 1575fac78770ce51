use serde::{Deserialize, Deserializer, Serialize};

/// Outer wrapper returned by the resume data service.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeEnvelope {
    pub extracted_info: ExtractedInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedInfo {
    #[serde(rename = "resumeInfo")]
    pub resume_info: ResumeRecord,
}

/// A person's resume as served by the data service. Read-only once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(
        rename = "GitHub",
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_url: Option<String>,
    #[serde(
        rename = "LinkedIn",
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<String>,
    #[serde(rename = "Education", default)]
    pub education: Vec<String>,
    #[serde(rename = "Professional Experience", default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(rename = "Projects", default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(rename = "Skills", default)]
    pub skills: Vec<String>,
    #[serde(rename = "Questions and Answers", default)]
    pub q_and_a: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExperienceEntry {
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Blank or null link fields count as absent.
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwraps_record() {
        let body = json!({
            "extracted_info": {
                "resumeInfo": {
                    "Name": "Ada Lovelace",
                    "Email": "ada@example.com",
                    "Education": ["Cambridge"],
                    "Professional Experience": [],
                    "Projects": [],
                    "Skills": ["Analysis"],
                    "Questions and Answers": []
                }
            }
        });

        let envelope: ResumeEnvelope = serde_json::from_value(body).unwrap();
        let record = envelope.extracted_info.resume_info;
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.education, vec!["Cambridge"]);
        assert_eq!(record.skills, vec!["Analysis"]);
        assert!(record.github_url.is_none());
        assert!(record.linkedin_url.is_none());
    }

    #[test]
    fn test_nested_entries_use_pascal_case_keys() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "Name": "Grace Hopper",
            "Email": "grace@example.com",
            "GitHub": "https://github.com/grace",
            "Professional Experience": [
                {"Role": "Rear Admiral", "Duration": "1943-1986", "Description": "COBOL"}
            ],
            "Projects": [
                {"Name": "FLOW-MATIC", "Description": "Compiler", "Technologies": ["UNIVAC"]}
            ],
            "Questions and Answers": [
                {"Question": "Favourite unit?", "Answer": "The nanosecond"}
            ]
        }))
        .unwrap();

        assert_eq!(record.github_url.as_deref(), Some("https://github.com/grace"));
        assert_eq!(record.experience[0].role, "Rear Admiral");
        assert_eq!(record.projects[0].technologies, vec!["UNIVAC"]);
        assert_eq!(record.q_and_a[0].answer, "The nanosecond");
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_empty_and_null_links_are_absent() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "Name": "N",
            "Email": "n@example.com",
            "GitHub": "",
            "LinkedIn": null
        }))
        .unwrap();

        assert!(record.github_url.is_none());
        assert!(record.linkedin_url.is_none());
    }

    #[test]
    fn test_missing_envelope_field_is_rejected() {
        let result = serde_json::from_value::<ResumeEnvelope>(json!({
            "extracted_info": {"somethingElse": {}}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_name_is_rejected() {
        let result = serde_json::from_value::<ResumeRecord>(json!({"Email": "x@example.com"}));
        assert!(result.is_err());
    }
}
