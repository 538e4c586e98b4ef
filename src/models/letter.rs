use serde::{Deserialize, Serialize};

use crate::normalize::normalize_paragraphs;

/// Raw drafting-service output for one demand.
///
/// Transient: created per submission, replaced on every regeneration,
/// discarded once normalized into a [`NormalizedLetter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftResult {
    /// Short intent label for the demand (at most 3 words)
    #[serde(rename = "assunto")]
    pub subject: String,
    /// One-paragraph summary of the demand
    #[serde(rename = "resumo")]
    pub summary: String,
    /// Full letter text, expected (not guaranteed) to hold 3 paragraphs
    #[serde(rename = "texto")]
    pub body: String,
}

/// A letter whose body is guaranteed to be exactly three paragraphs.
///
/// This is the only shape downstream code (template filler, editing step)
/// may rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLetter {
    pub subject: String,
    pub summary: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

impl NormalizedLetter {
    /// Normalize a draft into the three-paragraph invariant.
    pub fn from_draft(draft: DraftResult) -> Self {
        let [paragraph1, paragraph2, paragraph3] = normalize_paragraphs(&draft.body);
        Self {
            subject: draft.subject,
            summary: draft.summary,
            paragraph1,
            paragraph2,
            paragraph3,
        }
    }

    pub fn paragraphs(&self) -> [&str; 3] {
        [&self.paragraph1, &self.paragraph2, &self.paragraph3]
    }
}

/// User-supplied letter metadata. Only checked for presence, never for
/// format.
#[derive(Debug, Clone)]
pub struct OficioRequest {
    pub office_number: String,
    pub year: String,
    pub send_date: chrono::NaiveDate,
}

/// A required form field was left empty
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("demand text is empty")]
    MissingDemand,
    #[error("office number is empty")]
    MissingOfficeNumber,
    #[error("office year is empty")]
    MissingYear,
}

/// Check the required fields before any network call is made.
pub fn validate_fields(
    demand: &str,
    office_number: &str,
    year: &str,
) -> Result<(), ValidationError> {
    if demand.trim().is_empty() {
        return Err(ValidationError::MissingDemand);
    }
    if office_number.trim().is_empty() {
        return Err(ValidationError::MissingOfficeNumber);
    }
    if year.trim().is_empty() {
        return Err(ValidationError::MissingYear);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draft_result() {
        let json = r#"{
            "assunto": "Poda de árvore",
            "resumo": "Solicitação de poda na Rua das Flores.",
            "texto": "Cumprimentando-o cordialmente.\n\nDetalhes.\n\nConclusão."
        }"#;

        let draft: DraftResult = serde_json::from_str(json).unwrap();
        assert_eq!(draft.subject, "Poda de árvore");
        assert!(draft.body.contains("\n\n"));
    }

    #[test]
    fn test_from_draft_keeps_three_paragraphs() {
        let draft = DraftResult {
            subject: "Iluminação".to_string(),
            summary: "Resumo.".to_string(),
            body: "Um.\n\nDois.\n\nTrês.".to_string(),
        };

        let letter = NormalizedLetter::from_draft(draft);
        assert_eq!(letter.paragraph1, "Um.");
        assert_eq!(letter.paragraph2, "Dois.");
        assert_eq!(letter.paragraph3, "Três.");
    }

    #[test]
    fn test_from_draft_repairs_single_block() {
        let draft = DraftResult {
            subject: "Buraco".to_string(),
            summary: "Resumo.".to_string(),
            body: "texto sem quebras de linha duplas".to_string(),
        };

        let letter = NormalizedLetter::from_draft(draft);
        let rebuilt: String = letter.paragraphs().concat();
        assert_eq!(rebuilt, "texto sem quebras de linha duplas");
    }

    #[test]
    fn test_validate_fields_rejects_blank_demand() {
        let err = validate_fields("   ", "123", "2026").unwrap_err();
        assert_eq!(err, ValidationError::MissingDemand);
    }

    #[test]
    fn test_validate_fields_accepts_complete_input() {
        assert!(validate_fields("Falta de luz na praça", "45", "2026").is_ok());
    }
}
