use crate::models::{NormalizedLetter, OficioRequest};

/// One user's in-progress letter workflow.
///
/// Created when a draft is first normalized, replaced wholesale on
/// regeneration, and consumed when the letter is saved. The letter is never
/// persisted beyond this object.
#[derive(Debug)]
pub struct Session {
    /// Correlation id for log lines
    pub session_id: String,
    pub username: String,
    pub request: OficioRequest,
    letter: Option<NormalizedLetter>,
}

impl Session {
    pub fn new(username: &str, request: OficioRequest) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            request,
            letter: None,
        }
    }

    /// Store a freshly normalized letter, discarding any previous one.
    pub fn set_letter(&mut self, letter: NormalizedLetter) {
        self.letter = Some(letter);
    }

    pub fn letter(&self) -> Option<&NormalizedLetter> {
        self.letter.as_ref()
    }

    /// Apply user edits to the in-progress letter, if there is one.
    pub fn letter_mut(&mut self) -> Option<&mut NormalizedLetter> {
        self.letter.as_mut()
    }

    /// Consume the in-progress letter for saving. The session holds no
    /// letter afterwards; a new generation starts the cycle again.
    pub fn take_letter(&mut self) -> Option<NormalizedLetter> {
        self.letter.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> OficioRequest {
        OficioRequest {
            office_number: "45".to_string(),
            year: "2026".to_string(),
            send_date: NaiveDate::from_ymd_opt(2026, 3, 12).unwrap(),
        }
    }

    fn letter(subject: &str) -> NormalizedLetter {
        NormalizedLetter {
            subject: subject.to_string(),
            summary: "Resumo.".to_string(),
            paragraph1: "Um.".to_string(),
            paragraph2: "Dois.".to_string(),
            paragraph3: "Três.".to_string(),
        }
    }

    #[test]
    fn test_regeneration_replaces_letter() {
        let mut session = Session::new("vereador", request());
        session.set_letter(letter("Primeiro"));
        session.set_letter(letter("Segundo"));

        assert_eq!(session.letter().unwrap().subject, "Segundo");
    }

    #[test]
    fn test_save_consumes_letter() {
        let mut session = Session::new("vereador", request());
        session.set_letter(letter("Assunto"));

        let taken = session.take_letter().unwrap();
        assert_eq!(taken.subject, "Assunto");
        assert!(session.letter().is_none());
    }
}
