use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{NormalizedLetter, OficioRequest};

/// Letterhead author used in the output filename
pub const AUTHOR_NAME: &str = "Vereador Professor Juliano Lopes";

/// Placeholder tokens the template file is expected to contain
pub const TOKEN_NUM_ANO: &str = "{{Num/Ano}}";
pub const TOKEN_ASSUNTO: &str = "{{Assunto}}";
pub const TOKEN_DT_ENVIO: &str = "{{DT. Envio}}";
pub const TOKEN_PARAG_1: &str = "{{Parag. 1}}";
pub const TOKEN_PARAG_2: &str = "{{Parag. 2}}";
pub const TOKEN_PARAG_3: &str = "{{Parag. 3}}";

/// Fill the letter template and write the result next to `out_dir`.
///
/// Reads the template, substitutes every known placeholder token, and
/// writes a new document whose name is derived from the office number,
/// year, and subject. Tokens not in the known set are left untouched.
pub fn fill_template(
    template_path: &Path,
    out_dir: &Path,
    request: &OficioRequest,
    letter: &NormalizedLetter,
    formatted_date: &str,
) -> Result<PathBuf> {
    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template: {:?}", template_path))?;

    let filled = substitute(&template, request, letter, formatted_date);

    let extension = template_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt");
    let filename = output_filename(
        &request.office_number,
        &request.year,
        &letter.subject,
        extension,
    );

    let out_path = out_dir.join(filename);
    std::fs::write(&out_path, filled)
        .with_context(|| format!("Failed to write document: {:?}", out_path))?;

    Ok(out_path)
}

/// Substitute the known placeholder tokens in the template text.
pub fn substitute(
    template: &str,
    request: &OficioRequest,
    letter: &NormalizedLetter,
    formatted_date: &str,
) -> String {
    let num_ano = format!("{}-{}", request.office_number, request.year);

    template
        .replace(TOKEN_NUM_ANO, &num_ano)
        .replace(TOKEN_ASSUNTO, &letter.subject)
        .replace(TOKEN_DT_ENVIO, formatted_date)
        .replace(TOKEN_PARAG_1, &letter.paragraph1)
        .replace(TOKEN_PARAG_2, &letter.paragraph2)
        .replace(TOKEN_PARAG_3, &letter.paragraph3)
}

/// Build the deterministic output filename. Whitespace in the subject maps
/// to `-` and path separators map to `_` so the name is always safe to
/// create on disk.
pub fn output_filename(office_number: &str, year: &str, subject: &str, extension: &str) -> String {
    let sanitized: String = subject
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                '-'
            } else if c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();

    format!(
        "{}_N° {}-{}_{}.{}",
        AUTHOR_NAME, office_number, year, sanitized, extension
    )
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

    fn letter() -> NormalizedLetter {
        NormalizedLetter {
            subject: "Poda de árvore".to_string(),
            summary: "Resumo.".to_string(),
            paragraph1: "Primeiro parágrafo.".to_string(),
            paragraph2: "Segundo parágrafo.".to_string(),
            paragraph3: "Terceiro parágrafo.".to_string(),
        }
    }

    #[test]
    fn test_substitute_replaces_all_known_tokens() {
        let template = "Ofício {{Num/Ano}}\nAssunto: {{Assunto}}\n{{DT. Envio}}\n\n\
                        {{Parag. 1}}\n\n{{Parag. 2}}\n\n{{Parag. 3}}\n";

        let filled = substitute(template, &request(), &letter(), "12 de março de 2026");

        assert!(filled.contains("Ofício 45-2026"));
        assert!(filled.contains("Assunto: Poda de árvore"));
        assert!(filled.contains("12 de março de 2026"));
        assert!(filled.contains("Primeiro parágrafo."));
        assert!(filled.contains("Terceiro parágrafo."));
        assert!(!filled.contains("{{"));
    }

    #[test]
    fn test_substitute_leaves_unknown_tokens() {
        let template = "{{Assunto}} {{Gabinete}}";
        let filled = substitute(template, &request(), &letter(), "data");
        assert_eq!(filled, "Poda de árvore {{Gabinete}}");
    }

    #[test]
    fn test_output_filename_sanitizes_subject() {
        let name = output_filename("45", "2026", "Poda de árvore / praça", "docx");
        assert_eq!(
            name,
            "Vereador Professor Juliano Lopes_N° 45-2026_Poda-de-árvore-_-praça.docx"
        );
    }

    #[test]
    fn test_fill_template_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("layout_oficio.txt");
        std::fs::write(&template_path, "{{Num/Ano}}: {{Parag. 1}}").unwrap();

        let out_path = fill_template(
            &template_path,
            dir.path(),
            &request(),
            &letter(),
            "12 de março de 2026",
        )
        .unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(written, "45-2026: Primeiro parágrafo.");
        assert!(out_path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .ends_with(".txt"));
    }

    #[test]
    fn test_fill_template_missing_template_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = fill_template(
            &dir.path().join("nope.txt"),
            dir.path(),
            &request(),
            &letter(),
            "data",
        );
        assert!(result.is_err());
    }
}
