use chrono::{DateTime, Datelike, Local, NaiveDate};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Render a date long-form in Brazilian Portuguese, e.g. "12 de março de
/// 2026". Used for the `{{DT. Envio}}` template token.
pub fn format_date_long(date: NaiveDate) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Render a timestamp as "DD/MM/YYYY HH:MM" for the access-log row.
pub fn format_log_timestamp(timestamp: DateTime<Local>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date_long() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        assert_eq!(format_date_long(date), "12 de março de 2026");

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date_long(date), "1 de janeiro de 2024");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date_long(date), "31 de dezembro de 2025");
    }

    #[test]
    fn test_format_log_timestamp() {
        let ts = Local.with_ymd_and_hms(2026, 8, 30, 9, 5, 44).unwrap();
        assert_eq!(format_log_timestamp(ts), "30/08/2026 09:05");
    }
}
