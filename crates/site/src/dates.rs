//! Per-locale date formatting for display.

use ananta_core::Lang;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats an ISO `YYYY-MM-DD` date for display.
///
/// English reads `March 4, 2026`; Spanish reads `4 de marzo de 2026`.
/// Input that does not parse as an ISO date is returned unchanged; the
/// site never hard-fails on content.
pub fn format_date(iso: &str, lang: Lang) -> String {
    let Some((year, month, day)) = parse_iso(iso) else {
        log::warn!("unparseable date '{iso}', displaying as-is");
        return iso.to_string();
    };

    let month = match lang {
        Lang::En => MONTHS_EN[usize::from(month - 1)],
        Lang::Es => MONTHS_ES[usize::from(month - 1)],
    };
    match lang {
        Lang::En => format!("{month} {day}, {year}"),
        Lang::Es => format!("{day} de {month} de {year}"),
    }
}

fn parse_iso(iso: &str) -> Option<(u16, u8, u8)> {
    let mut parts = iso.splitn(3, '-');
    let year: u16 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_format() {
        assert_eq!(format_date("2026-03-04", Lang::En), "March 4, 2026");
        assert_eq!(format_date("2025-12-31", Lang::En), "December 31, 2025");
    }

    #[test]
    fn spanish_format() {
        assert_eq!(format_date("2026-03-04", Lang::Es), "4 de marzo de 2026");
        assert_eq!(format_date("2026-01-12", Lang::Es), "12 de enero de 2026");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_date("next spring", Lang::En), "next spring");
        assert_eq!(format_date("2026-13-01", Lang::En), "2026-13-01");
        assert_eq!(format_date("2026-00-10", Lang::Es), "2026-00-10");
        assert_eq!(format_date("", Lang::En), "");
    }
}
