//! Weekday name vocabulary.

use chrono::Weekday;

/// Source-language weekday names, lowercase.
///
/// Spanish names appear both with and without accents on real pages.
pub static WEEKDAY_NAMES: &[(&str, Weekday)] = &[
    ("lunes", Weekday::Mon),
    ("martes", Weekday::Tue),
    ("miércoles", Weekday::Wed),
    ("miercoles", Weekday::Wed),
    ("jueves", Weekday::Thu),
    ("viernes", Weekday::Fri),
    ("sábado", Weekday::Sat),
    ("sabado", Weekday::Sat),
    ("domingo", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Looks up a weekday name, ignoring case.
#[must_use]
pub fn lookup_weekday(name: &str) -> Option<Weekday> {
    let lower = name.to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .find_map(|&(candidate, weekday)| (candidate == lower).then_some(weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_spanish_names() {
        assert_eq!(lookup_weekday("lunes"), Some(Weekday::Mon));
        assert_eq!(lookup_weekday("Jueves"), Some(Weekday::Thu));
        assert_eq!(lookup_weekday("DOMINGO"), Some(Weekday::Sun));
    }

    #[test]
    fn test_lookup_accented_and_plain_spellings() {
        assert_eq!(lookup_weekday("Miércoles"), Some(Weekday::Wed));
        assert_eq!(lookup_weekday("miercoles"), Some(Weekday::Wed));
        assert_eq!(lookup_weekday("SÁBADO"), Some(Weekday::Sat));
        assert_eq!(lookup_weekday("Sabado"), Some(Weekday::Sat));
    }

    #[test]
    fn test_lookup_english_names() {
        assert_eq!(lookup_weekday("Thursday"), Some(Weekday::Thu));
        assert_eq!(lookup_weekday("sunday"), Some(Weekday::Sun));
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(lookup_weekday("feriado"), None);
        assert_eq!(lookup_weekday(""), None);
    }
}
