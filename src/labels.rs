//! Badge Lookups
//!
//! Category and status to CSS class / label tables. Unknown keys always
//! map to a neutral default.

/// Classes for anything the tables don't know
pub const NEUTRAL_BADGE: &str = "bg-gray-100 text-gray-800";

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Pomoc społeczna", "bg-blue-100 text-blue-800"),
    ("Ekologia", "bg-green-100 text-green-800"),
    ("Kultura", "bg-purple-100 text-purple-800"),
    ("Edukacja", "bg-yellow-100 text-yellow-800"),
    ("Sport", "bg-red-100 text-red-800"),
    ("Opieka nad zwierzętami", "bg-orange-100 text-orange-800"),
    ("Pomoc seniorom", "bg-pink-100 text-pink-800"),
];

const STATUS_STYLES: &[(&str, &str)] = &[
    ("active", "bg-green-100 text-green-800"),
    ("pending", "bg-yellow-100 text-yellow-800"),
    ("approved", "bg-blue-100 text-blue-800"),
    ("completed", "bg-purple-100 text-purple-800"),
    ("rejected", "bg-red-100 text-red-800"),
    ("cancelled", NEUTRAL_BADGE),
];

const STATUS_LABELS: &[(&str, &str)] = &[
    ("active", "Aktywna"),
    ("pending", "Oczekuje"),
    ("approved", "Zaakceptowane"),
    ("completed", "Ukończone"),
    ("rejected", "Odrzucone"),
    ("cancelled", "Anulowane"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn category_color(category: &str) -> &'static str {
    lookup(CATEGORY_COLORS, category).unwrap_or(NEUTRAL_BADGE)
}

pub fn status_style(status: &str) -> &'static str {
    lookup(STATUS_STYLES, status).unwrap_or(NEUTRAL_BADGE)
}

/// Polish label for a status; unknown statuses are shown as-is
pub fn status_label(status: &str) -> &str {
    lookup(STATUS_LABELS, status).unwrap_or(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CATEGORIES;

    #[test]
    fn test_every_configured_category_has_a_color() {
        for category in CATEGORIES {
            assert_ne!(category_color(category), NEUTRAL_BADGE, "{}", category);
        }
    }

    #[test]
    fn test_unknown_keys_get_defaults() {
        assert_eq!(category_color("Astronautyka"), NEUTRAL_BADGE);
        assert_eq!(category_color(""), NEUTRAL_BADGE);
        assert_eq!(status_style("on_hold"), NEUTRAL_BADGE);
        assert_eq!(status_label("on_hold"), "on_hold");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_label("pending"), "Oczekuje");
        assert_eq!(status_style("pending"), "bg-yellow-100 text-yellow-800");
        assert_eq!(status_label("cancelled"), "Anulowane");
        assert_eq!(status_style("cancelled"), NEUTRAL_BADGE);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(status_label("Active"), "Active");
        assert_eq!(category_color("sport"), NEUTRAL_BADGE);
    }
}
