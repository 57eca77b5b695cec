use crate::content::{Brand, MapEmbed, Maps};
use crate::map_tab::MapLocation;

/// Outbound URLs, built once from the brand data and never parsed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLinks {
    pub messaging: String,
    pub telephone: String,
    pub phone_display: String,
    pub social: String,
    pub email: String,
}

impl OutboundLinks {
    pub fn new(brand: &Brand) -> Self {
        let digits: String = brand
            .phone_digits
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        Self {
            messaging: format!("https://wa.me/{digits}"),
            telephone: format!("tel:+{digits}"),
            phone_display: display_phone(&digits),
            social: brand.social_url.clone(),
            email: brand.email.clone(),
        }
    }

    pub fn map(maps: &Maps, location: MapLocation) -> &MapEmbed {
        match location {
            MapLocation::Primary => &maps.primary,
            MapLocation::Secondary => &maps.secondary,
        }
    }
}

/// `5511966020206` -> `+55 11 96602-0206`. Numbers that do not look like a
/// Brazilian mobile or landline are shown as `+<digits>`.
fn display_phone(digits: &str) -> String {
    match digits.len() {
        13 => format!(
            "+{} {} {}-{}",
            &digits[0..2],
            &digits[2..4],
            &digits[4..9],
            &digits[9..]
        ),
        12 => format!(
            "+{} {} {}-{}",
            &digits[0..2],
            &digits[2..4],
            &digits[4..8],
            &digits[8..]
        ),
        _ => format!("+{digits}"),
    }
}
