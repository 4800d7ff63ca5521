//! Title formatting.
//!
//! Turns a raw title fragment (`The.Office.US.2005.`) into a clean title plus
//! the optional country code and year it carried.

use crate::models::media::ParsedMediaName;
use regex::Regex;
use std::sync::LazyLock;

static RE_COUNTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{2}").unwrap());
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[12][0-9]{3}").unwrap());
static RE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// ISO-3166 alpha-2 codes recognized in titles. `UK` is accepted and mapped to `GB`.
const COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "UK", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI", "VN",
    "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// Check whether a two-letter code is a recognized country.
pub fn is_country_code(code: &str) -> bool {
    COUNTRY_CODES.contains(&code)
}

/// Canonical form of a recognized country code.
fn canonical_country(code: &str) -> String {
    if code == "UK" {
        "GB".to_string()
    } else {
        code.to_string()
    }
}

/// Title-case a string: the first letter of every run of letters is upper
/// case, the rest lower case. Digits and punctuation break runs, so `2nd`
/// becomes `2Nd`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Collapse every run of non-word characters into a single space and trim.
fn collapse_separators(s: &str) -> String {
    RE_SEPARATOR.replace_all(s, " ").trim().to_string()
}

/// Extract country, year and a clean title from a raw title fragment.
///
/// Only the first two-letter upper-case run is considered as a country. The
/// year is the first `1xxx`/`2xxx` run left after the country is removed;
/// every such run is removed from the title, which may leave it empty.
pub fn format_name(raw: &str) -> ParsedMediaName {
    let mut working = raw.to_string();
    let mut country = None;

    if let Some(m) = RE_COUNTRY.find(raw) {
        let code = m.as_str();
        if is_country_code(code) {
            country = Some(canonical_country(code));
            working = raw.replacen(code, "", 1);
        }
    }

    let year = RE_YEAR.find(&working).map(|m| m.as_str().to_string());

    let title = collapse_separators(&RE_YEAR.replace_all(&working, ""));
    if title.is_empty() {
        tracing::debug!("Nothing left of '{}' after stripping", raw);
    }

    ParsedMediaName {
        title: title_case(&title),
        country,
        year,
    }
}
