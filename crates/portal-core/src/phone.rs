//! Phone country table and number validity for mobile fields.
//!
//! A mobile field's value is the digit string the user typed, dial code
//! included and without the leading `+` (`919876543210`). Validity is
//! delegated to the `phonenumber` crate; anything it cannot parse is
//! simply invalid.

use serde::{Deserialize, Serialize};

/// Country preselected in every mobile field
pub const DEFAULT_COUNTRY: &str = "in";

/// Values this short are reported invalid without parsing
pub const MIN_VALIDATED_LEN: usize = 3;

/// A selectable dialing country
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Country {
    /// Lowercase ISO 3166-1 alpha-2 code
    pub iso2: &'static str,
    /// Calling code without `+`
    pub dial_code: &'static str,
    pub name: &'static str,
}

/// Country descriptor attached to a mobile field's change notification
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CountryInfo {
    pub country_code: String,
    pub dial_code: String,
    pub name: String,
}

pub static COUNTRIES: &[Country] = &[
    Country { iso2: "ae", dial_code: "971", name: "United Arab Emirates" },
    Country { iso2: "au", dial_code: "61", name: "Australia" },
    Country { iso2: "bd", dial_code: "880", name: "Bangladesh" },
    Country { iso2: "ca", dial_code: "1", name: "Canada" },
    Country { iso2: "de", dial_code: "49", name: "Germany" },
    Country { iso2: "fr", dial_code: "33", name: "France" },
    Country { iso2: "gb", dial_code: "44", name: "United Kingdom" },
    Country { iso2: "in", dial_code: "91", name: "India" },
    Country { iso2: "jp", dial_code: "81", name: "Japan" },
    Country { iso2: "lk", dial_code: "94", name: "Sri Lanka" },
    Country { iso2: "np", dial_code: "977", name: "Nepal" },
    Country { iso2: "qa", dial_code: "974", name: "Qatar" },
    Country { iso2: "sa", dial_code: "966", name: "Saudi Arabia" },
    Country { iso2: "sg", dial_code: "65", name: "Singapore" },
    Country { iso2: "us", dial_code: "1", name: "United States" },
];

impl Country {
    /// Look up by ISO code, case-insensitive
    pub fn find(iso2: &str) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.iso2.eq_ignore_ascii_case(iso2))
    }

    /// The default country. Falls back to the first entry if the table
    /// ever stops listing it.
    pub fn default_country() -> &'static Country {
        Country::find(DEFAULT_COUNTRY).unwrap_or(&COUNTRIES[0])
    }

    pub fn info(&self) -> CountryInfo {
        CountryInfo {
            country_code: self.iso2.to_string(),
            dial_code: self.dial_code.to_string(),
            name: self.name.to_string(),
        }
    }
}

/// Countries matching a search query on name, ISO code or dial code
pub fn search(query: &str) -> Vec<&'static Country> {
    let query = query.trim().trim_start_matches('+').to_lowercase();
    if query.is_empty() {
        return COUNTRIES.iter().collect();
    }
    COUNTRIES
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query)
                || c.iso2 == query
                || c.dial_code.starts_with(&query)
        })
        .collect()
}

/// Keep ASCII digits only
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Pick the country whose dial code is the longest prefix of `digits`.
///
/// The current country wins any tie so typing `1...` in a Canadian field
/// does not flip it to the United States.
pub fn guess_country(digits: &str, current: &'static Country) -> &'static Country {
    if digits.starts_with(current.dial_code) {
        let longer = COUNTRIES.iter().find(|c| {
            c.dial_code.len() > current.dial_code.len() && digits.starts_with(c.dial_code)
        });
        return longer.unwrap_or(current);
    }
    COUNTRIES
        .iter()
        .filter(|c| digits.starts_with(c.dial_code))
        .max_by_key(|c| c.dial_code.len())
        .unwrap_or(current)
}

/// Turn the text of the tel input into a value and its country.
///
/// Text starting with `+` is international and re-guesses the country from
/// its prefix. Anything else is a national number for `current`, so the
/// current dial code is put in front of it.
pub fn read_typed(raw: &str, current: &'static Country) -> (String, &'static Country) {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return (String::new(), current);
    }
    if raw.trim_start().starts_with('+') {
        let country = guess_country(&digits, current);
        return (digits, country);
    }
    (format!("{}{}", current.dial_code, digits), current)
}

/// Rewrite the dial-code prefix when the user picks another country
pub fn switch_country(digits: &str, from: &Country, to: &Country) -> String {
    let national = digits.strip_prefix(from.dial_code).unwrap_or(digits);
    format!("{}{}", to.dial_code, national)
}

/// Whether `value` is a valid number for the country `iso2`.
///
/// Values shorter than [`MIN_VALIDATED_LEN`] are invalid. A value that
/// starts with the country's dial code is parsed as international, anything
/// else as a national number. Parse failures are `false`, never an error.
pub fn is_number_valid(value: &str, iso2: &str) -> bool {
    if value.chars().count() < MIN_VALIDATED_LEN {
        return false;
    }

    let Ok(id) = iso2.to_ascii_uppercase().parse::<phonenumber::country::Id>() else {
        tracing::debug!(country = iso2, "Unknown country for phone validation");
        return false;
    };

    let digits = digits_only(value);
    let text = match Country::find(iso2) {
        Some(country) if digits.starts_with(country.dial_code) => format!("+{}", digits),
        _ => digits,
    };

    match phonenumber::parse(Some(id), &text) {
        Ok(number) => number.is_valid(),
        Err(e) => {
            tracing::debug!(country = iso2, "Unparseable phone number: {}", e);
            false
        }
    }
}
