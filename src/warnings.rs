//! Catalog of syntax warning codes reported by the address checks.
//!
//! Syntax checks report `synmNNN` codes; the extended mailbox pattern checks of
//! individual mail providers report `extmNNN` codes. Both share one namespace.

use crate::types::*;
use phf::phf_ordered_map;

/// Top-level key under which the API lists warning codes
pub const SYNTAX_WARNINGS_KEY: &str = "syntaxWarnings";

static WARNING_MESSAGES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "synm001" => "No '@' found",
    "synm002" => "No local part (mailbox name) found",
    "synm003" => "No domain name found",
    "synm004" => "Local part contains non-ASCII characters",
    "synm005" => "Domain name contains non-ASCII characters",
    "synm006" => "Invalid address format",
    "synm007" => "Invalid mailbox name",
    "synm008" => "Invalid domain name",
    "synm009" => "Invalid top level domain (TLD)",
    "synm010" => "Invalid IP address format",
    "synm011" => "More than one '@' found",
    "synm012" => "The top level domain (TLD) can only contain letters and must have a minimum length of two",
    "synm013" => "The local part can't be longer than 64 characters",
    "synm014" => "The domain name can't be longer than 254 characters",
    "synm015" => "The e-mail address can't be longer than 254 characters",
    "synm016" => "Invalid domain name (IRI) according to RFC 3490",
    "synm017" => "The domain name contained Unicode characters and was decoded",
    "synm018" => "The local part contained Unicode characters and was decoded",

    "extm001" => "The mailbox length must be between 3-32 characters",
    "extm002" => "Only letters (a-z) and digits (0-9) are allowed",
    "extm003" => "The first character must be a letter",
    "extm004" => "Only letters, digits and punctuation characters dot, hyphen and underscore are allowed",
    "extm005" => "Multiple occurences of punctuation characters dot, hyphen and underscore are not allowed",
    "extm006" => "The punctuation characters dot, hyphen and underscore are not allowed at the beginning or end",
    "extm007" => "Dots are not allowd at the end",
    "extm008" => "The mailbox length must be between 3-50 characters",
    "extm009" => "The mailbox length must be between 5-40 characters",
    "extm010" => "The mailbox length must be between 5-30 characters",
    "extm011" => "The mailbox length must be between 4-32 characters",
    "extm012" => "Only letters, digits and punctuation characters dot and underscore are allowed",
    "extm013" => "Only one dot is allowed",
    "extm014" => "The mailbox length must be between 2-50 characters",
    "extm015" => "The mailbox length must be between 3-40 characters",
    "extm016" => "Mutiple occurences of dots are not allowed",
    "extm017" => "The mailbox length must be between 2-30 characters",
    "extm018" => "Only letters, digits and punctuation characters dot, hyphen, underscore, plus, minus, slash and ampersand are allowed",
    "extm019" => "The mailbox length must be between 6-30 characters",
    "extm020" => "Only letters, digits and the punctuation character dot are allowed",
    "extm021" => "The mailbox length must be between 3-20 characters",
    "extm022" => "The mailbox length must be between 1-64 characters",
    "extm023" => "The mailbox length must be between 6-20 characters",
    "extm024" => "The mailbox length must be larger than 2",
    "extm025" => "The mailbox length must be between 2-31 characters",
    "extm026" => "The first character must be either a letter or a digit",
    "extm027" => "Only letters and dits are allowed at the beginning or end",
    "extm028" => "Multiple occurences of underscores are not allowed",
    "extm029" => "Dots are not allowed at the beginning or end",
    "extm030" => "The first chracter must be either a letter or a digit",
};

/// Which family of checks a warning code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningFamily {
    /// `synmNNN`: generic RFC syntax check
    Syntax,
    /// `extmNNN`: provider-specific mailbox pattern check
    Extended,
}

impl WarningFamily {
    pub fn of(code: &str) -> Option<Self> {
        if code.starts_with("synm") {
            Some(WarningFamily::Syntax)
        } else if code.starts_with("extm") {
            Some(WarningFamily::Extended)
        } else {
            None
        }
    }
}

/// Read-only lookup over the warning catalog
pub struct WarningTable;

impl WarningTable {
    /// Message for a warning code. Unknown codes are an error, never a default message.
    pub fn lookup(code: &str) -> AddressCheckResult<&'static str> {
        WARNING_MESSAGES
            .get(code)
            .copied()
            .ok_or_else(|| AddressCheckError::unknown_warning_code(code))
    }

    pub fn contains(code: &str) -> bool {
        WARNING_MESSAGES.contains_key(code)
    }

    pub fn len() -> usize {
        WARNING_MESSAGES.len()
    }

    /// All `(code, message)` pairs in catalog order
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        WARNING_MESSAGES.entries().map(|(code, message)| (*code, *message))
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        WARNING_MESSAGES.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(WarningTable::len(), 48);
        assert_eq!(WarningTable::codes().filter(|c| c.starts_with("synm")).count(), 18);
        assert_eq!(WarningTable::codes().filter(|c| c.starts_with("extm")).count(), 30);
    }

    #[test]
    fn test_catalog_order() {
        let codes: Vec<_> = WarningTable::codes().collect();
        assert_eq!(codes.first(), Some(&"synm001"));
        assert_eq!(codes[18], "extm001");
        assert_eq!(codes.last(), Some(&"extm030"));
    }

    #[test]
    fn test_family() {
        assert_eq!(WarningFamily::of("synm004"), Some(WarningFamily::Syntax));
        assert_eq!(WarningFamily::of("extm004"), Some(WarningFamily::Extended));
        assert_eq!(WarningFamily::of("warn001"), None);
    }
}
