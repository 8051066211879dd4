//! Form-input validation rules
//!
//! Each [`ValidationKind`] pairs a compiled pattern with the extra checks
//! the pattern alone cannot express (length counted in characters,
//! required character classes, whitespace placement). Always validate
//! through [`ValidationKind::is_match`]; the raw pattern is exposed for
//! hosts that need to mirror a rule elsewhere.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Special characters accepted in address fields, for error messages
pub const ADDRESS_PERMITTED_SPECIAL_CHARACTERS: &str = ". , ' : ; ( ) ° @ # / -";

const INVESTOR_PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()+-=[]{};':\"|,.<>?_~";

lazy_static! {
    static ref ADDRESS_REGEX: Regex =
        Regex::new(r"^[\p{L}\p{Nd}\s'’.,:;()°@#/-]{0,70}$").unwrap();
    static ref ADDRESS_CITY_REGEX: Regex = Regex::new(r"^\p{L}[\p{L}\s'.-]{0,49}$").unwrap();
    static ref BARRIER_REGEX: Regex = Regex::new(r"^[+-]?[0-9]+\.?[0-9]*$").unwrap();
    static ref DECIMAL_REGEX: Regex = Regex::new(r"^[0-9]*(\.[0-9]+)?$").unwrap();
    static ref INTEGER_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref POSTAL_OFFICE_BOX_REGEX: Regex = Regex::new(r"(?i)p[.\s]+o[.\s]+box").unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,63}$").unwrap();
    static ref PASSWORD_REGEX: Regex = Regex::new(r"^[!-~]{8,25}$").unwrap();
    static ref AFFILIATE_PASSWORD_REGEX: Regex = Regex::new(r"^[ -~]{6,50}$").unwrap();
    static ref PAYMENT_AGENT_EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{1,255}$").unwrap();
    static ref POSTAL_CODE_REGEX: Regex =
        Regex::new(r"^([A-Za-z0-9][A-Za-z0-9\s-]{0,20})?$").unwrap();
    static ref TAX_IDENTIFICATION_NUMBER_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9./\s-]{0,25}$").unwrap();
    static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\+((-|\s)*[0-9]){8,35}$").unwrap();
    static ref FILE_TYPE_REGEX: Regex =
        Regex::new(r"(image|application)/(jpe?g|pdf|png)$").unwrap();
    static ref FORMATTED_CARD_NUMBER_REGEX: Regex =
        Regex::new(r"^([0-9]{4})\s([0-9]{2}X{2})\s(X{4})\s([0-9]{4})$").unwrap();
    static ref INVALID_CARD_NUMBER_CHARACTERS_REGEX: Regex = Regex::new(r"[^0-9X\s]").unwrap();
    static ref INVESTOR_PASSWORD_REGEX: Regex = Regex::new(r"^[ -~]{8,16}$").unwrap();
    static ref LETTER_SYMBOLS_REGEX: Regex =
        Regex::new(r"^[A-Za-z]+([a-zA-Z.' -])*[a-zA-Z.' -]+$").unwrap();
    static ref NAME_REGEX: Regex = Regex::new(r"^[\p{L}\s'.-]{2,50}$").unwrap();
    static ref GENERAL_REGEX: Regex =
        Regex::new(r#"[`~!@#$%^&*)(_=+\[}{\]\\/";:?><|]+"#).unwrap();
}

fn has_character_mix(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_digit())
        && input.chars().any(|c| c.is_ascii_uppercase())
}

fn has_doubled_whitespace(input: &str) -> bool {
    input
        .chars()
        .zip(input.chars().skip(1))
        .any(|(a, b)| a.is_whitespace() && b.is_whitespace())
}

/// A validation rule for one kind of form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationKind {
    Address,
    AddressCity,
    Barrier,
    Decimal,
    Integer,
    PostalOfficeBoxNumber,
    Email,
    Password,
    AffiliatePassword,
    PaymentAgentEmail,
    PostalCode,
    TaxIdentificationNumber,
    PhoneNumber,
    FileType,
    FormattedCardNumber,
    InvalidFormattedCardNumberCharacters,
    TradingPlatformInvestorPassword,
    LetterSymbols,
    Name,
    General,
}

impl ValidationKind {
    /// The structural pattern for this rule.
    ///
    /// Necessary but not always sufficient: [`is_match`](Self::is_match)
    /// layers the remaining checks on top.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            ValidationKind::Address => &ADDRESS_REGEX,
            ValidationKind::AddressCity => &ADDRESS_CITY_REGEX,
            ValidationKind::Barrier => &BARRIER_REGEX,
            ValidationKind::Decimal => &DECIMAL_REGEX,
            ValidationKind::Integer => &INTEGER_REGEX,
            ValidationKind::PostalOfficeBoxNumber => &POSTAL_OFFICE_BOX_REGEX,
            ValidationKind::Email => &EMAIL_REGEX,
            ValidationKind::Password => &PASSWORD_REGEX,
            ValidationKind::AffiliatePassword => &AFFILIATE_PASSWORD_REGEX,
            ValidationKind::PaymentAgentEmail => &PAYMENT_AGENT_EMAIL_REGEX,
            ValidationKind::PostalCode => &POSTAL_CODE_REGEX,
            ValidationKind::TaxIdentificationNumber => &TAX_IDENTIFICATION_NUMBER_REGEX,
            ValidationKind::PhoneNumber => &PHONE_NUMBER_REGEX,
            ValidationKind::FileType => &FILE_TYPE_REGEX,
            ValidationKind::FormattedCardNumber => &FORMATTED_CARD_NUMBER_REGEX,
            ValidationKind::InvalidFormattedCardNumberCharacters => {
                &INVALID_CARD_NUMBER_CHARACTERS_REGEX
            }
            ValidationKind::TradingPlatformInvestorPassword => &INVESTOR_PASSWORD_REGEX,
            ValidationKind::LetterSymbols => &LETTER_SYMBOLS_REGEX,
            ValidationKind::Name => &NAME_REGEX,
            ValidationKind::General => &GENERAL_REGEX,
        }
    }

    /// Human-readable statement of the rule, for error messages.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationKind::Address => {
                "Up to 70 letters, digits, spaces, or permitted address punctuation"
            }
            ValidationKind::AddressCity => {
                "A letter followed by up to 49 letters, spaces, apostrophes, periods, or hyphens"
            }
            ValidationKind::Barrier => "A signed integer or decimal of at most 20 characters",
            ValidationKind::Decimal => "Digits with an optional decimal part",
            ValidationKind::Integer => "Digits only",
            ValidationKind::PostalOfficeBoxNumber => "Contains a P.O. box marker in any casing",
            ValidationKind::Email => "An email address with a 2-63 letter domain suffix",
            ValidationKind::Password => {
                "8-25 printable non-space characters with a lowercase letter, an uppercase letter, and a digit"
            }
            ValidationKind::AffiliatePassword => {
                "6-50 printable characters with a lowercase letter, an uppercase letter, and a digit"
            }
            ValidationKind::PaymentAgentEmail => {
                "An email address with a 1-255 letter domain suffix"
            }
            ValidationKind::PostalCode => {
                "Empty, or alphanumeric with inner spaces or hyphens, at most 21 characters"
            }
            ValidationKind::TaxIdentificationNumber => {
                "Up to 25 alphanumerics, periods, slashes, spaces, or hyphens, not starting with whitespace"
            }
            ValidationKind::PhoneNumber => {
                "A plus sign followed by 8-35 digits, optionally separated by spaces or hyphens"
            }
            ValidationKind::FileType => "A jpeg, jpg, pdf, or png media type",
            ValidationKind::FormattedCardNumber => "A masked card number like 1234 56XX XXXX 1121",
            ValidationKind::InvalidFormattedCardNumberCharacters => {
                "Contains a character other than digits, X, or spaces"
            }
            ValidationKind::TradingPlatformInvestorPassword => {
                "8-16 printable characters with a lowercase letter, an uppercase letter, a digit, and a special character"
            }
            ValidationKind::LetterSymbols => {
                "Letters optionally separated by periods, apostrophes, spaces, or hyphens"
            }
            ValidationKind::Name => {
                "2-50 letters, spaces, apostrophes, periods, or hyphens, without consecutive whitespace"
            }
            ValidationKind::General => "Contains a special character",
        }
    }

    /// Validate `input` against this rule.
    pub fn is_match(&self, input: &str) -> bool {
        if !self.pattern().is_match(input) {
            return false;
        }

        match self {
            ValidationKind::Barrier => (1..=20).contains(&input.chars().count()),
            ValidationKind::Password | ValidationKind::AffiliatePassword => {
                has_character_mix(input)
            }
            ValidationKind::TradingPlatformInvestorPassword => {
                has_character_mix(input)
                    && input
                        .chars()
                        .any(|c| INVESTOR_PASSWORD_SPECIAL_CHARACTERS.contains(c))
            }
            ValidationKind::TaxIdentificationNumber => {
                !input.is_empty() && !input.starts_with(|c: char| c.is_whitespace())
            }
            ValidationKind::Name => !has_doubled_whitespace(input),
            _ => true,
        }
    }
}
