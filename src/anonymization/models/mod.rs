//! Data models shared by recognizers, the analyzer and the anonymizer

pub mod output;
pub mod recognizer_result;
pub mod token;

pub use output::{AnonymizeResult, EntityRecord, OutputMode};
pub use recognizer_result::RecognizerResult;
pub use token::{NlpArtifacts, Token};

/// Entity type labels produced by the built-in and custom recognizers
pub mod entities {
    /// Person names
    pub const PERSON: &str = "PERSON";
    /// Telephone numbers
    pub const PHONE_NUMBER: &str = "PHONE_NUMBER";
    /// Norwegian national identity numbers (fødselsnummer)
    pub const NORWEGIAN_ID: &str = "NORWEGIAN_ID";
    /// Email addresses
    pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
    /// Web addresses and bare domain names
    pub const URL: &str = "URL";
    /// Payment card numbers
    pub const CREDIT_CARD: &str = "CREDIT_CARD";
    /// IPv4 and IPv6 addresses
    pub const IP_ADDRESS: &str = "IP_ADDRESS";
    /// International bank account numbers
    pub const IBAN_CODE: &str = "IBAN_CODE";
}
