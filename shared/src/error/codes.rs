//! Unified error codes for the OneReward platform
//!
//! This module defines all error codes used across the reward server and the
//! dashboard frontends. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Account errors
//! - 2xxx: Restaurant errors
//! - 3xxx: Offer errors
//! - 4xxx: Ledger errors
//! - 5xxx: Content errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Account ====================
    /// User not found
    UserNotFound = 1001,
    /// Email already registered
    EmailAlreadyRegistered = 1002,
    /// Phone number is invalid
    PhoneInvalid = 1003,
    /// Passwords do not match
    PasswordMismatch = 1004,
    /// QR content did not match any account
    QrNotRecognized = 1005,

    // ==================== 2xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 2001,
    /// Restaurant email already exists
    RestaurantEmailExists = 2002,
    /// Restaurant is inactive
    RestaurantInactive = 2003,

    // ==================== 3xxx: Offer ====================
    /// Offer not found
    OfferNotFound = 3001,
    /// Offer has expired
    OfferExpired = 3002,

    // ==================== 4xxx: Ledger ====================
    /// Not enough points to redeem
    InsufficientPoints = 4001,
    /// Invalid transaction type
    InvalidTransactionType = 4002,
    /// Point amount must be positive
    AmountNotPositive = 4003,

    // ==================== 5xxx: Content ====================
    /// Slider not found
    SliderNotFound = 5001,
    /// Invalid slider type
    InvalidSliderType = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Account
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::EmailAlreadyRegistered => "User already exists with this email",
            ErrorCode::PhoneInvalid => "Please enter a valid phone number",
            ErrorCode::PasswordMismatch => "Passwords don't match",
            ErrorCode::QrNotRecognized => "Customer not found",

            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::RestaurantEmailExists => "Restaurant with this email already exists",
            ErrorCode::RestaurantInactive => "Restaurant is inactive",

            // Offer
            ErrorCode::OfferNotFound => "Offer not found",
            ErrorCode::OfferExpired => "Offer has expired",

            // Ledger
            ErrorCode::InsufficientPoints => "Not enough points to redeem",
            ErrorCode::InvalidTransactionType => "Invalid transaction type",
            ErrorCode::AmountNotPositive => "Points must be a positive amount",

            // Content
            ErrorCode::SliderNotFound => "Slider not found",
            ErrorCode::InvalidSliderType => "Invalid slider type",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Account
            1001 => Ok(ErrorCode::UserNotFound),
            1002 => Ok(ErrorCode::EmailAlreadyRegistered),
            1003 => Ok(ErrorCode::PhoneInvalid),
            1004 => Ok(ErrorCode::PasswordMismatch),
            1005 => Ok(ErrorCode::QrNotRecognized),

            // Restaurant
            2001 => Ok(ErrorCode::RestaurantNotFound),
            2002 => Ok(ErrorCode::RestaurantEmailExists),
            2003 => Ok(ErrorCode::RestaurantInactive),

            // Offer
            3001 => Ok(ErrorCode::OfferNotFound),
            3002 => Ok(ErrorCode::OfferExpired),

            // Ledger
            4001 => Ok(ErrorCode::InsufficientPoints),
            4002 => Ok(ErrorCode::InvalidTransactionType),
            4003 => Ok(ErrorCode::AmountNotPositive),

            // Content
            5001 => Ok(ErrorCode::SliderNotFound),
            5002 => Ok(ErrorCode::InvalidSliderType),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
