//! Unified error codes for the storefront admin
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Customer errors
//! - 6xxx: Catalog errors (60xx products, 61xx brands, 62xx categories, 63xx slugs)
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

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order line item not found
    OrderItemNotFound = 4002,
    /// Generated order number already exists
    OrderNumberTaken = 4003,
    /// Line item quantity is not positive
    InvalidQuantity = 4004,
    /// Monetary amount is malformed or out of range
    InvalidAmount = 4005,
    /// Order status value is not one of the declared statuses
    InvalidStatus = 4006,
    /// Order was modified by someone else since it was read
    StaleVersion = 4007,

    // ==================== 5xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 5001,
    /// Customer email already exists
    CustomerEmailExists = 5002,
    /// Customer has associated orders
    CustomerHasOrders = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price is malformed (more than 6 integer or 2 fraction digits)
    ProductInvalidPrice = 6002,
    /// Product stock quantity outside the 0-100 range
    ProductInvalidStock = 6003,
    /// Product is referenced by order line items
    ProductInOrders = 6004,
    /// Brand not found
    BrandNotFound = 6101,
    /// Brand has associated products
    BrandHasProducts = 6102,
    /// Category not found
    CategoryNotFound = 6201,
    /// Category has associated products
    CategoryHasProducts = 6202,
    /// Derived slug already exists in the target table
    SlugTaken = 6301,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
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

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderNumberTaken => "Order number already exists",
            ErrorCode::InvalidQuantity => "Quantity must be positive",
            ErrorCode::InvalidAmount => "Amount is invalid",
            ErrorCode::InvalidStatus => "Order status is invalid",
            ErrorCode::StaleVersion => "Order was modified concurrently",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerEmailExists => "Customer email already exists",
            ErrorCode::CustomerHasOrders => "Customer has associated orders",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product price is invalid",
            ErrorCode::ProductInvalidStock => "Product quantity must be between 0 and 100",
            ErrorCode::ProductInOrders => "Product is referenced by orders",
            ErrorCode::BrandNotFound => "Brand not found",
            ErrorCode::BrandHasProducts => "Brand has associated products",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryHasProducts => "Category has associated products",
            ErrorCode::SlugTaken => "Slug already exists",

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

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderItemNotFound),
            4003 => Ok(ErrorCode::OrderNumberTaken),
            4004 => Ok(ErrorCode::InvalidQuantity),
            4005 => Ok(ErrorCode::InvalidAmount),
            4006 => Ok(ErrorCode::InvalidStatus),
            4007 => Ok(ErrorCode::StaleVersion),

            // Customer
            5001 => Ok(ErrorCode::CustomerNotFound),
            5002 => Ok(ErrorCode::CustomerEmailExists),
            5003 => Ok(ErrorCode::CustomerHasOrders),

            // Catalog
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductInvalidStock),
            6004 => Ok(ErrorCode::ProductInOrders),
            6101 => Ok(ErrorCode::BrandNotFound),
            6102 => Ok(ErrorCode::BrandHasProducts),
            6201 => Ok(ErrorCode::CategoryNotFound),
            6202 => Ok(ErrorCode::CategoryHasProducts),
            6301 => Ok(ErrorCode::SlugTaken),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::StaleVersion.code(), 4007);
        assert_eq!(ErrorCode::CustomerNotFound.code(), 5001);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::BrandNotFound.code(), 6101);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 6201);
        assert_eq!(ErrorCode::SlugTaken.code(), 6301);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::OrderNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0).unwrap(), ErrorCode::Success);
        assert_eq!(ErrorCode::try_from(4001).unwrap(), ErrorCode::OrderNotFound);
        assert_eq!(ErrorCode::try_from(6301).unwrap(), ErrorCode::SlugTaken);
        assert_eq!(
            ErrorCode::try_from(9002).unwrap(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(42), Err(InvalidErrorCode(42)));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
    }

    #[test]
    fn test_from_error_code_to_u16() {
        let v: u16 = ErrorCode::OrderNumberTaken.into();
        assert_eq!(v, 4003);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("5002").unwrap();
        assert_eq!(code, ErrorCode::CustomerEmailExists);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("1234");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let s = format!("{}", ErrorCode::OrderNotFound);
        assert_eq!(s, "4001 (Order not found)");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::SlugTaken.message(), "Slug already exists");
        assert_eq!(
            ErrorCode::StaleVersion.message(),
            "Order was modified concurrently"
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(1234);
        assert_eq!(format!("{}", err), "invalid error code: 1234");
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderNotFound,
            ErrorCode::OrderItemNotFound,
            ErrorCode::OrderNumberTaken,
            ErrorCode::InvalidQuantity,
            ErrorCode::StaleVersion,
            ErrorCode::CustomerNotFound,
            ErrorCode::ProductNotFound,
            ErrorCode::BrandHasProducts,
            ErrorCode::SlugTaken,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            let v = code.code();
            assert_eq!(ErrorCode::try_from(v).unwrap(), code);
        }
    }
}
