pub mod admin_helpers;
pub mod api_error;
pub mod public_helpers;
pub mod sanitization_helpers;
pub mod validation_helpers;
