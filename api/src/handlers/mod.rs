pub mod error;

pub use error::{
    handle_domain_error_with_lang, handle_validation_errors,
    localize_domain_error, ApiError, Localize,
};
