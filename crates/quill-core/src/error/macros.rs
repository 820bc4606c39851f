//! Error macros for quill

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::QuillError::invalid_value($context, $value))
    };
}

/// Macro for creating form validation errors
#[macro_export]
macro_rules! bail_form {
    ($field:expr, $reason:expr) => {
        return Err($crate::error::QuillError::invalid_form($field, $reason))
    };
}

/// Macro for mapping database errors
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::QuillError::db_operation($op, $error)
    };
}
