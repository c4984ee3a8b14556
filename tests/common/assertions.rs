//! Custom assertion macros

/// Assert a response is a 307 redirect to the given location
#[macro_export]
macro_rules! assert_redirect {
    ($response:expr, $location:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status(),
            axum::http::StatusCode::TEMPORARY_REDIRECT,
            "expected redirect to {}",
            $location
        );
        assert_eq!($crate::common::location(response), Some($location));
    }};
}

/// Assert a JSON envelope is a failure with the given message
#[macro_export]
macro_rules! assert_failure {
    ($body:expr, $message:expr) => {{
        let body = &$body;
        assert_eq!(body["success"], serde_json::Value::Bool(false), "body: {}", body);
        assert_eq!(body["message"], $message, "body: {}", body);
    }};
}
