//! Descriptions for the HTTP error statuses the trading API documents

/// Friendly description for a documented error status
///
/// Unlisted codes return `None`; callers still treat them as failures.
pub fn http_status_description(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("Bad Request - Incorrect parameters."),
        401 => Some("Unauthorized - Wrong Token."),
        404 => Some("Not Found - The specified endpoint could not be found."),
        405 => Some("Method Not Allowed - You tried to access an endpoint with an invalid method."),
        406 => Some("Not Acceptable - Incorrect request format."),
        429 => Some("Too Many Requests - Rate limited, pause requests."),
        500 => Some("Internal Server Error - We had a problem with our server. Try again later."),
        503 => Some("Service unavailable"),
        _ => None,
    }
}

/// 4xx and 5xx statuses
pub fn is_error_status(status: u16) -> bool {
    (400..600).contains(&status)
}
