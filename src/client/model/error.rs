/// Failed API call as seen by the pages.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Upstream search or REST API failures (502, 503).
    pub fn is_upstream(&self) -> bool {
        matches!(self.status, 502 | 503)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
