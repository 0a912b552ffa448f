use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Body returned with every 404 and 5xx response.
#[derive(Serialize, Debug, Clone)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self { Self { detail: detail.into() } }

    pub fn not_found() -> Self { Self::new("Not found.") }
}
