use serde::Serialize;

/// Related collections requested alongside a details record.
pub const DETAILS_APPEND: &str = "videos,credits,similar,recommendations";

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct BaseQuery<'a> {
    pub api_key: &'a str,
    pub language: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct PageQuery {
    pub page: u32,
}

impl PageQuery {
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct DetailsQuery<'a> {
    pub append_to_response: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct SearchQuery<'a> {
    pub query: &'a str,
    pub page: u32,
}

/// Placeholder for endpoints without resource-specific parameters.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct NoQuery {}
