use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Allowed page sizes of every list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred];

    pub const fn value(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.value()
    }
}

impl TryFrom<u32> for PageSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("unsupported page size: {}", value))
    }
}

/// Envelope of every list endpoint: `{ "results": [...], "count": 42 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Paged(ListResponse<T>),
    Bare(Vec<T>),
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Some endpoints skip the envelope and return a bare array
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        Ok(match serde_json::from_str::<ListPayload<T>>(text)? {
            ListPayload::Paged(page) => page,
            ListPayload::Bare(results) => Self {
                results,
                count: None,
            },
        })
    }
}

/// Pagination of one list view. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: u32,
    pub limit: PageSize,
    pub total: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageSize::default(),
            total: 0,
        }
    }
}

impl PaginationState {
    /// Builds the state from a fetched page. Without `count` the total is
    /// inferred from what is known so far.
    pub fn from_page(page: u32, limit: PageSize, count: Option<u64>, rows_on_page: usize) -> Self {
        let page = page.max(1);
        let total = count.unwrap_or_else(|| {
            (page as u64 - 1) * limit.value() as u64 + rows_on_page as u64
        });
        Self { page, limit, total }
    }

    pub fn total_pages(&self) -> u32 {
        let limit = self.limit.value() as u64;
        (self.total.div_ceil(limit)).max(1) as u32
    }

    pub fn offset(&self) -> u64 {
        (self.page.max(1) as u64 - 1) * self.limit.value() as u64
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_values() {
        assert_eq!(PageSize::from_value(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_value(30), None);
        assert_eq!(serde_json::to_string(&PageSize::Twenty).unwrap(), "20");
        assert!(serde_json::from_str::<PageSize>("25").is_err());
    }

    #[test]
    fn test_list_envelope_and_bare_array() {
        let paged: ListResponse<u8> = ListResponse::from_json(r#"{"results":[1,2],"count":12}"#).unwrap();
        assert_eq!(paged.results, vec![1, 2]);
        assert_eq!(paged.count, Some(12));

        let bare: ListResponse<u8> = ListResponse::from_json("[1,2,3]").unwrap();
        assert_eq!(bare.results.len(), 3);
        assert_eq!(bare.count, None);
    }

    #[test]
    fn test_total_pages() {
        let state = PaginationState::from_page(1, PageSize::Twenty, Some(41), 20);
        assert_eq!(state.total_pages(), 3);
        assert!(state.has_next());
        assert!(!state.has_prev());

        let empty = PaginationState::from_page(1, PageSize::Ten, Some(0), 0);
        assert_eq!(empty.total_pages(), 1);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_total_inferred_without_count() {
        let state = PaginationState::from_page(3, PageSize::Ten, None, 4);
        assert_eq!(state.total, 24);
        assert_eq!(state.offset(), 20);
    }
}
