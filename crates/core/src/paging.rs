#![forbid(unsafe_code)]

pub const DEFAULT_QUESTION_PAGE_SIZE: usize = 20;
pub const DEFAULT_ANSWER_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageError {
    NonPositivePageSize(i64),
}

impl PageError {
    pub fn message(&self) -> String {
        match self {
            Self::NonPositivePageSize(value) => {
                format!("pageSize must be a positive integer (got {value})")
            }
        }
    }
}

impl PageRequest {
    /// Builds a request from raw client values. A page below 1 is clamped to
    /// the first page; the page size must be positive and is capped at
    /// [`MAX_PAGE_SIZE`].
    pub fn try_new(
        page: Option<i64>,
        page_size: Option<i64>,
        default_page_size: usize,
    ) -> Result<Self, PageError> {
        let page = page.unwrap_or(1).max(1);
        let page = usize::try_from(page).unwrap_or(usize::MAX);

        let page_size = match page_size {
            None => default_page_size,
            Some(value) if value <= 0 => return Err(PageError::NonPositivePageSize(value)),
            Some(value) => usize::try_from(value).unwrap_or(MAX_PAGE_SIZE),
        };

        Ok(Self {
            page,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn skip(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn has_next(&self, total: usize, returned: usize) -> bool {
        total > self.skip().saturating_add(returned)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next: bool,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn new(request: &PageRequest, items: Vec<T>, total: usize) -> Self {
        let has_next = request.has_next(total, items.len());
        Self {
            items,
            has_next,
            total,
        }
    }
}
