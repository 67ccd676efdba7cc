use serde::{Deserialize, Serialize};

/// Réponse paginée standard : `{items, total, totalPages, currentPage}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    #[serde(rename = "currentPage")]
    pub current_page: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self {
            items,
            total,
            total_pages,
            current_page: page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_arrondi_au_superieur() {
        let p: Paginated<i32> = Paginated::new(vec![], 21, 1, 10);
        assert_eq!(p.total_pages, 3);
        let p: Paginated<i32> = Paginated::new(vec![], 20, 1, 10);
        assert_eq!(p.total_pages, 2);
        let p: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
        assert_eq!(p.total_pages, 0);
    }
}
