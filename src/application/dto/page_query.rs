// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::pagination::{PageRequest, DEFAULT_PER_PAGE};

/// 列表分页查询参数
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct PageQueryDto {
    /// 页码，从 1 开始
    #[validate(range(min = 1))]
    pub page: Option<u64>,

    /// 每页条数
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u64>,
}

impl PageQueryDto {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PageQueryDto::default();
        assert!(query.validate().is_ok());
        assert_eq!(query.to_page_request(), PageRequest::new(1, DEFAULT_PER_PAGE));
    }

    #[test]
    fn test_rejects_zero_page() {
        let query = PageQueryDto {
            page: Some(0),
            per_page: None,
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_rejects_per_page_out_of_range() {
        let too_small = PageQueryDto {
            page: None,
            per_page: Some(0),
        };
        let too_large = PageQueryDto {
            page: None,
            per_page: Some(101),
        };
        assert!(too_small.validate().is_err());
        assert!(too_large.validate().is_err());
    }
}
