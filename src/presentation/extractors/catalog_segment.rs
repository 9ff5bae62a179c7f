// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

use crate::domain::models::catalog::CatalogKind;

/// 路径中的目录段：`themes` 或 `plugins`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSegment {
    Themes,
    Plugins,
}

impl From<CatalogSegment> for CatalogKind {
    fn from(segment: CatalogSegment) -> Self {
        match segment {
            CatalogSegment::Themes => CatalogKind::Theme,
            CatalogSegment::Plugins => CatalogKind::Plugin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_maps_to_kind() {
        let themes: CatalogSegment = serde_json::from_str("\"themes\"").unwrap();
        let plugins: CatalogSegment = serde_json::from_str("\"plugins\"").unwrap();

        assert_eq!(CatalogKind::from(themes), CatalogKind::Theme);
        assert_eq!(CatalogKind::from(plugins), CatalogKind::Plugin);
        assert!(serde_json::from_str::<CatalogSegment>("\"widgets\"").is_err());
    }
}
