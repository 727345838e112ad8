//! 商品目录视图模型

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::domain::Product;

/// 分页信息
#[derive(Debug, Clone, PartialEq)]
pub struct PagingInfo {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PagingInfo {
    pub fn total_pages(&self) -> usize {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.items_per_page)
    }
}

// 序列化时附带总页数，供视图直接使用
impl Serialize for PagingInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PagingInfo", 4)?;
        state.serialize_field("current_page", &self.current_page)?;
        state.serialize_field("items_per_page", &self.items_per_page)?;
        state.serialize_field("total_items", &self.total_items)?;
        state.serialize_field("total_pages", &self.total_pages())?;
        state.end()
    }
}

/// 商品列表页
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsListViewModel {
    pub products: Vec<Product>,
    pub paging_info: PagingInfo,
    pub current_category: Option<String>,
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}
