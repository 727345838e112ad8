//! 商品实体

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 图片 MIME 类型的最大长度，与 `image_mime_type` 列宽一致
pub const MAX_MIME_TYPE_LEN: usize = 50;

/// 商品目录中的一项
///
/// `product_id` 为 0 表示尚未入库，保存时由仓储分配标识。
/// 图片字节不参与 JSON 序列化，只能通过图片接口读写。
/// 文本字段的长度上限与 `products` 表的列宽一致。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    #[serde(default)]
    pub product_id: i32,

    #[validate(
        custom(function = "not_blank", message = "请输入商品名称"),
        length(max = 100, message = "商品名称不能超过100个字符")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "请输入商品描述"),
        length(max = 500, message = "商品描述不能超过500个字符")
    )]
    #[serde(default)]
    pub description: String,

    #[validate(
        custom(function = "not_blank", message = "请指定商品分类"),
        length(max = 50, message = "商品分类不能超过50个字符")
    )]
    pub category: String,

    #[validate(custom(function = "positive_price", message = "请输入正数价格"))]
    pub price: Decimal,

    #[serde(skip)]
    pub image_data: Option<Vec<u8>>,

    #[validate(length(max = 50, message = "图片类型不能超过50个字符"))]
    #[serde(default)]
    pub image_mime_type: Option<String>,
}

impl Product {
    pub fn new(product_id: i32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            product_id,
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn with_image(mut self, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        self.image_data = Some(data);
        self.image_mime_type = Some(mime_type.into());
        self
    }

    /// 尚未入库的新商品
    pub fn is_new(&self) -> bool {
        self.product_id == 0
    }
}

/// 上传的商品图片
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl ImageUpload {
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
        }
    }

    /// 将图片写入商品，覆盖原有图片
    pub fn apply_to(self, product: &mut Product) {
        product.image_mime_type = Some(self.content_type);
        product.image_data = Some(self.data);
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("range"));
    }
    Ok(())
}
