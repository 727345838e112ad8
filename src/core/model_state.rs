//! 表单模型状态

use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// 提交模型的字段校验错误集合，为空时视为有效
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 `validator` 的校验结果构造
    pub fn from_validation(result: Result<(), ValidationErrors>) -> Self {
        let mut state = Self::new();
        if let Err(err) = result {
            for (field, errors) in err.field_errors() {
                for error in errors.iter() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    state.add_model_error(field.to_string(), message);
                }
            }
        }
        state
    }

    pub fn add_model_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use validator::Validate;

    #[test]
    fn test_empty_state_is_valid() {
        assert!(ModelState::new().is_valid());
        assert!(ModelState::from_validation(Ok(())).is_valid());
    }

    #[test]
    fn test_added_error_invalidates_state() {
        let mut state = ModelState::new();
        state.add_model_error("error", "error");
        state.add_model_error("error", "again");

        assert!(!state.is_valid());
        assert_eq!(state.errors()["error"], vec!["error", "again"]);
    }

    #[test]
    fn test_collects_validator_messages() {
        let product = Product::new(0, "", "Chess").with_description("Board");
        let state = ModelState::from_validation(product.validate());

        assert!(!state.is_valid());
        assert_eq!(state.errors()["name"], vec!["请输入商品名称"]);
        assert_eq!(state.errors()["price"], vec!["请输入正数价格"]);
        assert!(!state.errors().contains_key("category"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut state = ModelState::new();
        state.add_model_error("price", "请输入正数价格");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "price": ["请输入正数价格"] }));
    }
}
