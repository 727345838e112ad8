//! 商品目录控制器测试

mod common;

use sports_store::app::catalog::ProductController;
use sports_store::domain::Product;

use common::{three_products, MockProductRepository};

fn controller(products: Vec<Product>, page_size: usize) -> ProductController {
    let (_, repository) = MockProductRepository::with_products(products).into_shared();
    ProductController::new(repository, page_size)
}

fn five_products() -> Vec<Product> {
    vec![
        Product::new(1, "P1", "Apples"),
        Product::new(2, "P2", "Oranges"),
        Product::new(3, "P3", "Apples"),
        Product::new(4, "P4", "Oranges"),
        Product::new(5, "P5", "Apples"),
    ]
}

#[tokio::test]
async fn test_can_retrieve_image_data() {
    let prod = Product::new(2, "Test", "Cat1").with_image(Vec::new(), "image/png");
    let target = controller(
        vec![Product::new(1, "P1", "Cat1"), prod.clone(), Product::new(3, "P3", "Cat1")],
        4,
    );

    let result = target.get_image(2).await.unwrap();

    let file = result.expect("image should be returned");
    assert_eq!(Some(file.content_type), prod.image_mime_type);
    assert!(file.contents.is_empty());
}

#[tokio::test]
async fn test_image_bytes_are_returned_unchanged() {
    let bytes = vec![0xff, 0xd8, 0xff, 0xe0, 0x00];
    let target = controller(
        vec![Product::new(7, "Photo", "Cat1").with_image(bytes.clone(), "image/jpeg")],
        4,
    );

    let file = target.get_image(7).await.unwrap().unwrap();

    assert_eq!(file.contents, bytes);
    assert_eq!(file.content_type, "image/jpeg");
}

#[tokio::test]
async fn test_cannot_retrieve_image_data_for_invalid_id() {
    let target = controller(
        vec![Product::new(1, "P1", "Cat1"), Product::new(2, "P2", "Cat1")],
        4,
    );

    let result = target.get_image(100).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_product_without_image_has_no_file() {
    let target = controller(three_products(), 4);

    assert!(target.get_image(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_mime_type_falls_back_to_octet_stream() {
    let mut product = Product::new(1, "P1", "Cat1");
    product.image_data = Some(vec![1, 2, 3]);
    let target = controller(vec![product], 4);

    let file = target.get_image(1).await.unwrap().unwrap();

    assert_eq!(file.content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_can_paginate() {
    let target = controller(five_products(), 3);

    let model = target.list(None, 2).await.unwrap().model;

    let names: Vec<_> = model.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["P4", "P5"]);
}

#[tokio::test]
async fn test_can_send_pagination_view_model() {
    let target = controller(five_products(), 3);

    let paging = target.list(None, 2).await.unwrap().model.paging_info;

    assert_eq!(paging.current_page, 2);
    assert_eq!(paging.items_per_page, 3);
    assert_eq!(paging.total_items, 5);
    assert_eq!(paging.total_pages(), 2);
}

#[tokio::test]
async fn test_can_filter_products() {
    let target = controller(five_products(), 3);

    let model = target.list(Some("Oranges"), 1).await.unwrap().model;

    let names: Vec<_> = model.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["P2", "P4"]);
    assert_eq!(model.current_category.as_deref(), Some("Oranges"));
}

#[tokio::test]
async fn test_category_specific_product_count() {
    let target = controller(five_products(), 3);

    let apples = target.list(Some("Apples"), 1).await.unwrap().model;
    let oranges = target.list(Some("Oranges"), 1).await.unwrap().model;
    let all = target.list(None, 1).await.unwrap().model;
    let unknown = target.list(Some("Pears"), 1).await.unwrap().model;

    assert_eq!(apples.paging_info.total_items, 3);
    assert_eq!(oranges.paging_info.total_items, 2);
    assert_eq!(all.paging_info.total_items, 5);
    assert_eq!(unknown.paging_info.total_items, 0);
    assert!(unknown.products.is_empty());
}

#[tokio::test]
async fn test_list_orders_by_id_and_clamps_page() {
    let target = controller(
        vec![
            Product::new(3, "P3", "Cat1"),
            Product::new(1, "P1", "Cat1"),
            Product::new(2, "P2", "Cat1"),
        ],
        2,
    );

    let model = target.list(None, 0).await.unwrap().model;

    let ids: Vec<_> = model.products.iter().map(|p| p.product_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(model.paging_info.current_page, 1);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let target = controller(five_products(), 3);

    let model = target.list(None, 9).await.unwrap().model;

    assert!(model.products.is_empty());
    assert_eq!(model.paging_info.total_pages(), 2);
}

#[tokio::test]
async fn test_can_create_categories() {
    let target = controller(
        vec![
            Product::new(1, "P1", "Apples"),
            Product::new(2, "P2", "Apples"),
            Product::new(3, "P3", "Plums"),
            Product::new(4, "P4", "Oranges"),
        ],
        4,
    );

    let view = target.categories().await.unwrap();

    assert_eq!(view.view_name, "Menu");
    assert_eq!(view.model, vec!["Apples", "Oranges", "Plums"]);
}
