mod common;

use catalog_cart_api::{
    dto::{
        cart::{AddToCartRequest, UpdateCartRequest},
        params::UserQuery,
    },
    error::AppError,
    models::UpdateCounts,
    services::cart_service,
    store::CatalogStore,
};
use uuid::Uuid;

fn add(user_id: Uuid, product_id: Uuid, quantity: i32) -> AddToCartRequest {
    AddToCartRequest {
        user_id: Some(user_id.to_string()),
        product_id: Some(product_id.to_string()),
        quantity: Some(quantity),
    }
}

fn update(user_id: Uuid, product_id: Uuid, quantity: i32) -> UpdateCartRequest {
    UpdateCartRequest {
        user_id: Some(user_id.to_string()),
        product_id: Some(product_id.to_string()),
        quantity: Some(quantity),
    }
}

fn query(user_id: Uuid) -> UserQuery {
    UserQuery {
        user_id: Some(user_id.to_string()),
    }
}

#[tokio::test]
async fn first_item_creates_one_linked_cart() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    assert_eq!(store.cart_count().await, 0);

    let resp = cart_service::add_to_cart(&store, add(user_id, product_id, 2)).await?;
    assert_eq!(resp.code, 200);
    assert_eq!(resp.message, "商品成功新增到購物車");

    assert_eq!(store.cart_count().await, 1);
    let user = store.find_user(user_id).await?.expect("user");
    let cart_id = user.cart_id.expect("cart linked from user");
    let cart = store.find_cart(cart_id).await?.expect("cart document");
    assert_eq!(cart.user_id, user_id);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product_id, product_id);
    assert_eq!(cart.items[0].quantity, 2);

    // A second product goes into the same cart.
    let other = common::create_product(&store, "Programming Rust").await;
    cart_service::add_to_cart(&store, add(user_id, other, 1)).await?;
    assert_eq!(store.cart_count().await, 1);

    let listed = cart_service::get_cart(&store, query(user_id)).await?;
    assert_eq!(listed.body, vec![product_id, other]);
    Ok(())
}

#[tokio::test]
async fn duplicate_product_is_rejected_and_kept_once() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    cart_service::add_to_cart(&store, add(user_id, product_id, 1)).await?;

    let err = cart_service::add_to_cart(&store, add(user_id, product_id, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.to_string(), "商品重複加入");

    let cart_id = store.find_user(user_id).await?.unwrap().cart_id.unwrap();
    let cart = store.find_cart(cart_id).await?.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
    Ok(())
}

#[tokio::test]
async fn missing_user_or_product_is_not_found() {
    let (store, user_id, product_id) = common::seeded().await;

    let err = cart_service::add_to_cart(&store, add(Uuid::new_v4(), product_id, 1))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有該使用者");

    let err = cart_service::add_to_cart(&store, add(user_id, Uuid::new_v4(), 1))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有該商品");
}

#[tokio::test]
async fn add_requires_every_field() {
    let (store, user_id, _) = common::seeded().await;
    let request = AddToCartRequest {
        user_id: Some(user_id.to_string()),
        product_id: None,
        quantity: Some(1),
    };
    let err = cart_service::add_to_cart(&store, request).await.unwrap_err();
    assert_eq!(err.status().as_u16(), 400);
    assert_eq!(err.to_string(), "需要提供user_id, product_id, quantity");
}

#[tokio::test]
async fn dangling_cart_link_is_reported() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    cart_service::add_to_cart(&store, add(user_id, product_id, 1)).await?;
    let cart_id = store.find_user(user_id).await?.unwrap().cart_id.unwrap();
    assert!(store.drop_cart(cart_id).await);

    let other = common::create_product(&store, "Hands-on Rust").await;
    let err = cart_service::add_to_cart(&store, add(user_id, other, 1))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "無法找到購物車資料");
    assert_eq!(err.status().as_u16(), 404);
    Ok(())
}

#[tokio::test]
async fn dangling_cart_link_on_update_and_read() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    cart_service::add_to_cart(&store, add(user_id, product_id, 1)).await?;
    let cart_id = store.find_user(user_id).await?.unwrap().cart_id.unwrap();
    assert!(store.drop_cart(cart_id).await);

    let err = cart_service::update_cart_item(&store, update(user_id, product_id, 3))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有該購物車資料");

    let err = cart_service::get_cart(&store, query(user_id)).await.unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有該購物車資料");

    // The link stays; no replacement cart is created behind the user's back.
    assert_eq!(store.cart_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn quantity_update_reports_counts() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    cart_service::add_to_cart(&store, add(user_id, product_id, 1)).await?;

    let resp = cart_service::update_cart_item(&store, update(user_id, product_id, 4)).await?;
    assert_eq!(resp.code, 200);
    assert_eq!(resp.body, UpdateCounts::new(1, 1));

    // Same quantity again: the cart matches but nothing changes.
    let resp = cart_service::update_cart_item(&store, update(user_id, product_id, 4)).await?;
    assert_eq!(resp.body, UpdateCounts::new(1, 0));

    let cart_id = store.find_user(user_id).await?.unwrap().cart_id.unwrap();
    assert_eq!(store.find_cart(cart_id).await?.unwrap().items[0].quantity, 4);
    Ok(())
}

#[tokio::test]
async fn zero_quantity_removes_line() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    let other = common::create_product(&store, "Rust Atomics and Locks").await;
    cart_service::add_to_cart(&store, add(user_id, product_id, 3)).await?;
    cart_service::add_to_cart(&store, add(user_id, other, 1)).await?;

    let resp = cart_service::update_cart_item(&store, update(user_id, product_id, 0)).await?;
    assert_eq!(resp.message, "已更新該購物車商品數量資料");
    assert_eq!(resp.body, UpdateCounts::new(1, 1));

    let listed = cart_service::get_cart(&store, query(user_id)).await?;
    assert_eq!(listed.body, vec![other]);

    // Removing again leaves the cart untouched.
    let resp = cart_service::update_cart_item(&store, update(user_id, product_id, 0)).await?;
    assert_eq!(resp.body, UpdateCounts::new(1, 0));
    Ok(())
}

#[tokio::test]
async fn update_without_cart_is_not_found() {
    let (store, user_id, product_id) = common::seeded().await;
    let err = cart_service::update_cart_item(&store, update(user_id, product_id, 2))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有cart_id(沒有購物車資料)");

    let err = cart_service::get_cart(&store, query(user_id)).await.unwrap_err();
    assert_eq!(err.to_string(), "使用者沒有cart_id(沒有購物車資料)");
}

#[tokio::test]
async fn negative_quantity_is_rejected() {
    let (store, user_id, product_id) = common::seeded().await;
    let err = cart_service::update_cart_item(&store, update(user_id, product_id, -1))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 400);
}

#[tokio::test]
async fn malformed_user_id_is_server_error() {
    let (store, _, product_id) = common::seeded().await;
    let request = AddToCartRequest {
        user_id: Some("not-an-id".into()),
        product_id: Some(product_id.to_string()),
        quantity: Some(1),
    };
    let err = cart_service::add_to_cart(&store, request).await.unwrap_err();
    assert_eq!(err.status().as_u16(), 500);
    assert!(err.to_string().starts_with("Server Error: "));
}
