mod common;

use catalog_cart_api::{
    dto::{favorites::FavoriteRequest, params::UserQuery},
    services::favorite_service,
    store::CatalogStore,
};
use uuid::Uuid;

fn request(user_id: Uuid, product_id: Uuid) -> FavoriteRequest {
    FavoriteRequest {
        user_id: Some(user_id.to_string()),
        product_id: Some(product_id.to_string()),
    }
}

fn query(user_id: Uuid) -> UserQuery {
    UserQuery {
        user_id: Some(user_id.to_string()),
    }
}

#[tokio::test]
async fn first_favorite_creates_linked_list() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;

    let resp = favorite_service::add_favorite(&store, request(user_id, product_id)).await?;
    assert_eq!(resp.code, 200);
    assert_eq!(resp.message, "商品成功加到收藏");
    assert_eq!(store.favorites_count().await, 1);

    let favorites_id = store
        .find_user(user_id)
        .await?
        .and_then(|u| u.favorites_id)
        .expect("favorites linked from user");
    let list = store.find_favorites(favorites_id).await?.expect("favorites");
    assert_eq!(list.product_ids, vec![product_id]);

    let other = common::create_product(&store, "Programming Rust").await;
    favorite_service::add_favorite(&store, request(user_id, other)).await?;
    assert_eq!(store.favorites_count().await, 1);

    let listed = favorite_service::get_favorites(&store, query(user_id)).await?;
    assert_eq!(listed.body, vec![product_id, other]);
    Ok(())
}

#[tokio::test]
async fn duplicate_favorite_is_rejected() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    favorite_service::add_favorite(&store, request(user_id, product_id)).await?;

    let err = favorite_service::add_favorite(&store, request(user_id, product_id))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 400);
    assert_eq!(err.to_string(), "商品重複加入");

    let listed = favorite_service::get_favorites(&store, query(user_id)).await?;
    assert_eq!(listed.body.len(), 1);
    Ok(())
}

#[tokio::test]
async fn missing_user_and_missing_product_are_distinguished() {
    let (store, user_id, product_id) = common::seeded().await;

    let err = favorite_service::add_favorite(&store, request(Uuid::new_v4(), product_id))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有該使用者");

    let err = favorite_service::add_favorite(&store, request(user_id, Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "沒有該商品");
}

#[tokio::test]
async fn remove_deletes_only_that_product() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    let other = common::create_product(&store, "Rust in Action").await;
    favorite_service::add_favorite(&store, request(user_id, product_id)).await?;
    favorite_service::add_favorite(&store, request(user_id, other)).await?;

    let resp = favorite_service::remove_favorite(&store, request(user_id, product_id)).await?;
    assert_eq!(resp.message, "成功刪除該收藏商品");

    let listed = favorite_service::get_favorites(&store, query(user_id)).await?;
    assert_eq!(listed.body, vec![other]);
    Ok(())
}

#[tokio::test]
async fn removing_absent_favorite_is_not_found() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    let other = common::create_product(&store, "Rust in Action").await;
    favorite_service::add_favorite(&store, request(user_id, product_id)).await?;

    let err = favorite_service::remove_favorite(&store, request(user_id, other))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "收藏中沒有該商品");

    let listed = favorite_service::get_favorites(&store, query(user_id)).await?;
    assert_eq!(listed.body, vec![product_id]);
    Ok(())
}

#[tokio::test]
async fn user_without_favorites_is_not_found() {
    let (store, user_id, product_id) = common::seeded().await;

    let err = favorite_service::get_favorites(&store, query(user_id))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);

    let err = favorite_service::remove_favorite(&store, request(user_id, product_id))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "使用者沒有favorites_id(沒有收藏資料)");
}

#[tokio::test]
async fn missing_ids_are_bad_request() {
    let (store, _, _) = common::seeded().await;
    let err = favorite_service::add_favorite(&store, FavoriteRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 400);
    assert_eq!(err.to_string(), "需要提供user_id 跟 product_id");

    let err = favorite_service::get_favorites(&store, UserQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "需要提供user_id");
}

#[tokio::test]
async fn dangling_favorites_link_is_reported() -> anyhow::Result<()> {
    let (store, user_id, product_id) = common::seeded().await;
    favorite_service::add_favorite(&store, request(user_id, product_id)).await?;
    let favorites_id = store
        .find_user(user_id)
        .await?
        .and_then(|u| u.favorites_id)
        .expect("favorites linked from user");
    assert!(store.drop_favorites(favorites_id).await);

    let other = common::create_product(&store, "Hands-on Rust").await;
    let err = favorite_service::add_favorite(&store, request(user_id, other))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 400);
    assert_eq!(err.to_string(), "找不到使用者的收藏資料");

    let err = favorite_service::remove_favorite(&store, request(user_id, product_id))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "找不到使用者的收藏資料");

    let err = favorite_service::get_favorites(&store, query(user_id))
        .await
        .unwrap_err();
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "找不到使用者的收藏資料");

    assert_eq!(store.favorites_count().await, 0);
    Ok(())
}
