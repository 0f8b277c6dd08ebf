use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, UpdateCartRequest},
        favorites::FavoriteRequest,
        products::{CreatedProduct, ProductDocument},
        users::CreateUserRequest,
    },
    models::{Cart, CartLine, Favorites, UpdateCounts, User},
    response::ApiResponse,
    routes::{cart, favorites, health, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        cart::get_cart,
        cart::add_to_cart,
        cart::update_cart_item,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::list_favorites,
        users::create_user,
        users::get_user
    ),
    components(
        schemas(
            User,
            Cart,
            CartLine,
            Favorites,
            UpdateCounts,
            ProductDocument,
            CreatedProduct,
            AddToCartRequest,
            UpdateCartRequest,
            FavoriteRequest,
            CreateUserRequest,
            ApiResponse<UpdateCounts>,
            ApiResponse<CreatedProduct>,
            ApiResponse<User>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
        (name = "Users", description = "User endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
