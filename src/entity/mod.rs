pub mod cart_items;
pub mod carts;
pub mod favorite_items;
pub mod favorites;
pub mod products;
pub mod users;

pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use favorite_items::Entity as FavoriteItems;
pub use favorites::Entity as Favorites;
pub use products::Entity as Products;
pub use users::Entity as Users;
