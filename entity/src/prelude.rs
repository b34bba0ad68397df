pub use super::menu_item::Entity as MenuItem;
pub use super::restaurant::Entity as Restaurant;
pub use super::user::Entity as User;
