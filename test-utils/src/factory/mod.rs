//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let restaurant = factory::restaurant::create_restaurant(&db).await?;
//!
//!     // Create a menu item together with its owning restaurant
//!     let (restaurant, item) = factory::helpers::create_menu_item_with_restaurant(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `restaurant` - Create restaurant entities
//! - `menu_item` - Create menu item entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod menu_item;
pub mod restaurant;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use menu_item::create_menu_item;
pub use restaurant::create_restaurant;
pub use user::create_user;
