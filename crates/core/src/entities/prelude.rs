pub use super::business_hours::Entity as BusinessHours;
pub use super::business_images::Entity as BusinessImages;
pub use super::business_ratings::Entity as BusinessRatings;
pub use super::businesses::Entity as Businesses;
pub use super::categories::Entity as Categories;
pub use super::conversations::Entity as Conversations;
pub use super::messages::Entity as Messages;
pub use super::services::Entity as Services;
pub use super::users::Entity as Users;
