pub mod prelude;

pub mod business_hours;
pub mod business_images;
pub mod business_ratings;
pub mod businesses;
pub mod categories;
pub mod conversations;
pub mod messages;
pub mod services;
pub mod users;
