pub mod notifications_entity;

pub use notifications_entity::NotificationsEntity;
