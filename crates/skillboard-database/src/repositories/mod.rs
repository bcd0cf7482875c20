//! Concrete repository implementations, one per entity.

pub mod assignment;
pub mod notification;
pub mod outbox;
pub mod user;

pub use assignment::AssignmentRepository;
pub use notification::NotificationRepository;
pub use outbox::OutboxRepository;
pub use user::UserRepository;
