//! Domain module for the runtime
//!
//! What gets written and sent once a draw has succeeded.

pub mod card;
pub mod message;
pub mod template;

pub use card::AssignmentCard;
pub use message::OutgoingMessage;
pub use template::MessageTemplate;
