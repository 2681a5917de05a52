pub mod mode;
pub mod turn;

pub use mode::Mode;
pub use turn::{ConversationTurn, Role};
