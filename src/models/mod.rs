pub mod category;
pub mod loaders;
pub mod question;

pub use category::{CategoryRule, DEFAULT_CATEGORY};
pub use loaders::{load_questions, save_questions};
pub use question::{Answer, Options, QuestionRecord, OPTION_LETTERS};
