pub mod interface;
pub mod gemini_llm;
pub mod mock_llm;
pub mod reply;

pub use interface::*;
pub use gemini_llm::*;
pub use reply::*;
