pub mod gemini;
pub mod local;

pub use gemini::GeminiProvider;
pub use local::LocalProvider;
