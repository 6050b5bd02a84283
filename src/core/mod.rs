// Core logic exports
pub mod fallback;
pub mod limiter;
pub mod prompt;

pub use fallback::{respond, KeywordRule, DEFAULT_ANSWER, RULES};
pub use limiter::{Clock, RateDecision, RateLimiter, SystemClock};
pub use prompt::{build_prompt, REUNION_CONTEXT};
