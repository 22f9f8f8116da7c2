// Crisis module
// Fixed crisis-language detection and safety resources

mod detector;

pub use detector::{contains_crisis_language, CrisisDetector, CRISIS_RESPONSES};
