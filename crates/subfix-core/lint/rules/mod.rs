//! Built-in detectors
//!
//! One rule per module. `BuiltinRules::all()` returns the full suite in a
//! stable order; `detect_all_errors` in the parent module runs them all.

use super::LintRule;

pub mod duplicate;
pub mod duration;
pub mod empty;
pub mod formatting_tags;
pub mod hearing_impaired;
pub mod long_line;
pub mod overlap;
pub mod short_gap;

pub use duplicate::DuplicateRule;
pub use duration::DurationRule;
pub use empty::EmptyRule;
pub use formatting_tags::FormattingTagsRule;
pub use hearing_impaired::HearingImpairedRule;
pub use long_line::LongLineRule;
pub use overlap::OverlapRule;
pub use short_gap::ShortGapRule;

/// Registry of the built-in detector suite.
pub struct BuiltinRules;

impl BuiltinRules {
    /// Every built-in rule, in reporting order.
    #[must_use]
    pub fn all() -> Vec<Box<dyn LintRule>> {
        vec![
            Box::new(EmptyRule),
            Box::new(OverlapRule),
            Box::new(HearingImpairedRule),
            Box::new(LongLineRule),
            Box::new(DuplicateRule),
            Box::new(FormattingTagsRule),
            Box::new(DurationRule),
            Box::new(ShortGapRule),
        ]
    }
}
