mod report;

pub(crate) use report::{StdoutReporter, format_summary};
