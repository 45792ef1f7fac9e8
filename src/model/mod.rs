/// Enumerated member attributes (chapter, country, level, statuses).
pub mod enums;

/// The normalized member record and its validation.
pub mod member;

/// The import report returned to the caller.
pub mod report;
