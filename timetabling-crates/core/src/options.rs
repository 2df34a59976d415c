//! Options which change how a problem is encoded.

/// Options for [`encode`](crate::encoding::encode).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodingOptions {
    /// What to do with a course for which no room is large enough.
    pub infeasible_courses: InfeasibleCoursePolicy,
    /// Emit every student conflict clause only once, even when many students share the same
    /// pair of courses. This shrinks the formula without changing its models.
    pub deduplicate_conflict_clauses: bool,
}

/// The treatment of a course which has no feasible (day, room) placement.
///
/// Such a course can never be scheduled. It is never left out of the encoding, since that would
/// make the solver report a schedule in which the course is silently missing.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum InfeasibleCoursePolicy {
    /// Emit an empty clause for the course. The formula becomes unsatisfiable, and encoding
    /// carries on so that every infeasible course is reported in the statistics.
    #[default]
    EmptyClause,
    /// Stop encoding at the first infeasible course with an
    /// [`EncodingError::InfeasibleCourse`](crate::encoding::EncodingError::InfeasibleCourse).
    Reject,
}
