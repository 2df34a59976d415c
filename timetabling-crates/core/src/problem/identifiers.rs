use std::borrow::Borrow;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::Arc;

/// Declares an opaque, cheaply clonable name.
///
/// Identifiers are shared between the problem, the registry and the schedule, so they are
/// reference counted. `Arc` rather than `Rc` keeps independent runs free to move between threads.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(name: impl Into<Arc<str>>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self::new(name)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(
    /// The name of a course, and therefore of the single exam held for it.
    CourseId
);
identifier!(
    /// The name of an exam day.
    DayId
);
identifier!(
    /// The name of an exam room.
    RoomId
);
identifier!(
    /// The name of a student.
    StudentId
);
