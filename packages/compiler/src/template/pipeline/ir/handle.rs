//! Handles and identifiers used to link IR operations together.

use std::fmt;

/// A cross-reference id. During ingestion an `XrefId` is allocated for each logical entity
/// (element, view, i18n block, ICU) so that operations can reference each other without holding
/// structural pointers into an op list. Ids are unique within a [`CompilationJob`] and are never
/// reused.
///
/// An `XrefId` is opaque: it is only meaningful as a key into lookup maps that phases rebuild at
/// the start of each traversal.
///
/// [`CompilationJob`]: crate::template::pipeline::compilation::CompilationJob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XrefId(usize);

impl XrefId {
    pub(crate) fn new(id: usize) -> Self {
        XrefId(id)
    }

    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for XrefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The data slot assigned to a slot-consuming create operation, or `None` until the
/// slot-allocation phase has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotHandle {
    pub slot: Option<usize>,
}

impl SlotHandle {
    /// A handle with no slot assigned yet.
    pub fn new() -> Self {
        SlotHandle { slot: None }
    }

    pub fn with_slot(slot: usize) -> Self {
        SlotHandle { slot: Some(slot) }
    }
}
