//! Identity for domain objects that persist across edits.

/// A domain object addressed by a stable, strongly-typed identifier.
///
/// Two values with the same id are the same object at different points in
/// time; field-by-field equality is irrelevant for identity. Stock lines keep
/// their id across lead-time edits, procurement records across milestone
/// updates.
pub trait Entity {
    /// Identifier type (a uuid newtype from [`crate::id`]).
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
