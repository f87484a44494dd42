/// Root entity of an aggregate owned by the backend
///
/// Instance methods expose the record itself; the associated functions carry
/// the static naming used by the admin UI and the REST routes.
pub trait AggregateRoot {
    /// Identifier type
    type Id;

    /// Server-assigned id of the record
    fn id(&self) -> Self::Id;

    /// Human-readable name of the record
    fn display_name(&self) -> &str;

    /// Collection segment in REST paths, e.g. "categories"
    fn collection_name() -> &'static str;

    /// Plural UI name, used as the list page title
    fn list_name() -> &'static str;
}
