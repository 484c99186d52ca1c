/// Registry record shared by customers and vendors
pub trait AggregateRoot {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;
    fn code(&self) -> &str;
    fn description(&self) -> &str;

    /// Singular display name, e.g. in "Customer not found"
    fn element_name() -> &'static str;
    fn list_name() -> &'static str;

    /// Option label for pickers
    fn picker_label(&self) -> String {
        format!("{} ({})", self.description(), self.code())
    }
}
