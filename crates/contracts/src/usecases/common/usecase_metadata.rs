/// Identification of a use case for logs and UI titles
pub trait UseCaseMetadata {
    /// Index of the use case (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "data_connect")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u501_data_connect"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
