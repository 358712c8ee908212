/// Identification of a use case, shared by its screen and its endpoint
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "generate_working_hours"
    fn usecase_name() -> &'static str;

    /// Translation key of the screen title
    fn title_key() -> &'static str;

    /// Full name such as "u501_generate_working_hours"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
