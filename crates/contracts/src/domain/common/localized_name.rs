use crate::shared::i18n::Lang;

/// Entities that carry a name in both English and Arabic
pub trait LocalizedName {
    fn name_en(&self) -> &str;

    fn name_ar(&self) -> &str;

    /// Name in the requested language, falling back to English when the Arabic one is blank
    fn name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar if !self.name_ar().trim().is_empty() => self.name_ar(),
            _ => self.name_en(),
        }
    }
}

/// Implements [`LocalizedName`] for a struct with `name_en`/`name_ar` fields.
macro_rules! impl_localized_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::common::LocalizedName for $ty {
                fn name_en(&self) -> &str {
                    &self.name_en
                }

                fn name_ar(&self) -> &str {
                    &self.name_ar
                }
            }
        )+
    };
}

pub(crate) use impl_localized_name;
