//! Bilingual (English / Arabic) string lookup.
//!
//! State machines never branch on the language; screens call [`localize`]
//! with a key and the current [`Lang`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Lang::Ar if !ar.trim().is_empty() => ar,
            _ => en,
        }
    }
}

static DICTIONARY: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        // navigation
        ("nav.contracting_types", ("Contracting types", "أنواع التعاقد")),
        ("nav.rosters", ("Rosters", "جداول المناوبات")),
        ("nav.scheduling_requests", ("Scheduling requests", "طلبات الجدولة")),
        ("nav.working_hours", ("Generate working hours", "توليد ساعات العمل")),
        ("nav.references", ("References", "البيانات المرجعية")),
        ("nav.scheduling", ("Scheduling", "الجدولة")),
        // common actions
        ("common.search", ("Search...", "بحث...")),
        ("common.refresh", ("Refresh", "تحديث")),
        ("common.loading", ("Loading...", "جار التحميل...")),
        ("common.no_data", ("No data", "لا توجد بيانات")),
        ("common.filters", ("Filters", "عوامل التصفية")),
        ("common.clear_filters", ("Clear filters", "مسح عوامل التصفية")),
        ("common.all", ("All", "الكل")),
        ("common.yes", ("Yes", "نعم")),
        ("common.no", ("No", "لا")),
        ("common.ok", ("OK", "موافق")),
        ("common.save", ("Save", "حفظ")),
        ("common.cancel", ("Cancel", "إلغاء")),
        ("common.create", ("Create", "إنشاء")),
        ("common.edit", ("Edit", "تعديل")),
        ("common.dismiss", ("Dismiss", "إخفاء")),
        ("common.from", ("From", "من")),
        ("common.to", ("To", "إلى")),
        ("common.min", ("Min", "الحد الأدنى")),
        ("common.max", ("Max", "الحد الأقصى")),
        ("common.status", ("Status", "الحالة")),
        ("common.active", ("Active", "نشط")),
        ("common.inactive", ("Inactive", "غير نشط")),
        ("common.created_at", ("Created", "تاريخ الإنشاء")),
        ("common.error", ("Error", "خطأ")),
        ("common.not_found", ("The requested record was not found", "السجل المطلوب غير موجود")),
        ("common.department", ("Department", "القسم")),
        ("common.back", ("Back", "رجوع")),
        ("common.actions", ("Actions", "الإجراءات")),
        ("common.language", ("العربية", "English")),
        ("common.page_size", ("Rows per page", "عدد الصفوف في الصفحة")),
        ("app.title", ("Staff Roster Admin", "إدارة جداول المناوبات")),
        // pagination
        ("pagination.first", ("First page", "الصفحة الأولى")),
        ("pagination.previous", ("Previous page", "الصفحة السابقة")),
        ("pagination.next", ("Next page", "الصفحة التالية")),
        ("pagination.last", ("Last page", "الصفحة الأخيرة")),
        ("pagination.summary", ("Showing {start}-{end} of {total}", "عرض {start}-{end} من {total}")),
        // contracting types
        ("contracting_type.name", ("Name", "الاسم")),
        ("contracting_type.name_en", ("Name (English)", "الاسم (بالإنجليزية)")),
        ("contracting_type.name_ar", ("Name (Arabic)", "الاسم (بالعربية)")),
        ("contracting_type.hours_per_week", ("Hours per week", "ساعات العمل الأسبوعية")),
        ("contracting_type.max_hours_per_week", ("Max hours per week", "الحد الأقصى للساعات الأسبوعية")),
        ("contracting_type.allow_overtime", ("Allow overtime", "السماح بالعمل الإضافي")),
        ("contracting_type.new", ("New contracting type", "نوع تعاقد جديد")),
        // rosters
        ("roster.title", ("Title", "العنوان")),
        ("roster.start_date", ("Start date", "تاريخ البداية")),
        ("roster.end_date", ("End date", "تاريخ النهاية")),
        ("roster.status.draft", ("Draft", "مسودة")),
        ("roster.status.published", ("Published", "منشور")),
        ("roster.status.archived", ("Archived", "مؤرشف")),
        // scheduling requests
        ("request.doctor", ("Doctor", "الطبيب")),
        ("request.period", ("Requested period", "الفترة المطلوبة")),
        ("request.reason", ("Reason", "السبب")),
        ("request.notes", ("Notes", "ملاحظات")),
        ("request.new", ("New scheduling request", "طلب جدولة جديد")),
        ("request.requested_at", ("Requested at", "تاريخ الطلب")),
        ("request.doctor_id", ("Doctor ID", "رقم الطبيب")),
        ("request.status.pending", ("Pending", "قيد الانتظار")),
        ("request.status.approved", ("Approved", "مقبول")),
        ("request.status.rejected", ("Rejected", "مرفوض")),
        // working hours generation
        ("working_hours.overwrite", ("Overwrite existing working hours", "استبدال ساعات العمل الحالية")),
        ("working_hours.generate", ("Generate", "توليد")),
        ("working_hours.empty_means_all", ("Nothing selected: all departments will be generated", "لم يتم اختيار شيء: سيتم التوليد لجميع الأقسام")),
        ("working_hours.added", ("Added", "تمت الإضافة")),
        ("working_hours.updated", ("Updated", "تم التحديث")),
        ("working_hours.skipped", ("Skipped", "تم التخطي")),
        ("working_hours.completion", ("Completion", "نسبة الإنجاز")),
        ("working_hours.days", ("days", "أيام")),
        ("working_hours.result", ("Generation finished", "اكتمل التوليد")),
        ("working_hours.clear_selection", ("Clear selection", "مسح التحديد")),
        ("working_hours.open", ("Working hours", "ساعات العمل")),
        // validation
        ("validation.required", ("This field is required", "هذا الحقل مطلوب")),
        ("validation.too_short", ("Value is too short", "القيمة قصيرة جدا")),
        ("validation.too_long", ("Value is too long", "القيمة طويلة جدا")),
        ("validation.not_positive", ("Value must be greater than zero", "يجب أن تكون القيمة أكبر من صفر")),
        ("validation.less_than", ("Maximum must not be less than the required value", "يجب ألا يقل الحد الأقصى عن القيمة المطلوبة")),
        ("validation.date_before", ("End date must not be before start date", "يجب ألا يسبق تاريخ النهاية تاريخ البداية")),
        // transport errors
        ("error.network", ("Unable to reach the server", "تعذر الاتصال بالخادم")),
        ("error.unexpected", ("Unexpected server response", "استجابة غير متوقعة من الخادم")),
    ])
});

/// Returns the string for `key` in `lang`; unknown keys are returned as-is.
pub fn localize(key: &str, lang: Lang) -> String {
    match DICTIONARY.get(key) {
        Some((en, ar)) => lang.pick(en, ar).to_string(),
        None => key.to_string(),
    }
}

/// [`localize`] with `{name}` placeholders substituted.
pub fn localize_with(key: &str, lang: Lang, args: &[(&str, String)]) -> String {
    args.iter().fold(localize(key, lang), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}
