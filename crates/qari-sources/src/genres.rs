use qari_lib::models::{FilterOption, FilterSpec};

/// Genre catalog shared by the madara-like Arabic sites, as (id, label)
pub static GENRES: [(&str, &str); 63] = [
    ("آلات", "آلات"),
    ("أكشن", "أكشن"),
    ("إثارة", "إثارة"),
    ("إعادة إحياء", "إعادة إحياء"),
    ("اكشن", "اكشن"),
    (
        "اكشن، مغامرات،دراما، فنون قتال،شونين",
        "اكشن، مغامرات،دراما، فنون قتال،شونين",
    ),
    ("الحياة المدرسية", "الحياة المدرسية"),
    ("الحياة اليومية", "الحياة اليومية"),
    ("العاب فيديو", "العاب فيديو"),
    ("ايتشي", "ايتشي"),
    ("ايسكاي", "ايسكاي"),
    ("بالغ", "بالغ"),
    ("تاريخي", "تاريخي"),
    ("تراجيدي", "تراجيدي"),
    ("تناسخ", "تناسخ"),
    ("جريمة", "جريمة"),
    ("جوسيه", "جوسيه"),
    ("جيندر بندر", "جيندر بندر"),
    ("ث", "حديث"),
    ("ي", "حربي"),
    ("م", "حريم"),
    ("ق-للطبيعة", "خارق للطبيعة"),
    ("خيال", "خيال"),
    ("خيال علمي", "خيال علمي"),
    ("خيالي", "خيالي"),
    ("دراما", "دراما"),
    ("دموي", "دموي"),
    ("راشد", "راشد"),
    ("رعب", "رعب"),
    ("رومانسي", "رومانسي"),
    ("رياضة", "رياضة"),
    ("زراعة", "زراعة"),
    ("زمكاني", "زمكاني"),
    ("زومبي", "زومبي"),
    ("سحر", "سحر"),
    ("سينين", "سينين"),
    ("شريحة من الحياة", "شريحة من الحياة"),
    ("شوجو", "شوجو"),
    ("شونين", "شونين"),
    ("شياطين", "شياطين"),
    ("طبخ", "طبخ"),
    ("طبي", "طبي"),
    ("عسكري", "عسكري"),
    ("غموض", "غموض"),
    ("فانتازي", "فانتازي"),
    ("فنون قتال", "فنون قتال"),
    ("فنون قتالية", "فنون قتالية"),
    ("فوق الطبيعة", "فوق الطبيعة"),
    ("قوى خارقة", "قوى خارقة"),
    ("كوميدي", "كوميدي"),
    ("لعبة", "لعبة"),
    ("مأساوي", "مأساوي"),
    ("مافيا", "مافيا"),
    ("مصاصى الدماء", "مصاصى الدماء"),
    ("مغامرات", "مغامرات"),
    ("موريم", "موريم"),
    ("موسيقى", "موسيقى"),
    ("ميشا", "ميشا"),
    ("ميكا", "ميكا"),
    ("نظام", "نظام"),
    ("نفسي", "نفسي"),
    ("وحوش", "وحوش"),
    ("ويب-تون", "ويب-تون"),
];

/// Values shared by the sites running the same reader theme
pub const STATUS_FILTER: [(&str, &str); 4] = [
    ("", "All"),
    ("ongoing", "Ongoing"),
    ("completed", "Completed"),
    ("hiatus", "Hiatus"),
];

pub const TYPE_FILTER: [(&str, &str); 6] = [
    ("", "All"),
    ("Manga", "Manga"),
    ("Manhwa", "Manhwa"),
    ("Manhua", "Manhua"),
    ("Comic", "Comic"),
    ("Novel", "Novel"),
];

pub fn genre_filter() -> FilterSpec {
    FilterSpec::MultiTriState {
        key: "genre[]".to_string(),
        label: "Genre".to_string(),
        options: options(&GENRES),
    }
}

pub fn select_filter(key: &str, label: &str, values: &[(&str, &str)]) -> FilterSpec {
    FilterSpec::SingleChoice {
        key: key.to_string(),
        label: label.to_string(),
        options: options(values),
    }
}

fn options(values: &[(&str, &str)]) -> Vec<FilterOption> {
    values
        .iter()
        .map(|(value, label)| FilterOption::new(*value, *label))
        .collect()
}
