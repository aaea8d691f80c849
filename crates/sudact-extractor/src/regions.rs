//! Canonical Russian federal subjects and region resolution tables

/// Substrings that mark a court-name suffix as naming a region
pub const REGION_INDICATORS: [&str; 8] = [
    "област",
    "край",
    "республика",
    "якутия",
    "округ",
    "город",
    "ао",
    "края",
];

/// Keyword overrides for names that do not normalize morphologically
pub const KEYWORD_OVERRIDES: [(&str, &str); 7] = [
    ("югра", "Ханты-Мансийский автономный округ - Югра"),
    ("санкт", "Санкт-Петербург"),
    ("якут", "Республика Саха (Якутия)"),
    ("осет", "Республика Северная Осетия - Алания"),
    ("севас", "Севастополь"),
    ("чукот", "Чукотский автономный округ"),
    ("москв", "Москва"),
];

/// Genitive-to-nominative rewrites applied before the last lookup
pub const MORPHOLOGICAL_REWRITES: [(&str, &str); 5] = [
    ("области", "область"),
    ("края", "край"),
    ("ской", "ская"),
    ("ского", "ский"),
    ("АС ", ""),
];

/// Canonical region names
pub const REGIONS: [&str; 85] = [
    "Ярославская область",
    "Ямало-Ненецкий автономный округ",
    "Чукотский автономный округ",
    "Чувашская республика",
    "Чеченская республика",
    "Челябинская область",
    "Ханты-Мансийский автономный округ - Югра",
    "Хабаровский край",
    "Ульяновская область",
    "Удмуртская республика",
    "Тюменская область",
    "Тульская область",
    "Томская область",
    "Тверская область",
    "Тамбовская область",
    "Ставропольский край",
    "Смоленская область",
    "Севастополь",
    "Свердловская область",
    "Сахалинская область",
    "Саратовская область",
    "Санкт-Петербург",
    "Самарская область",
    "Рязанская область",
    "Ростовская область",
    "Республика Хакасия",
    "Республика Тыва",
    "Республика Татарстан",
    "Республика Северная Осетия - Алания",
    "Республика Саха (Якутия)",
    "Республика Мордовия",
    "Республика Марий Эл",
    "Республика Крым",
    "Республика Коми",
    "Республика Карелия",
    "Республика Калмыкия",
    "Республика Ингушетия",
    "Республика Дагестан",
    "Республика Бурятия",
    "Республика Башкортостан",
    "Республика Алтай",
    "Республика Адыгея",
    "Псковская область",
    "Приморский край",
    "Пермский край",
    "Пензенская область",
    "Орловская область",
    "Оренбургская область",
    "Омская область",
    "Новосибирская область",
    "Новгородская область",
    "Нижегородская область",
    "Ненецкий автономный округ",
    "Мурманская область",
    "Московская область",
    "Москва",
    "Магаданская область",
    "Липецкая область",
    "Ленинградская область",
    "Курская область",
    "Курганская область",
    "Красноярский край",
    "Краснодарский край",
    "Костромская область",
    "Кировская область",
    "Кемеровская область",
    "Карачаево-Черкесская республика",
    "Камчатский край",
    "Калужская область",
    "Калининградская область",
    "Кабардино-Балкарская республика",
    "Иркутская область",
    "Ивановская область",
    "Забайкальский край",
    "Еврейская автономная область",
    "Воронежская область",
    "Вологодская область",
    "Волгоградская область",
    "Владимирская область",
    "Брянская область",
    "Белгородская область",
    "Астраханская область",
    "Архангельская область",
    "Амурская область",
    "Алтайский край",
];

/// Canonical region names sorted alphabetically
pub fn sorted_regions() -> Vec<&'static str> {
    let mut regions = REGIONS.to_vec();
    regions.sort_unstable();
    regions
}
