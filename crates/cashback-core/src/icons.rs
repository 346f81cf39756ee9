//! Icon classification for category names.

/// Icon key returned when no keyword matches.
pub const DEFAULT_ICON: &str = "shopping_cart";

/// Ordered keyword → icon table. Matching is first-entry-wins substring
/// containment over the lowercased category name, so the declaration order
/// is load-bearing: reordering changes the outcome for names that contain
/// more than one keyword.
const ICON_KEYWORDS: &[(&str, &str)] = &[
    ("азс", "local_gas_station"),
    ("заправка", "local_gas_station"),
    ("бензин", "local_gas_station"),
    ("кафе", "restaurant"),
    ("ресторан", "restaurant"),
    ("еда", "restaurant"),
    ("супермаркет", "shopping_cart"),
    ("продукты", "shopping_cart"),
    ("магазин", "shopping_cart"),
    ("аптека", "local_pharmacy"),
    ("лекарство", "local_pharmacy"),
    ("медицина", "local_pharmacy"),
    ("клиника", "medical_services"),
    ("больница", "medical_services"),
    ("транспорт", "directions_bus"),
    ("автобус", "directions_bus"),
    ("метро", "train"),
    ("такси", "local_taxi"),
    ("билет", "confirmation_number"),
    ("кино", "movie"),
    ("развлечение", "sports_esports"),
    ("игра", "sports_esports"),
    ("онлайн", "shopping_bag"),
    ("интернет", "shopping_bag"),
    ("курс", "school"),
    ("образование", "school"),
    ("книга", "menu_book"),
    ("отель", "hotel"),
    ("путешествие", "flight"),
    ("авиа", "flight"),
    ("спорт", "fitness_center"),
    ("тренажер", "fitness_center"),
    ("красота", "face"),
    ("салон", "content_cut"),
    ("ремонт", "build"),
    ("стройка", "construction"),
    ("услуга", "support_agent"),
];

/// Classify a category name into a presentational icon key.
///
/// Total over any input: falls back to [`DEFAULT_ICON`] when no keyword is
/// contained in the lowercased name. Callable independently of the
/// extraction pipeline, e.g. for manually entered category names.
pub fn classify_icon(category_name: &str) -> &'static str {
    let lower = category_name.to_lowercase();

    for (keyword, icon) in ICON_KEYWORDS {
        if lower.contains(keyword) {
            return icon;
        }
    }

    DEFAULT_ICON
}
