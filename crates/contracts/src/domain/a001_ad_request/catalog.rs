/// Продукты, для которых генерируется реклама (порядок отображения)
pub const PRODUCTS: &[&str] = &[
    "IntelliJ IDEA",
    "PyCharm",
    "WebStorm",
    "PhpStorm",
    "Rider",
    "CLion",
    "GoLand",
    "RubyMine",
    "RustRover",
    "DataGrip",
    "DataSpell",
    "Fleet",
];

/// Рекламные площадки (порядок отображения)
pub const PLATFORMS: &[&str] = &[
    "GDN (Google Display Network)",
    "Search Ads (typically Google Search)",
    "Quora",
    "Reddit",
    "Facebook",
    "Instagram",
    "X (Twitter)",
    "LinkedIn",
    "YouTube",
    "TikTok",
];

/// Подпись пустого варианта в выпадающем списке продуктов
pub const PRODUCT_PLACEHOLDER: &str = "--Please choose an option--";

/// Варианты для select: (value, label), первым идёт пустой вариант
pub fn product_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), PRODUCT_PLACEHOLDER.to_string()))
        .chain(PRODUCTS.iter().map(|p| (p.to_string(), p.to_string())))
        .collect()
}
