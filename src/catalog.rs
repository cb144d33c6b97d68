/// One selectable entry in the fixed option catalog.
///
/// `value` is the canonical id carried through selection state; `label` is
/// what the user sees (emoji prefix included); `keywords` are alternate
/// search terms the label does not contain (Japanese readings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitOption {
    pub value: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub const OPTIONS: &[FruitOption] = &[
    FruitOption {
        value: "Apple",
        label: "🍎 Apple",
        keywords: &["りんご", "林檎"],
    },
    FruitOption {
        value: "Grape",
        label: "🍇 Grape",
        keywords: &["ぶどう", "葡萄"],
    },
    FruitOption {
        value: "Orange",
        label: "🍊 Orange",
        keywords: &["おれんじ", "オレンジ"],
    },
    FruitOption {
        value: "Strawberry",
        label: "🍓 Strawberry",
        keywords: &["いちご", "苺"],
    },
    FruitOption {
        value: "Watermelon",
        label: "🍉 Watermelon",
        keywords: &["すいか", "西瓜"],
    },
];

/// Display label for a canonical value, if the value exists in the catalog.
pub fn label_of(value: &str) -> Option<&'static str> {
    OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}
