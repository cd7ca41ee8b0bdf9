use crate::element::TextStyle;

/// A named template for new text elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPreset {
    pub label: &'static str,
    pub text: &'static str,
    pub style: TextStyle,
}

pub static TEXT_PRESETS: [TextPreset; 3] = [
    TextPreset {
        label: "Add Title",
        text: "Title",
        style: TextStyle::Title,
    },
    TextPreset {
        label: "Add Subtitle",
        text: "Subtitle",
        style: TextStyle::Subtitle,
    },
    TextPreset {
        label: "Add Paragraph",
        text: "Your text here",
        style: TextStyle::Paragraph,
    },
];

impl TextPreset {
    /// Find the preset behind a menu label
    pub fn lookup(label: &str) -> Option<&'static TextPreset> {
        TEXT_PRESETS.iter().find(|preset| preset.label == label)
    }

    /// The preset that creates text of the given style
    pub fn for_style(style: TextStyle) -> &'static TextPreset {
        match style {
            TextStyle::Title => &TEXT_PRESETS[0],
            TextStyle::Subtitle => &TEXT_PRESETS[1],
            TextStyle::Paragraph => &TEXT_PRESETS[2],
        }
    }
}
