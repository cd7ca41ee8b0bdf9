use crate::element::TextStyle;

/// What picking a sidebar option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddText(TextStyle),
    UploadImage,
    /// Declared in the menu but not backed by any behaviour yet; shown disabled
    Unimplemented,
}

impl MenuAction {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, MenuAction::Unimplemented)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuOption {
    pub label: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuCategory {
    pub icon: &'static str,
    pub label: &'static str,
    pub options: &'static [MenuOption],
}

const fn option(label: &'static str, action: MenuAction) -> MenuOption {
    MenuOption { label, action }
}

pub static SIDEBAR_CATEGORIES: [MenuCategory; 5] = [
    MenuCategory {
        icon: "🗋",
        label: "Template",
        options: &[
            option("Template 1", MenuAction::Unimplemented),
            option("Template 2", MenuAction::Unimplemented),
            option("Template 3", MenuAction::Unimplemented),
        ],
    },
    MenuCategory {
        icon: "🗛",
        label: "Text",
        options: &[
            option("Add Title", MenuAction::AddText(TextStyle::Title)),
            option("Add Subtitle", MenuAction::AddText(TextStyle::Subtitle)),
            option("Add Paragraph", MenuAction::AddText(TextStyle::Paragraph)),
        ],
    },
    MenuCategory {
        icon: "⮉",
        label: "Upload",
        options: &[option("Upload Image", MenuAction::UploadImage)],
    },
    MenuCategory {
        icon: "◼",
        label: "Shapes",
        options: &[
            option("Circle", MenuAction::Unimplemented),
            option("Rectangle", MenuAction::Unimplemented),
            option("Triangle", MenuAction::Unimplemented),
        ],
    },
    MenuCategory {
        icon: "✏",
        label: "Draw",
        options: &[
            option("Pencil", MenuAction::Unimplemented),
            option("Eraser", MenuAction::Unimplemented),
            option("Brush", MenuAction::Unimplemented),
        ],
    },
];

/// Accordion state of the sidebar: at most one category is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarMenu {
    active: Option<usize>,
}

impl SidebarMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &'static [MenuCategory] {
        &SIDEBAR_CATEGORIES
    }

    /// Open the category at `index`, or close it if it is already open
    pub fn toggle(&mut self, index: usize) {
        if index >= SIDEBAR_CATEGORIES.len() {
            log::warn!("Ignoring toggle of unknown sidebar category {}", index);
            return;
        }
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
