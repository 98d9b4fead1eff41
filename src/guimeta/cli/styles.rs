use console::Style;
use once_cell::sync::Lazy;

pub struct TreeStyles {
    pub class_name: Style,
    pub heading: Style,
    pub order: Style,
    pub id: Style,
    pub kind: Style,
    pub label: Style,
    pub flag: Style,
}

pub static TREE_STYLES: Lazy<TreeStyles> = Lazy::new(|| TreeStyles {
    class_name: Style::new().bold(),
    heading: Style::new().cyan(),
    order: Style::new().color256(246),
    id: Style::new(),
    kind: Style::new().yellow(),
    label: Style::new().italic(),
    flag: Style::new().color256(246),
});
