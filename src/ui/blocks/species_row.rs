use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One species line of the inventory report: a status icon, the species
/// name, the present count, and a marker per slot.
#[derive(Debug, Clone)]
pub struct SpeciesRow {
    pub name: String,
    /// `(slot key, present)` in display order
    pub slots: Vec<(String, bool)>,
}

impl SpeciesRow {
    pub fn present(&self) -> usize {
        self.slots.iter().filter(|(_, p)| *p).count()
    }

    pub fn is_complete(&self) -> bool {
        self.present() == self.slots.len()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = if self.is_complete() {
            Icon::Success
        } else if self.present() == 0 {
            Icon::Error
        } else {
            Icon::Warning
        };

        let cells: Vec<String> = self
            .slots
            .iter()
            .map(|(slot, present)| {
                let text = if *present {
                    ColoredText::success(slot.as_str())
                } else {
                    ColoredText::dim(format!("-{}", slot))
                };
                text.render(supports_color)
            })
            .collect();

        format!(
            "  {} {:<8} {}/{}  {}\n",
            icon.colored(supports_color, supports_unicode),
            self.name,
            self.present(),
            self.slots.len(),
            cells.join(" ")
        )
    }
}
