//! Label measurement from monospace-style text metrics.

use ascend_core::Size;
use ascend_layout::Measure;
use unicode_width::UnicodeWidthStr;

use crate::config::PillMetrics;
use crate::manifest::Label;

impl PillMetrics {
    /// Estimated width of `text` set in the pill font.
    #[must_use]
    pub fn text_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.font_size * self.char_advance
    }

    /// Height of a single-line pill.
    #[must_use]
    pub fn pill_height(&self) -> f32 {
        self.font_size
            .mul_add(self.line_height, 2.0 * self.padding_y)
            .max(0.0)
    }
}

impl Measure<Label> for PillMetrics {
    fn measure(&self, label: &Label) -> Size {
        let mut content = self.text_width(&label.title);
        if let Some(icon) = label.icon.as_deref().filter(|i| !i.is_empty()) {
            content += self.text_width(icon) + self.icon_gap;
        }
        Size::new(
            2.0f32.mul_add(self.padding_x, content).max(0.0),
            self.pill_height(),
        )
    }
}
