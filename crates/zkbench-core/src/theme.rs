use serde::{Deserialize, Serialize};

/// Visual tokens of the submissions table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTheme {
    pub header_bg: String,
    pub container_bg: String,
    /// `None` hides the divider between header cells.
    pub header_split_color: Option<String>,
    pub cell_padding_block_px: u32,
    pub cell_padding_inline_px: u32,
    pub text_color: String,
    /// Minimum scroll width of the table body.
    pub scroll_x: String,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_bg: "#fff".to_string(),
            container_bg: "linear-gradient(0deg, rgba(255, 255, 255, 0.50) 0%, \
                           rgba(255, 255, 255, 0.50) 100%), #F8F9FA"
                .to_string(),
            header_split_color: None,
            cell_padding_block_px: 20,
            cell_padding_inline_px: 12,
            text_color: "#2B332D".to_string(),
            scroll_x: "calc(100% + 50%)".to_string(),
        }
    }
}

impl TableTheme {
    /// CSS custom properties for the table wrapper's `style` attribute.
    pub fn css_vars(&self) -> String {
        let split = self.header_split_color.as_deref().unwrap_or("transparent");
        format!(
            "--table-header-bg: {}; --table-bg: {}; --table-header-split: {}; \
             --table-cell-padding: {}px {}px; --table-text: {}; --table-scroll-x: {};",
            self.header_bg,
            self.container_bg,
            split,
            self.cell_padding_block_px,
            self.cell_padding_inline_px,
            self.text_color,
            self.scroll_x,
        )
    }
}
