use crate::application::read_models::{DeviceRowView, MenuItemView, ReportReadModel};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter rendering a report as a Markdown document
///
/// Layout: title, run metadata, the report menu, then the device table.
/// The device name is always the first table column.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str(&format!(
            "# Device Report: {}\n\n",
            model.report.display_label
        ));
        output.push_str(&format!("- Report: `{}`\n", model.report.key));
        output.push_str(&format!(
            "- Reference date: {}\n",
            model.metadata.reference_date
        ));
        output.push_str(&format!("- Generated: {}\n", model.metadata.timestamp));
        output.push_str(&format!(
            "- Tool: {} {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version
        ));
    }

    fn render_menu(&self, output: &mut String, menu: &[MenuItemView]) {
        output.push_str("## Reports\n\n");
        for item in menu {
            if item.selected {
                output.push_str(&format!("- **{}** (`{}`)\n", item.label, item.key));
            } else {
                output.push_str(&format!("- {} (`{}`)\n", item.label, item.key));
            }
        }
        output.push('\n');
    }

    fn render_devices(&self, output: &mut String, model: &ReportReadModel) {
        output.push_str("## Devices\n\n");
        output.push_str(&format!(
            "{} of {} device(s) match this report.\n\n",
            model.rows.len(),
            model.total_devices
        ));

        if model.rows.is_empty() {
            output.push_str("*No devices match this report*\n");
            return;
        }

        let mut header = String::from("| Name |");
        let mut separator = String::from("|------|");
        for column in &model.columns {
            header.push_str(&format!(" {} |", column.header));
            separator.push_str(&format!("{}|", "-".repeat(column.header.len() + 2)));
        }
        output.push_str(&header);
        output.push('\n');
        output.push_str(&separator);
        output.push('\n');

        for row in &model.rows {
            self.render_row(output, row);
        }
    }

    fn render_row(&self, output: &mut String, row: &DeviceRowView) {
        output.push_str(&format!("| {} |", Self::escape_markdown_table_cell(&row.name)));
        for cell in &row.cells {
            output.push_str(&format!(" {} |", Self::escape_markdown_table_cell(cell)));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model);
        self.render_menu(&mut output, &model.menu);
        self.render_devices(&mut output, model);
        Ok(output)
    }
}
