use binview_core::config::ViewerConfig;
use binview_core::frame::{Geometry, SourceInfo};

use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    mode: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_source_summary(info: &SourceInfo, geometry: Geometry, config: &ViewerConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("binview"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(7)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(info.filename.display())
    );
    println!(
        "  {:<14}{} bytes ({} KB)",
        s.label.apply_to("Size"),
        s.value.apply_to(info.size_bytes),
        info.size_kb()
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(geometry)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rows"),
        s.value.apply_to(info.total_rows(geometry.width()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pages"),
        s.value.apply_to(info.pages(geometry))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color mode"),
        s.mode.apply_to(config.color_mode)
    );
    println!();
}
