use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use binview_core::frame::SourceInfo;
use binview_core::io::snapshot::save_png;
use binview_core::viewport::{FrameMirror, JumpDirection, PagerOptions, ViewportPager};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{ModeArg, ViewArgs};
use crate::summary::print_source_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Input file
    pub file: PathBuf,

    /// Output PNG path; further pages get a _001, _002, ... suffix
    #[arg(short, long, default_value = "frame.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Color mapping
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of consecutive frames to render
    #[arg(long, default_value = "1")]
    pub pages: usize,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let written = render_pages(args)?;
    println!();
    for path in &written {
        println!("Saved {}", path.display());
    }
    Ok(())
}

/// Render up to `args.pages` consecutive frames. Returns the paths written.
fn render_pages(args: &RenderArgs) -> Result<Vec<PathBuf>> {
    let mut config = args.view.resolve()?;
    if let Some(mode) = args.mode {
        config.color_mode = mode.into();
    }
    let geometry = config.geometry()?;

    let mut pager = ViewportPager::open(&args.file, geometry, PagerOptions::from(&config))
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let info = SourceInfo {
        filename: args.file.clone(),
        size_bytes: pager.stream_size(),
    };
    print_source_summary(&info, geometry, &config);

    let mut mirror = FrameMirror::new();
    pager.full_frame().deliver(&mut mirror);

    let pages = args.pages.max(1);
    let pb = ProgressBar::new(pages as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut written = Vec::with_capacity(pages);
    for page in 0..pages {
        if page > 0 {
            let update = pager.jump(JumpDirection::Forward)?;
            if update.is_none() {
                info!(page, "Reached end of data, stopping early");
                break;
            }
            update.deliver(&mut mirror);
        }

        let path = page_path(&args.output, page);
        let frame = mirror.frame().context("No frame to render")?;
        save_png(frame, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(page, window_start = pager.window_start(), path = %path.display(), "Saved page");

        pb.set_message(info.position_label(pager.top_offset().min(info.size_bytes)));
        pb.inc(1);
        written.push(path);
    }

    pb.finish_with_message("Done");
    Ok(written)
}

/// `out.png` for page 0, `out_001.png` for page 1, and so on.
fn page_path(output: &Path, page: usize) -> PathBuf {
    if page == 0 {
        return output.to_path_buf();
    }
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".into());
    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".into());
    output.with_file_name(format!("{stem}_{page:03}.{ext}"))
}

#[cfg(test)]
mod tests {
    use binview_core::io::banded::{write_banded_file, BandSpec};

    use super::*;

    #[test]
    fn test_page_path_suffixes() {
        let out = Path::new("shots/out.png");
        assert_eq!(page_path(out, 0), PathBuf::from("shots/out.png"));
        assert_eq!(page_path(out, 1), PathBuf::from("shots/out_001.png"));
        assert_eq!(page_path(out, 12), PathBuf::from("shots/out_012.png"));
    }

    fn banded_input(dir: &Path) -> PathBuf {
        let path = dir.join("input.bin");
        let spec = BandSpec {
            width: 16,
            band_rows: 4,
            band_count: 2,
        };
        write_banded_file(&path, &spec).unwrap();
        path
    }

    fn render_args(file: PathBuf, output: PathBuf, pages: usize) -> RenderArgs {
        RenderArgs {
            file,
            output,
            view: ViewArgs {
                config: None,
                width: Some(16),
                height: Some(8),
            },
            mode: Some(ModeArg::Grayscale),
            pages,
        }
    }

    #[test]
    fn test_render_stops_at_end_of_data() {
        let dir = tempfile::tempdir().unwrap();
        let input = banded_input(dir.path());
        let output = dir.path().join("out.png");

        // 256 bytes at 16x8 is two frames; the third page is never reached.
        let written = render_pages(&render_args(input, output.clone(), 5)).unwrap();
        assert_eq!(written, vec![output.clone(), dir.path().join("out_001.png")]);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
        assert!(!dir.path().join("out_002.png").exists());
    }

    #[test]
    fn test_render_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = render_args(dir.path().join("missing.bin"), dir.path().join("out.png"), 1);
        let err = render_pages(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }

    #[test]
    fn test_page_path_without_extension() {
        assert_eq!(page_path(Path::new("out"), 2), PathBuf::from("out_002.png"));
    }
}
