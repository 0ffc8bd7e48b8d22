//! Tests for command-line parsing, parameter mapping and tile output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use mosaic_decomposer::io::cli::{Cli, run, write_tiles};
    use mosaic_decomposer::io::configuration::{
        DEFAULT_MINIMUM_COLOR_MATCH_DIFF, DEFAULT_SKIP_BACK_LINES, DEFAULT_SKIP_FRONT_LINES,
    };
    use mosaic_decomposer::io::source::AcquisitionMode;
    use mosaic_decomposer::{ConfigParams, DecomposeError, SplitDimensions};
    use std::path::PathBuf;

    // Tests CLI parsing with only the required path argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "clip.gif"]);

        assert_eq!(cli.path, PathBuf::from("clip.gif"));
        assert_eq!(cli.mode, AcquisitionMode::Video);
        assert_eq!(cli.skip_front, DEFAULT_SKIP_FRONT_LINES);
        assert_eq!(cli.skip_back, DEFAULT_SKIP_BACK_LINES);
        assert_eq!(cli.color_match_diff, DEFAULT_MINIMUM_COLOR_MATCH_DIFF);
        assert!(cli.should_show_progress());
        assert_eq!(cli.config_params(), ConfigParams::default());
    }

    // Tests every flag maps onto its parameter
    // Verified by swapping skip flags in the mapping
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "still.png",
            "--mode",
            "image",
            "--frames",
            "25",
            "--skip-front",
            "2",
            "--skip-back",
            "3",
            "--pixel-match-ratio",
            "1.8",
            "--color-match-diff",
            "60",
            "--line-match-ratio",
            "2.5",
            "--quiet",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.mode, AcquisitionMode::Image);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level.as_deref(), Some("debug"));

        let params = cli.config_params();
        assert_eq!(params.frames_to_analyze, 25);
        assert_eq!(params.skip_front_lines, 2);
        assert_eq!(params.skip_back_lines, 3);
        assert_eq!(params.minimum_color_match_diff, 60);
        assert!((params.minimum_pixel_match_ratio - 1.8).abs() < f64::EPSILON);
        assert!((params.minimum_line_match_ratio - 2.5).abs() < f64::EPSILON);
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "clip.gif", "-m", "image", "-f", "7", "-q"]);

        assert_eq!(cli.mode, AcquisitionMode::Image);
        assert_eq!(cli.frames, 7);
        assert!(cli.quiet);
    }

    // Tests unknown acquisition modes are rejected
    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["program", "clip.gif", "--mode", "stream"]).is_err());
    }

    // Tests tiles are printed one per line
    // Verified by swapping x and y in the output format
    #[test]
    fn test_write_tiles() {
        let tiles = [
            SplitDimensions {
                x: 0,
                y: 0,
                width: 160,
                height: 90,
            },
            SplitDimensions {
                x: 160,
                y: 0,
                width: 160,
                height: 90,
            },
        ];
        let mut out = Vec::new();

        write_tiles(&mut out, &tiles).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(0; 0), 160x90\n(160; 0), 160x90\n"
        );
    }

    // Tests a full run over a still image with one discordant row
    #[test]
    fn test_run_image_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mosaic.png");
        RgbImage::from_fn(40, 50, |_, y| {
            if y == 30 {
                Rgb([255, 255, 255])
            } else {
                Rgb([20, 60, 20])
            }
        })
        .save(&path)
        .unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", path_arg.as_str(), "--mode", "image", "--quiet"]);
        let tiles = run(&cli).unwrap();

        let rows: Vec<(u16, u16)> = tiles.iter().map(|tile| (tile.y, tile.height)).collect();
        assert_eq!(rows, vec![(0, 30), (30, 20)]);
    }

    // Tests a missing input surfaces as a not-ready source
    #[test]
    fn test_run_missing_input() {
        let cli = Cli::parse_from(["program", "/nonexistent/clip.gif", "--quiet"]);

        assert!(matches!(run(&cli), Err(DecomposeError::SourceNotReady)));
    }
}
