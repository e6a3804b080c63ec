//! Tests for command-line parsing and batch mosaic processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::io::cli::{Cli, FileProcessor};
    use photomosaic::io::configuration::{DEFAULT_MAX_USAGE, DEFAULT_TILE_SIZE};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_image(path: &Path, size: u32, rgb: [u8; 3]) {
        RgbImage::from_pixel(size, size, Rgb(rgb)).save(path).unwrap();
    }

    fn tiles_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_image(&dir.path().join("red.png"), 16, [200, 50, 50]);
        write_image(&dir.path().join("dark.png"), 16, [10, 10, 10]);
        dir
    }

    fn quiet_args(target: &Path, tiles: &Path) -> Vec<String> {
        vec![
            "program".to_string(),
            target.display().to_string(),
            "--tiles".to_string(),
            tiles.display().to_string(),
            "--tile-size".to_string(),
            "8".to_string(),
            "--height".to_string(),
            "16".to_string(),
            "--seed".to_string(),
            "7".to_string(),
            "--quiet".to_string(),
        ]
    }

    // Tests CLI parsing with only required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "photo.jpg", "--tiles", "tiles"]);

        assert_eq!(cli.target, PathBuf::from("photo.jpg"));
        assert_eq!(cli.tiles, PathBuf::from("tiles"));
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.max_usage, DEFAULT_MAX_USAGE);
        assert!(cli.output.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(cli.mosaic_config().validate().is_ok());
    }

    // Tests every option reaches the mosaic configuration
    // Verified by mapping opacity to the usage penalty
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "photo.png",
            "-t",
            "lib",
            "-o",
            "out/result.png",
            "-s",
            "32",
            "-H",
            "900",
            "-m",
            "5",
            "--opacity",
            "0.25",
            "--usage-penalty",
            "1.5",
            "--brightness-weight",
            "2",
            "--seed",
            "99",
            "-q",
            "-v",
            "-n",
        ]);

        let config = cli.mosaic_config();
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.target_height, 900);
        assert_eq!(config.max_usage, 5);
        assert!((config.overlay_opacity - 0.25).abs() < f64::EPSILON);
        assert!((config.usage_penalty_weight - 1.5).abs() < f64::EPSILON);
        assert!((config.brightness_weight - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.seed, Some(99));
        assert_eq!(cli.output, Some(PathBuf::from("out/result.png")));
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
        assert!(cli.verbose);
    }

    // Tests the tiles directory is required
    // Verified by giving the tiles argument a default
    #[test]
    fn test_cli_requires_tiles() {
        assert!(Cli::try_parse_from(["program", "photo.png"]).is_err());
    }

    // Tests default output naming
    // Verified by dropping the suffix
    #[test]
    fn test_output_path_naming() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("shots/beach.jpg")),
            PathBuf::from("shots/beach_mosaic.png")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("beach.png")),
            PathBuf::from("beach_mosaic.png")
        );
    }

    // Tests a single target is turned into a mosaic beside the input
    // Verified by skipping the encode step
    #[test]
    fn test_process_single_file() {
        let tiles = tiles_dir();
        let work = TempDir::new().unwrap();
        let target = work.path().join("photo.png");
        write_image(&target, 32, [200, 50, 50]);

        let cli = Cli::parse_from(quiet_args(&target, tiles.path()));
        FileProcessor::new(cli).process().unwrap();

        let output = work.path().join("photo_mosaic.png");
        let mosaic = image::open(&output).unwrap().to_rgb8();
        assert_eq!(mosaic.dimensions(), (16, 16));
    }

    // Tests existing outputs are skipped unless forced
    // Verified by always regenerating outputs
    #[test]
    fn test_process_skips_existing_output() {
        let tiles = tiles_dir();
        let work = TempDir::new().unwrap();
        let target = work.path().join("photo.png");
        write_image(&target, 32, [10, 10, 10]);
        let output = work.path().join("photo_mosaic.png");
        fs::write(&output, b"placeholder").unwrap();

        let cli = Cli::parse_from(quiet_args(&target, tiles.path()));
        FileProcessor::new(cli).process().unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"placeholder");

        let mut args = quiet_args(&target, tiles.path());
        args.push("--no-skip".to_string());
        FileProcessor::new(Cli::parse_from(args)).process().unwrap();
        assert!(image::open(&output).is_ok());
    }

    // Tests a directory target processes every image once
    // Verified by treating generated mosaics as new targets
    #[test]
    fn test_process_directory_target() {
        let tiles = tiles_dir();
        let work = TempDir::new().unwrap();
        write_image(&work.path().join("a.png"), 24, [200, 50, 50]);
        write_image(&work.path().join("b.jpg"), 24, [10, 10, 10]);
        fs::write(work.path().join("notes.txt"), "ignored").unwrap();

        let mut args = quiet_args(work.path(), tiles.path());
        args.push("--no-skip".to_string());
        FileProcessor::new(Cli::parse_from(args.clone())).process().unwrap();

        assert!(work.path().join("a_mosaic.png").exists());
        assert!(work.path().join("b_mosaic.png").exists());

        // A second run must not produce mosaics of mosaics
        FileProcessor::new(Cli::parse_from(args)).process().unwrap();
        assert!(!work.path().join("a_mosaic_mosaic.png").exists());
    }

    // Tests an explicit output path is rejected for directory targets
    // Verified by writing every mosaic to the same file
    #[test]
    fn test_explicit_output_requires_single_target() {
        let tiles = tiles_dir();
        let work = TempDir::new().unwrap();
        write_image(&work.path().join("a.png"), 16, [1, 1, 1]);
        write_image(&work.path().join("b.png"), 16, [2, 2, 2]);

        let mut args = quiet_args(work.path(), tiles.path());
        args.extend(["--output".to_string(), "single.png".to_string()]);
        let result = FileProcessor::new(Cli::parse_from(args)).process();

        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "output",
                ..
            })
        ));
    }

    // Tests unsupported targets and missing tile directories fail
    // Verified by silently ignoring unknown extensions
    #[test]
    fn test_process_errors() {
        let tiles = tiles_dir();
        let work = TempDir::new().unwrap();
        let text = work.path().join("photo.txt");
        fs::write(&text, "not an image").unwrap();

        let cli = Cli::parse_from(quiet_args(&text, tiles.path()));
        assert!(FileProcessor::new(cli).process().is_err());

        let target = work.path().join("photo.png");
        write_image(&target, 16, [5, 5, 5]);
        let cli = Cli::parse_from(quiet_args(&target, &work.path().join("no_tiles")));
        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(MosaicError::FileSystem { .. })
        ));

        let cli = Cli::parse_from(quiet_args(&work.path().join("absent.png"), tiles.path()));
        assert!(FileProcessor::new(cli).process().is_err());
    }
}
