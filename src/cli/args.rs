use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autocrop",
    version,
    about = "Trim fully-transparent borders from raster images"
)]
pub struct CliArgs {
    /// Input raster image (any decodable format)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Logo output path (PNG)
    #[arg(long, default_value = "logo.png")]
    pub logo: PathBuf,

    /// Favicon output path (PNG)
    #[arg(long, default_value = "favicon.png")]
    pub favicon: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_default_to_logo_and_favicon() {
        let args = CliArgs::try_parse_from(["autocrop", "--input", "in.png"])
            .expect("input alone is a valid invocation");
        assert_eq!(args.logo, PathBuf::from("logo.png"));
        assert_eq!(args.favicon, PathBuf::from("favicon.png"));
        assert!(!args.log);
    }

    #[test]
    fn input_is_required() {
        assert!(CliArgs::try_parse_from(["autocrop"]).is_err());
    }
}
