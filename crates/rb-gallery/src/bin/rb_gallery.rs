use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::RgbaImage;
use rasterbox::{ByteImage, PixelSource, Raster, pack_rgb_with_alpha_pad, resize};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rb_gallery")]
#[command(about = "Run rasterbox operations on PNG fixtures")]
struct Cli {
    /// Log filter, e.g. `info` or `rb_resize=debug`
    #[arg(long, global = true, env = "RB_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Box-filter resize within the source bounds
    #[command(name = "resize")]
    Resize(ResizeArgs),
    /// Full-resolution export round trip
    #[command(name = "export")]
    Export(CommonArgs),
    /// Pack RGB bytes into the 4-byte ARGB upload layout
    #[command(name = "pack")]
    Pack(CommonArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct ResizeArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long)]
    width: usize,
    #[arg(long)]
    height: usize,
}

#[derive(Debug, Clone, Serialize)]
struct MetaResize {
    source_size: [usize; 2],
    requested_size: [usize; 2],
    effective_size: [usize; 2],
    identity: bool,
    has_alpha: bool,
    policy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct MetaExport {
    size: [usize; 2],
    num_channels: usize,
    has_alpha: bool,
}

#[derive(Debug, Clone, Serialize)]
struct MetaPack {
    size: [usize; 2],
    input_bytes: usize,
    output_bytes: usize,
    layout: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.cmd {
        Command::Resize(args) => run_resize(args),
        Command::Export(args) => run_export(args),
        Command::Pack(args) => run_pack(args),
    }
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("parsing log filter '{filter}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing tracing subscriber: {err}"))
}

fn run_resize(args: ResizeArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "resize")?;
    let img = load_input(&args.common.input)?;

    let dst = resize(&img, args.width, args.height).with_context(|| {
        format!(
            "resizing {}x{} to {}x{}",
            img.width(),
            img.height(),
            args.width,
            args.height
        )
    })?;
    let identity = dst.width() == img.width() && dst.height() == img.height();
    tracing::info!(
        width = dst.width(),
        height = dst.height(),
        identity,
        "resized input"
    );

    save_raster(case_dir.join("resized.png"), &dst)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaResize {
            source_size: [img.width(), img.height()],
            requested_size: [args.width, args.height],
            effective_size: [dst.width(), dst.height()],
            identity,
            has_alpha: dst.has_alpha(),
            policy: "box filter, clamped to source size",
        },
    )?;

    Ok(())
}

fn run_export(args: CommonArgs) -> Result<()> {
    let case_dir = prepare_case(&args, "export")?;
    let img = load_input(&args.input)?;
    let raster = img.to_raster();

    save_raster(case_dir.join("export.png"), &raster)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaExport {
            size: [raster.width(), raster.height()],
            num_channels: img.num_channels(),
            has_alpha: raster.has_alpha(),
        },
    )?;

    Ok(())
}

fn run_pack(args: CommonArgs) -> Result<()> {
    let case_dir = prepare_case(&args, "pack")?;
    let dyn_img = image::open(&args.input)
        .with_context(|| format!("opening input image {}", args.input.display()))?;
    let rgb = dyn_img.to_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    let rgb = rgb.into_raw();

    let packed = pack_rgb_with_alpha_pad(w, h, &rgb).context("packing rgb bytes")?;
    fs::write(case_dir.join("packed.argb"), &packed)
        .with_context(|| format!("writing packed bytes to {}", case_dir.display()))?;
    write_json(
        case_dir.join("meta.json"),
        &MetaPack {
            size: [w, h],
            input_bytes: rgb.len(),
            output_bytes: packed.len(),
            layout: "A,R,G,B with A = 255",
        },
    )?;

    Ok(())
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;
    Ok(case_dir)
}

fn load_input(path: &Path) -> Result<ByteImage> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let (w, h) = (dyn_img.width() as usize, dyn_img.height() as usize);

    let img = if dyn_img.color().has_alpha() {
        ByteImage::from_rgba8(w, h, dyn_img.to_rgba8().into_raw())
    } else {
        ByteImage::from_rgb8(w, h, dyn_img.to_rgb8().into_raw())
    };
    img.with_context(|| format!("constructing pixel source from {}", path.display()))
}

fn save_raster(path: PathBuf, raster: &Raster) -> Result<()> {
    let rgba = RgbaImage::from_raw(
        raster.width() as u32,
        raster.height() as u32,
        raster.to_rgba_bytes(),
    )
    .context("constructing RgbaImage from raster")?;
    rgba.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use image::{Rgb, RgbImage};

    use super::{CommonArgs, ResizeArgs, run_export, run_pack, run_resize};

    fn write_fixture(dir: &Path) -> PathBuf {
        let img = RgbImage::from_fn(4, 4, |x, _| {
            if x < 2 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        });
        let path = dir.join("fixture.png");
        img.save(&path).expect("save fixture");
        path
    }

    fn read_meta(path: PathBuf) -> serde_json::Value {
        let data = fs::read(path).expect("meta.json exists");
        serde_json::from_slice(&data).expect("valid json")
    }

    #[test]
    fn resize_writes_image_and_meta() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let input = write_fixture(tmp.path());
        let out = tmp.path().join("out");

        run_resize(ResizeArgs {
            common: CommonArgs {
                input,
                out: out.clone(),
            },
            width: 2,
            height: 2,
        })
        .expect("resize case");

        let resized = image::open(out.join("resize/resized.png"))
            .expect("resized png")
            .to_rgba8();
        assert_eq!(resized.dimensions(), (2, 2));
        assert_eq!(resized.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(resized.get_pixel(1, 1).0, [0, 0, 255, 255]);

        let meta = read_meta(out.join("resize/meta.json"));
        assert_eq!(meta["effective_size"], serde_json::json!([2, 2]));
        assert_eq!(meta["identity"], serde_json::json!(false));
    }

    #[test]
    fn export_round_trips_pixels() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let input = write_fixture(tmp.path());
        let out = tmp.path().join("out");

        run_export(CommonArgs {
            input: input.clone(),
            out: out.clone(),
        })
        .expect("export case");

        let original = image::open(&input).expect("input").to_rgba8();
        let exported = image::open(out.join("export/export.png"))
            .expect("exported png")
            .to_rgba8();
        assert_eq!(original, exported);
    }

    #[test]
    fn pack_writes_four_bytes_per_pixel() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let input = write_fixture(tmp.path());
        let out = tmp.path().join("out");

        run_pack(CommonArgs {
            input,
            out: out.clone(),
        })
        .expect("pack case");

        let packed = fs::read(out.join("pack/packed.argb")).expect("packed bytes");
        assert_eq!(packed.len(), 4 * 4 * 4);
        assert_eq!(&packed[..8], &[255, 255, 0, 0, 255, 255, 0, 0]);
        assert_eq!(&packed[8..12], &[255, 0, 0, 255]);
    }

    #[test]
    fn missing_input_is_reported() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = run_export(CommonArgs {
            input: tmp.path().join("nope.png"),
            out: tmp.path().join("out"),
        })
        .expect_err("missing input");
        assert!(err.to_string().contains("does not exist"));
    }
}
