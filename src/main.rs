use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use seedbrush::{
    bucket_index, onchain, svg, to_decimal_string, Color, ColorAttribute, Seed,
};

/// Render a sample on-chain token from a starting seed.
///
/// Walks the seed chain to pick weighted palette entries, randomizes the
/// gradient colors, and prints the resulting token URI (or the raw
/// metadata JSON with `--raw`).
#[derive(Parser)]
#[command(name = "seedbrush")]
struct Args {
    /// Starting seed: 64 hex characters, `0x` prefix optional.
    seed: Seed,

    /// Token name embedded in the metadata.
    #[arg(long, default_value = "Seedbrush")]
    name: String,

    /// View box width.
    #[arg(long, default_value_t = 360)]
    width: u32,

    /// View box height.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Palette file: JSON array of `{name, color, weight}` entries, with
    /// `color` packed as a 24-bit integer and weights summing to at most
    /// 100 (the last entry takes any remainder).
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Print the raw metadata JSON instead of the encoded token URI.
    #[arg(long)]
    raw: bool,
}

/// One weighted palette entry; `color` is packed `0xRRGGBB`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaletteEntry {
    name: String,
    color: u32,
    weight: u8,
}

fn default_palette() -> Vec<PaletteEntry> {
    [
        ("Sky", 0x41B0F6, 38),
        ("Porcelain", 0xF0F0F0, 33),
        ("Indigo", 0x2E294E, 19),
        ("Ember", 0xEF8354, 9),
        ("Crimson", 0xD7263D, 1),
    ]
    .into_iter()
    .map(|(name, color, weight)| PaletteEntry {
        name: name.into(),
        color,
        weight,
    })
    .collect()
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let palette: Vec<PaletteEntry> = match &args.palette {
        Some(path) => serde_json::from_slice(&fs::read(path)?)?,
        None => default_palette(),
    };
    if palette.is_empty() {
        return Err("palette must contain at least one entry".into());
    }
    let weights: Vec<u8> = palette.iter().map(|entry| entry.weight).collect();
    let last = palette.len() - 1;

    let mut seed = args.seed;
    seed = seed.next();
    let base = &palette[bucket_index(seed.low_byte(), &weights)?.min(last)];
    seed = seed.next();
    let accent = &palette[bucket_index(seed.low_byte(), &weights)?.min(last)];

    seed = seed.next();
    let top = Color::randomize(
        Color::from_packed(base.color),
        Color::from_packed(base.color).brighten(40, 8),
        random_color(&seed),
    );
    seed = seed.next();
    let bottom = Color::randomize(
        Color::from_packed(accent.color),
        Color::from_packed(accent.color).brighten(25, 4),
        random_color(&seed),
    );
    eprintln!(
        "base={} accent={} top=#{:06X} bottom=#{:06X}",
        base.name,
        accent.name,
        top.packed(),
        bottom.packed()
    );

    let image = render_image(args.width, args.height, top, bottom);
    let metadata = render_metadata(&args.name, base, accent, top, &image);

    if args.raw {
        println!("{metadata}");
    } else {
        println!("{}", onchain::token_uri(&metadata));
    }
    Ok(())
}

/// Fold the low-order seed bytes into a random color for the algebra.
fn random_color(seed: &Seed) -> Color {
    let bytes = seed.as_bytes();
    Color::rgb(bytes[29], bytes[30], bytes[31])
}

fn render_image(width: u32, height: u32, top: Color, bottom: Color) -> String {
    let stops = format!(
        "{}{}",
        svg::create_element(
            "stop",
            &format!(
                " offset='0'{}",
                svg::color_attribute(ColorAttribute::Stop, &svg::rgb_value(top))
            ),
            "",
        ),
        svg::create_element(
            "stop",
            &format!(
                " offset='1'{}",
                svg::color_attribute(ColorAttribute::Stop, &svg::rgb_value(bottom))
            ),
            "",
        ),
    );
    let gradient = svg::create_element(
        "linearGradient",
        " id='wash' x1='0' y1='0' x2='0' y2='1'",
        &stops,
    );
    let backdrop = svg::create_element(
        "rect",
        &format!(
            " width='{width}' height='{height}'{}",
            svg::color_attribute(ColorAttribute::Fill, &svg::url_value("wash"))
        ),
        "",
    );
    svg::create_element(
        "svg",
        &svg::svg_attributes(width, height),
        &format!("{}{backdrop}", svg::create_element("defs", "", &gradient)),
    )
}

fn render_metadata(
    name: &str,
    base: &PaletteEntry,
    accent: &PaletteEntry,
    top: Color,
    image: &str,
) -> String {
    // Rec. 601 luma of the upper stop, rendered with three decimals.
    let luma = u128::from(top.red) * 299 + u128::from(top.green) * 587 + u128::from(top.blue) * 114;
    let attributes = [
        onchain::trait_attribute("Base", &base.name),
        onchain::trait_attribute("Accent", &accent.name),
        onchain::trait_attribute("Luma", &to_decimal_string(luma, 3, false)),
    ];
    let contents = format!(
        "{}{}{}",
        onchain::key_value_string("name", name),
        onchain::continues_with(&onchain::key_value_array(
            "attributes",
            &onchain::comma_separated([
                attributes[0].as_str(),
                attributes[1].as_str(),
                attributes[2].as_str(),
            ]),
        )),
        onchain::continues_with(&onchain::key_value_string(
            "image",
            &onchain::svg_image_uri(image),
        )),
    );
    onchain::dictionary(&contents)
}
