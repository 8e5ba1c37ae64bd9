use std::env;
use std::fs;
use std::path::PathBuf;

use foundation::math::PixelVec;
use interaction::{ClusterId, build_spider};
use serde::Serialize;
use spider::{LayoutKind, SpiderConfig, leaf_offsets};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "layout" => cmd_layout(args),
        "leaves" => cmd_leaves(args),
        _ => Err(usage()),
    }
}

#[derive(Serialize)]
struct LayoutOutput {
    layout: &'static str,
    offsets: Vec<[f64; 2]>,
}

fn cmd_layout(args: Vec<String>) -> Result<(), String> {
    // spiderfy layout <count>
    let [count] = args.as_slice() else {
        return Err(usage());
    };
    let count: usize = count
        .parse()
        .map_err(|e| format!("invalid leaf count {count:?}: {e}"))?;

    let config = SpiderConfig::default();
    let output = LayoutOutput {
        layout: layout_name(LayoutKind::for_leaf_count(count, &config)),
        offsets: leaf_offsets(count, &config)
            .into_iter()
            .map(|o| [o.x, o.y])
            .collect(),
    };

    let payload = serde_json::to_string_pretty(&output).map_err(|e| format!("json: {e}"))?;
    println!("{payload}");
    Ok(())
}

#[derive(Serialize)]
struct LeavesOutput {
    layout: &'static str,
    leaves: Vec<interaction::LeafDisplayProps>,
}

fn cmd_leaves(args: Vec<String>) -> Result<(), String> {
    // spiderfy leaves <file.geojson>
    let [path] = args.as_slice() else {
        return Err(usage());
    };
    let path = PathBuf::from(path);

    let payload = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;
    let leaves =
        formats::leaves_from_geojson_str(&payload).map_err(|e| format!("decode leaves: {e}"))?;

    let config = SpiderConfig::default();
    let snapshot = build_spider(ClusterId(0), PixelVec::ZERO, &leaves, &config);
    let output = LeavesOutput {
        layout: layout_name(snapshot.layout),
        leaves: snapshot.legs.iter().map(|leg| leg.display_props()).collect(),
    };

    let json = serde_json::to_string_pretty(&output).map_err(|e| format!("json: {e}"))?;
    println!("{json}");
    Ok(())
}

fn layout_name(kind: LayoutKind) -> &'static str {
    match kind {
        LayoutKind::Circle => "circle",
        LayoutKind::Spiral => "spiral",
    }
}

fn usage() -> String {
    [
        "usage:",
        "  spiderfy layout <count>",
        "      print pixel offsets for <count> leaves (default config)",
        "  spiderfy leaves <file.geojson>",
        "      decode a cluster-leaves payload and print its spiderfied",
        "      per-leaf display properties",
    ]
    .join("\n")
}
