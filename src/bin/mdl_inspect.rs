use std::path::{Path, PathBuf};

use mdl_tools::MdlModel;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut json = false;
    let mut path: Option<PathBuf> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other => path = Some(PathBuf::from(other)),
        }
    }

    let Some(path) = path else {
        eprintln!("Usage:");
        eprintln!("  mdl_inspect <model.mdl> [--json]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  mdl_inspect progs/player.mdl");
        eprintln!("  mdl_inspect progs/flame.mdl --json");
        std::process::exit(1);
    };

    let model = match MdlModel::from_file(&path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Inspect failed: {:?}", e);
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&model) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("JSON encode failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_summary(&path, &model);
}

fn print_summary(path: &Path, model: &MdlModel) {
    let header = &model.header;
    println!("{}", path.display());
    println!(
        "  scale: {:?}  translation: {:?}",
        header.scale.to_slice(),
        header.translation.to_slice()
    );
    println!(
        "  bounding radius: {}  eye position: {:?}",
        header.bounding_radius,
        header.eye_position.to_slice()
    );
    println!(
        "  textures: {} group(s) at {}x{}",
        header.texture_group_num, header.texture_width, header.texture_height
    );
    println!(
        "  vertices: {}  triangles: {}  frame groups: {}",
        header.vertex_num, header.triangle_num, header.frame_group_num
    );
    println!(
        "  sync type: {}  flags: {:#010x}  size: {}",
        header.sync_type, header.flags, header.size
    );

    for (i, group) in model.texture_group_seq.iter().enumerate() {
        println!(
            "  texture group {}: {} texture(s), times {:?}",
            i,
            group.texture_seq.len(),
            group.time_seq
        );
    }
    for (i, group) in model.frame_group_seq.iter().enumerate() {
        let names: Vec<&str> = group.frame_seq.iter().map(|f| f.name.as_str()).collect();
        println!(
            "  frame group {}: {} frame(s): {}",
            i,
            group.frame_seq.len(),
            names.join(", ")
        );
    }
}
