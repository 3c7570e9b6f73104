use std::{
    fs, io,
    path::Path,
    process::{exit, Command},
};

const WASM_LIB: &str = "tanks_wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const OUTPUT_DIR: &str = "dist";
/// Sprites and sounds, served next to the bundle under the same relative paths
const MEDIA_DIR: &str = "media";

fn main() {
    println!("\n📦 Packaging [[ {WASM_LIB} ]] into '{OUTPUT_DIR}' for serving through HTTP\n");

    run_step(
        Command::new("cargo")
            .arg("build")
            .args(["-p", WASM_LIB, "--lib", "--target", WASM_TARGET, "--release"]),
    );

    run_step(
        Command::new("wasm-bindgen")
            .arg(format!("target/{WASM_TARGET}/release/{WASM_LIB}.wasm"))
            .args(["--out-dir", OUTPUT_DIR, "--target", "web", "--typescript"]),
    );

    let output = Path::new(OUTPUT_DIR);
    or_exit(
        "copying index.html",
        fs::copy(Path::new(WASM_LIB).join("index.html"), output.join("index.html")).map(|_| ()),
    );

    // the frontend refuses to start without every sprite and sound
    match Path::new(MEDIA_DIR).is_dir() {
        true => or_exit(
            "copying media",
            copy_dir(Path::new(MEDIA_DIR), &output.join(MEDIA_DIR)),
        ),
        false => println!("WARNING :: no '{MEDIA_DIR}' directory to package"),
    }

    println!("\n⚡ Finished packaging browser resources into './{OUTPUT_DIR}'\n");
}

fn run_step(command: &mut Command) {
    println!("EXECUTING :: ( {:?} )", command);

    match command.status() {
        Ok(status) if status.success() => println!("SUCCESS ✔"),
        Ok(status) => {
            println!("FAILURE ✖ ({status})");
            exit(1);
        }
        Err(err) => {
            println!("FAILURE ✖ could not run command: {err}");
            exit(1);
        }
    }
}

fn or_exit(step: &str, result: io::Result<()>) {
    if let Err(err) = result {
        println!("FAILURE ✖ {step}: {err}");
        exit(1);
    }
}

fn copy_dir(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }

    Ok(())
}
