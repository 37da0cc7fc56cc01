// build.rs

fn main() {
    // Migrations are embedded into the binary, so a change must trigger a rebuild.
    println!("cargo:rerun-if-changed=migrations");
}
