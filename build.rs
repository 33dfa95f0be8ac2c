fn main() {
    // Bindings come from the proc-macros in uniffi_bindings.rs, so there is no UDL to compile.
    // The translation prompt is embedded with include_str!, which cargo already tracks.
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
