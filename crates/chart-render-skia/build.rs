// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia/ICU need when the raster backend is enabled.

fn main() {
    #[cfg(target_os = "windows")]
    {
        if std::env::var_os("CARGO_FEATURE_RASTER").is_some() {
            // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
            println!("cargo:rustc-link-lib=advapi32");
        }
    }
}
