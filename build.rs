fn main() {
    // Stamped into the binary and the WASM bundle so the footer year is identical
    // on both sides of hydration.
    println!("cargo:rustc-env=BUILD_TIME={}", chrono::Utc::now().to_rfc3339());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-env-changed=GA_TRACKING_ID");
}
