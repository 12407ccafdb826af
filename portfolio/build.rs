// `RUST_LOG_PRETTY=1` at build time switches the log output of the binary to
// the multi-line pretty format.
fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=RUST_LOG_PRETTY");
    if std::env::var("RUST_LOG_PRETTY").as_deref() == Ok("1") {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
