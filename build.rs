fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the identity service proto shipped with this crate
    let proto_file = "proto/lumen.proto";

    // Tell cargo to recompile if the proto file changes
    println!("cargo:rerun-if-changed={}", proto_file);

    // Point tonic/prost at a vendored protoc so the build does not depend on a
    // system-installed protobuf compiler being present.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    tonic_build::configure()
        .build_server(false) // We only need the client
        .compile_protos(&[proto_file], &["proto"])?;

    Ok(())
}
