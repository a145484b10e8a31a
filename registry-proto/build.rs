use std::env::var;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // List of proto files containing a message definition
    let proto_files = &["proto/plm/registry/v1/registry.proto"];

    // Name of the folder containing the proto definitions
    let proto_folder = "proto";
    let out_dir = var("OUT_DIR")?;
    let descriptors_path = format!("{}/descriptors.bin", out_dir);

    let mut config = prost_build::Config::new();
    if var("PROTOC").is_err() {
        let protoc = protoc_bin_vendored::protoc_bin_path().map_err(|e| format!("{e:?}"))?;
        config.protoc_executable(protoc);
    }

    println!("cargo:rerun-if-changed={proto_folder}");

    tonic_prost_build::configure()
        .file_descriptor_set_path(descriptors_path)
        .type_attribute(
            ".",
            "#[derive(serde::Serialize, serde::Deserialize)] #[serde(default)]",
        )
        .build_client(false)
        .build_server(true)
        .compile_with_config(config, proto_files, &[proto_folder])?;

    Ok(())
}
