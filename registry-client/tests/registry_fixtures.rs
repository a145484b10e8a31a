use registry_proto::{MetadataResponse, StubRegistry, Version};
use std::collections::HashMap;

pub const UDPA: &str = "@cncf/udpa";
pub const GOOGLEAPIS: &str = "@googleapis/googleapis";

pub fn udpa() -> MetadataResponse {
    MetadataResponse {
        name: UDPA.to_string(),
        description: "Universal Data Plane API".to_string(),
        versions: HashMap::from([(
            "0.0.1".to_string(),
            Version {
                name: UDPA.to_string(),
                version: "0.0.1".to_string(),
                dependencies: HashMap::from([(GOOGLEAPIS.to_string(), "1.0.0".to_string())]),
            },
        )]),
    }
}

pub fn googleapis() -> MetadataResponse {
    MetadataResponse {
        name: GOOGLEAPIS.to_string(),
        description: "Public interface definitions of Google APIs".to_string(),
        versions: HashMap::from([
            (
                "1.0.0".to_string(),
                Version {
                    name: GOOGLEAPIS.to_string(),
                    version: "1.0.0".to_string(),
                    dependencies: HashMap::new(),
                },
            ),
            (
                "1.1.0".to_string(),
                Version {
                    name: GOOGLEAPIS.to_string(),
                    version: "1.1.0".to_string(),
                    dependencies: HashMap::new(),
                },
            ),
        ]),
    }
}

pub fn stub_registry() -> StubRegistry {
    StubRegistry::new(HashMap::from([
        (UDPA.to_string(), udpa()),
        (GOOGLEAPIS.to_string(), googleapis()),
    ]))
}
