//! Execution providers the inference engine can be asked to use.

use serde::{Deserialize, Serialize};

/// Hardware backend passed to the engine via `--execution-providers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionProvider {
    /// Plain CPU execution.
    Cpu,
    /// NVIDIA CUDA.
    #[default]
    Cuda,
    /// NVIDIA `TensorRT`.
    TensorRt,
    /// Windows `DirectML`.
    DirectMl,
    /// Apple `CoreML`.
    CoreMl,
    /// AMD `ROCm`.
    Rocm,
    /// Intel `OpenVINO`.
    OpenVino,
}

impl ExecutionProvider {
    /// Every provider, in display order.
    pub const ALL: [Self; 7] = [
        Self::Cpu,
        Self::Cuda,
        Self::TensorRt,
        Self::DirectMl,
        Self::CoreMl,
        Self::Rocm,
        Self::OpenVino,
    ];

    /// Metadata for this provider.
    #[must_use]
    pub const fn metadata(self) -> ProviderMetadata {
        match self {
            Self::Cpu => ProviderMetadata {
                id: "cpu",
                name: "CPU",
                description: "CPU (always available)",
            },
            Self::Cuda => ProviderMetadata {
                id: "cuda",
                name: "CUDA",
                description: "CUDA (NVIDIA GPU acceleration)",
            },
            Self::TensorRt => ProviderMetadata {
                id: "tensorrt",
                name: "TensorRT",
                description: "TensorRT (NVIDIA optimized inference)",
            },
            Self::DirectMl => ProviderMetadata {
                id: "directml",
                name: "DirectML",
                description: "DirectML (Windows GPU acceleration)",
            },
            Self::CoreMl => ProviderMetadata {
                id: "coreml",
                name: "CoreML",
                description: "CoreML (Apple GPU/Neural Engine)",
            },
            Self::Rocm => ProviderMetadata {
                id: "rocm",
                name: "ROCm",
                description: "ROCm (AMD GPU acceleration)",
            },
            Self::OpenVino => ProviderMetadata {
                id: "openvino",
                name: "OpenVINO",
                description: "OpenVINO (Intel optimization)",
            },
        }
    }

    /// Identifier passed on the engine command line.
    pub const fn id(self) -> &'static str {
        self.metadata().id
    }
}

impl std::fmt::Display for ExecutionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ExecutionProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| format!("unknown execution provider: {s}"))
    }
}

/// Metadata for an execution provider.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProviderMetadata {
    /// Command-line identifier (e.g., "cuda", "tensorrt").
    pub id: &'static str,
    /// Display name (e.g., "CUDA", "`TensorRT`").
    pub name: &'static str,
    /// Full description for human output.
    pub description: &'static str,
}
