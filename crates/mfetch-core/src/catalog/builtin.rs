//! The built-in model table, in install order.

use std::path::Path;

use super::{Catalog, DownloadTask, Group, ModelCategory};

struct Entry {
    url: &'static str,
    category: ModelCategory,
    file_name: &'static str,
}

const WAN22: &[Entry] = &[
    Entry {
        url: "https://civitai.com/api/download/models/2137014?type=Model&format=GGUF&size=full&fp=fp8",
        category: ModelCategory::DiffusionModels,
        file_name: "rapidWAN22I2VGGUF_q4KMRapidV91NSFW.gguf",
    },
    Entry {
        url: "https://huggingface.co/ratoenien/umt5_xxl_fp8_e4m3fn_scaled/resolve/main/umt5_xxl_fp8_e4m3fn_scaled.safetensors",
        category: ModelCategory::TextEncoders,
        file_name: "umt5_xxl_fp8_e4m3fn_scaled.safetensors",
    },
    Entry {
        url: "https://huggingface.co/hfmaster/models-moved/resolve/8b8d4cae76158cd49410d058971bb0e591966e04/sdxl/ipadapter/clip-vision_vit-h.safetensors",
        category: ModelCategory::ClipVision,
        file_name: "clip-vision_vit-h.safetensors",
    },
    Entry {
        url: "https://huggingface.co/Comfy-Org/Wan_2.1_ComfyUI_repackaged/resolve/ab076c7a07868990c4506a87f2f60020763a0114/split_files/vae/wan_2.1_vae.safetensors",
        category: ModelCategory::Vae,
        file_name: "Wan2.1_VAE.safetensors",
    },
];

const QWEN_IMAGE: &[Entry] = &[
    Entry {
        url: "https://huggingface.co/Comfy-Org/Qwen-Image_ComfyUI/resolve/main/split_files/diffusion_models/qwen_image_fp8_e4m3fn.safetensors",
        category: ModelCategory::DiffusionModels,
        file_name: "qwen_image_fp8_e4m3fn.safetensors",
    },
    Entry {
        url: "https://huggingface.co/Comfy-Org/Qwen-Image_ComfyUI/resolve/main/split_files/text_encoders/qwen_2.5_vl_7b_fp8_scaled.safetensors",
        category: ModelCategory::TextEncoders,
        file_name: "qwen_2.5_vl_7b_fp8_scaled.safetensors",
    },
    Entry {
        url: "https://huggingface.co/Comfy-Org/Qwen-Image_ComfyUI/resolve/main/split_files/vae/qwen_image_vae.safetensors",
        category: ModelCategory::Vae,
        file_name: "qwen_image_vae.safetensors",
    },
    Entry {
        url: "https://huggingface.co/lightx2v/Qwen-Image-Lightning/resolve/main/Qwen-Image-Lightning-4steps-V2.0.safetensors",
        category: ModelCategory::Loras,
        file_name: "Qwen-Image-Lightning-4steps-V2.0.safetensors",
    },
];

const HUNYUAN3D: &[Entry] = &[Entry {
    url: "https://huggingface.co/Comfy-Org/hunyuan3D_2.1_repackaged/resolve/main/hunyuan_3d_v2.1.safetensors",
    category: ModelCategory::Checkpoints,
    file_name: "hunyuan_3d_v2.1.safetensors",
}];

const GROUPS: &[(&str, &[Entry])] = &[
    ("wan22", WAN22),
    ("qwen_image", QWEN_IMAGE),
    ("hunyuan3d", HUNYUAN3D),
];

/// Catalog of every known model, with destinations under `models_dir/<category>/`.
pub fn builtin(models_dir: &Path) -> Catalog {
    let groups = GROUPS
        .iter()
        .map(|(name, entries)| Group {
            name: (*name).to_string(),
            tasks: entries
                .iter()
                .map(|e| DownloadTask {
                    source_url: e.url.to_string(),
                    destination: models_dir.join(e.category.dir_name()).join(e.file_name),
                })
                .collect(),
        })
        .collect();
    // Names in GROUPS are distinct and none is "all"; see tests.
    Catalog::from_groups_unchecked(groups)
}
